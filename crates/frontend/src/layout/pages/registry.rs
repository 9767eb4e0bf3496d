//! Page registry - the single mapping from page key to view.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_orders::ui::list::OrderList;
use crate::domain::a002_customers::ui::list::CustomerList;
use crate::system::pages::help::HelpPage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;

pub fn render_page(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <OverviewDashboard /> }.into_any(),
        "orders" => view! { <OrderList /> }.into_any(),
        "customers" => view! { <CustomerList /> }.into_any(),
        "settings" => view! { <SettingsPage /> }.into_any(),
        "help" => view! { <HelpPage /> }.into_any(),
        other => {
            log::warn!("render_page: no view for '{}'", other);
            view! {
                <div class="placeholder">{format!("Unknown page: {}", other)}</div>
            }
            .into_any()
        }
    }
}
