use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    // Detail modals and dialogs are pushed onto one stack
    provide_context(ModalStackService::new());

    view! {
        <AppRoutes />
    }
}
