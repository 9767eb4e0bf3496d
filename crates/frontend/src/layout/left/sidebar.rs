//! Flat navigation menu of the admin dashboard.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{page_label, NAV_PAGES};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {NAV_PAGES
                .iter()
                .map(|&(key, icon_name)| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.is_active(key)
                            style:padding-left="12px"
                            on:click=move |_| ctx.open_page(key)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{page_label(key)}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
