//! TopHeader component - application top navigation bar.
//!
//! Sidebar toggle, title of the current page, user info.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">
                    {move || ctx.active.with(|key| page_label(key).to_string())}
                </span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Settings" on:click=move |_| ctx.open_page("settings")>
                    {icon("settings")}
                </button>
                <div class="top-header__user">
                    {icon("user")}
                    <span>"Admin User"</span>
                </div>
            </div>
        </div>
    }
}
