use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Left zone: brand, navigation, signed-in user.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // No session handling; logout is only reported
    let logout = move |_| log::info!("would log out 'admin@example.com'");

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__brand">
                <span class="app-sidebar__title">"Order Management"</span>
            </div>

            <nav class="app-sidebar__nav">
                {children()}
            </nav>

            <div class="app-sidebar__footer">
                <div class="app-sidebar__user">
                    <span class="app-sidebar__avatar">"AU"</span>
                    <div>
                        <div class="app-sidebar__user-name">"Admin User"</div>
                        <div class="app-sidebar__user-email">"admin@example.com"</div>
                    </div>
                </div>
                <div class="app-sidebar__item" on:click=logout>
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </div>
                </div>
            </div>
        </aside>
    }
}
