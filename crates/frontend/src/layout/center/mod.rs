use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::render_page;
use leptos::prelude::*;

/// Content zone: renders the page selected in the sidebar.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || {
                let key = ctx.active.get();
                render_page(&key)
            }}
        </div>
    }
}
