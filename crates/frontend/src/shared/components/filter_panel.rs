use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Collapsible filter panel of a list screen.
///
/// The header always shows the active filter count and the pager; the body
/// holds the draft form with Apply / Reset / Cancel.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_open: Signal<bool>,
    /// Header click
    on_toggle: Callback<()>,
    /// Constraints of the applied filter (badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
    on_cancel: Callback<()>,
    /// Pager shown in the header
    #[prop(into)]
    pagination_controls: ViewFn,
    /// Form fields
    #[prop(into)]
    filter_content: ViewFn,
    /// Chips of the applied filter
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=move |_| on_toggle.run(())>
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_open.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            {filter_tags.map(|tags| view! { <div class="filter-panel__tags">{move || tags.run()}</div> })}

            <Show when=move || is_open.get()>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    <div class="filter-panel__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_apply.run(())>
                            "Apply Filters"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_reset.run(())>
                            "Reset"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                            {icon("x")}
                            " Cancel"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Chip of one applied constraint.
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
