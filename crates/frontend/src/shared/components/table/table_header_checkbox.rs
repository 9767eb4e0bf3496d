//! "Select all" checkbox in the table header.
//!
//! Scoped to the rows of the current page: the state comes from
//! `ListViewController::page_selection_state`, a change calls
//! `select_all_visible`.

use contracts::shared::list_view::PageSelection;
use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TableHeaderCheckbox(
    /// Tri-state of the current page
    #[prop(into)]
    state: Signal<PageSelection>,
    /// true = select the page, false = clear the selection
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` has no HTML attribute, only the DOM property
    Effect::new(move |_| {
        let indeterminate = state.get() == PageSelection::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == PageSelection::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
