use leptos::prelude::*;
use thaw::*;

/// Row checkbox; clicks do not reach the row.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_id: String,
    /// Whether this row is selected
    #[prop(into)]
    checked: Signal<bool>,
    /// (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run((item_id.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
