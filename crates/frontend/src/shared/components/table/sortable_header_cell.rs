//! Clickable column header with a sort indicator.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Total"
//!     sort_field=fields::TOTAL
//!     sort=Signal::derive(move || list.with(|c| c.sort().clone()))
//!     on_sort=Callback::new(move |field: String| list.update(|c| c.set_sort(&field)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_view::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Field name passed to `on_sort`
    #[prop(into)]
    sort_field: String,
    /// Current sort of the list
    #[prop(into)]
    sort: Signal<SortState>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
    /// "left" or "right" (numeric columns)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, &sort_field))>
                    {move || sort.with(|s| get_sort_indicator(s, &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
