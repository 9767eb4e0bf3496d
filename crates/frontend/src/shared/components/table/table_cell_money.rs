use crate::shared::list_utils::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell (`$1,299.99`).
#[component]
pub fn TableCellMoney(
    value: f64,
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let style = if bold {
        "text-align: right; font-variant-numeric: tabular-nums; font-weight: 600;"
    } else {
        "text-align: right; font-variant-numeric: tabular-nums;"
    };

    view! {
        <TableCell>
            <TableCellLayout>
                <div style=style>{format_money(value)}</div>
            </TableCellLayout>
        </TableCell>
    }
}
