use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

const TOPICS: [(&str, &str); 5] = [
    (
        "Filtering",
        "Open the filter panel, fill in any fields and press Apply Filters. \
         Nothing changes in the table until you apply. Each active filter shows \
         as a tag; removing a tag drops just that filter.",
    ),
    (
        "Sorting",
        "Click a column title to sort ascending, click it again for descending. \
         Sorting keeps the current page.",
    ),
    (
        "Pages",
        "Use the pager next to the filter title. Changing the page size or the \
         filter returns to the first page.",
    ),
    (
        "Selection and bulk actions",
        "Tick rows to select them. The header checkbox selects the rows of the \
         current page only; unticking it clears the whole selection. Bulk \
         actions are enabled while at least one row is selected.",
    ),
    (
        "Details",
        "Click an order number or a customer name to open its details. Escape \
         or a click outside closes the topmost window.",
    ),
];

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_help--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Help"</h1>
                </div>
            </div>
            <div class="page__content">
                {TOPICS
                    .iter()
                    .map(|(title, text)| view! {
                        <div class="details-section">
                            <h4 class="details-section__title">{*title}</h4>
                            <p>{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
