use crate::shared::icons::icon;
use contracts::shared::list_view::{PageLink, Pagination};
use leptos::prelude::*;

/// Pager of a list screen: first/previous/numbered/next/last buttons and the
/// page size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Pagination state of the controller
    #[prop(into)]
    pagination: Signal<Pagination>,
    /// Number of records passing the filter
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let page = move || pagination.get().page();
    let total_pages = move || pagination.get().total_pages(total_count.get());

    let range_text = move || {
        let count = total_count.get();
        let range = pagination.get().range(count);
        if count == 0 {
            "No results".to_string()
        } else {
            format!("{}–{} of {}", range.start + 1, range.end, count)
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page().saturating_sub(1))
                disabled=move || page() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = page();
                pagination
                    .get()
                    .links(total_count.get())
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Page(n) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=n == current
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n}
                            </button>
                        }
                        .into_any(),
                        PageLink::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page() + 1)
                disabled=move || page() >= total_pages()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages())
                disabled=move || page() >= total_pages()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-info">{range_text}</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<usize>() {
                        Ok(size) => on_page_size_change.run(size),
                        Err(e) => log::warn!("ignoring page size: {}", e),
                    }
                }
                prop:value=move || pagination.get().page_size().to_string()
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || pagination.get().page_size() == size
                            >
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
