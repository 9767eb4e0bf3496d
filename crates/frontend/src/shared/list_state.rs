//! Reactive wrapper around a list view controller and its filter panel.
//!
//! Both list screens keep one `ListScreenState` and route every UI event
//! through it, so a transition always updates the controller in one step.

use contracts::shared::config::ListConfig;
use contracts::shared::list_view::{
    FilterDraft, FilterPanel, ListRecord, ListViewController, PageSelection, Pagination,
    RecordStore, SelectionPolicy, SortState,
};
use leptos::prelude::*;

pub struct ListScreenState<R, D>
where
    R: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    pub list: RwSignal<ListViewController<R>>,
    pub filter: RwSignal<FilterPanel<D>>,
    /// Last store failure, shown above the table
    pub error: RwSignal<Option<String>>,
}

impl<R, D> Clone for ListScreenState<R, D>
where
    R: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, D> Copy for ListScreenState<R, D>
where
    R: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
}

impl<R, D> ListScreenState<R, D>
where
    R: ListRecord + Clone + Send + Sync + 'static,
    D: FilterDraft + Send + Sync + 'static,
{
    /// Empty list with the configured page size and initial sort.
    pub fn new(config: &ListConfig, policy: SelectionPolicy) -> Self {
        Self {
            list: RwSignal::new(config.controller(Vec::new(), policy)),
            filter: RwSignal::new(FilterPanel::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn reload<S: RecordStore<R>>(&self, store: &S) {
        let result = self.list.try_update(|c| c.reload(store));
        match result {
            Some(Err(e)) => {
                log::error!("failed to load records: {}", e);
                self.error.set(Some(e.to_string()));
            }
            _ => self.error.set(None),
        }
    }

    // ---- filter panel ----

    pub fn toggle_panel(&self) {
        self.filter.update(|p| p.toggle());
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut D)) {
        self.filter.update(|p| p.edit(f));
    }

    pub fn apply_filter(&self) {
        if let Some(criteria) = self.filter.try_update(|p| p.apply()) {
            self.list.update(|c| c.set_filter(criteria));
        }
    }

    pub fn reset_filter(&self) {
        self.filter.update(|p| p.reset());
    }

    pub fn cancel_filter(&self) {
        self.filter.update(|p| p.cancel());
    }

    pub fn remove_filter(&self, field: &str) {
        if let Some(criteria) = self.filter.try_update(|p| p.remove(field)) {
            self.list.update(|c| c.set_filter(criteria));
        }
    }

    pub fn is_panel_open(&self) -> Signal<bool> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|p| p.is_open()))
    }

    pub fn active_filters_count(&self) -> Signal<usize> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|p| p.active_count()))
    }

    /// Read one value of the draft (form inputs)
    pub fn draft_value<T: 'static>(&self, f: impl Fn(&D) -> T + Send + Sync + 'static) -> Signal<T>
    where
        T: Send + Sync,
    {
        let filter = self.filter;
        Signal::derive(move || filter.with(|p| f(p.draft())))
    }

    // ---- sort / pages ----

    pub fn sort_signal(&self) -> Signal<SortState> {
        let list = self.list;
        Signal::derive(move || list.with(|c| c.sort().clone()))
    }

    pub fn sort_by(&self, field: &str) {
        self.list.update(|c| c.set_sort(field));
    }

    pub fn pagination(&self) -> Signal<Pagination> {
        let list = self.list;
        Signal::derive(move || list.with(|c| c.pagination()))
    }

    pub fn filtered_count(&self) -> Signal<usize> {
        let list = self.list;
        Signal::derive(move || list.with(|c| c.filtered_count()))
    }

    pub fn go_to_page(&self, page: usize) {
        self.list.update(|c| c.set_page(page));
    }

    pub fn change_page_size(&self, page_size: usize) {
        self.list.update(|c| c.set_page_size(page_size));
    }

    /// Records of the current page, cloned for rendering.
    pub fn visible(&self) -> Vec<R> {
        self.list
            .with(|c| c.visible_records().into_iter().cloned().collect())
    }

    // ---- selection ----

    pub fn toggle_row(&self, id: &str, checked: bool) {
        self.list.update(|c| {
            c.toggle_selection(id, checked);
        });
    }

    pub fn toggle_page(&self, checked: bool) {
        self.list.update(|c| c.select_all_visible(checked));
    }

    pub fn is_selected(&self, id: String) -> Signal<bool> {
        let list = self.list;
        Signal::derive(move || list.with(|c| c.is_selected(&id)))
    }

    pub fn page_selection(&self) -> Signal<PageSelection> {
        let list = self.list;
        Signal::derive(move || list.with(|c| c.page_selection_state()))
    }

    pub fn selected_count(&self) -> Signal<usize> {
        let list = self.list;
        Signal::derive(move || list.with(|c| c.selection().len()))
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.list.with_untracked(|c| c.selected_ids())
    }
}
