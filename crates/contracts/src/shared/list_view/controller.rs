//! List view controller: the single source of truth for which records a list
//! screen shows and which of them are selected.
//!
//! Pipeline: full collection -> filter -> stable sort -> page slice.
//! All transitions are synchronous and complete before the next UI event.

use super::criteria::FilterCriteria;
use super::error::StoreError;
use super::pagination::Pagination;
use super::record::ListRecord;
use super::selection::{PageSelection, SelectionPolicy, SelectionSet};
use super::sort::SortState;
use super::store::RecordStore;

#[derive(Debug, Clone)]
pub struct ListViewController<R> {
    records: Vec<R>,
    filter: FilterCriteria,
    sort: SortState,
    pagination: Pagination,
    selection: SelectionSet,
    policy: SelectionPolicy,
}

impl<R: ListRecord> ListViewController<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            filter: FilterCriteria::default(),
            sort: SortState::default(),
            pagination: Pagination::new(page_size),
            selection: SelectionSet::default(),
            policy: SelectionPolicy::default(),
        }
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Filtered and sorted, not paginated.
    fn filtered(&self) -> Vec<&R> {
        let mut items: Vec<&R> = self
            .records
            .iter()
            .filter(|r| self.filter.matches(*r))
            .collect();
        self.sort.apply(&mut items);
        items
    }

    fn passes_filter(&self, id: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.id() == id && self.filter.matches(r))
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.filter.matches(*r))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered_count())
    }

    /// Records of the current page, in display order.
    pub fn visible_records(&self) -> Vec<&R> {
        let filtered = self.filtered();
        let range = self.pagination.range(filtered.len());
        filtered[range].to_vec()
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_records()
            .into_iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    /// Row activation lookup for the detail modal.
    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replaces the committed filter and returns to page 1.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        log::debug!("list filter set: {} constraint(s)", criteria.active_count());
        self.filter = criteria;
        self.pagination.reset();

        if self.policy == SelectionPolicy::DropHidden {
            let dropped = self.retain_selection(true);
            if dropped > 0 {
                log::debug!("dropped {} hidden selection(s)", dropped);
            }
        }
    }

    /// Keeps selected ids that still exist and, with `filtered`, pass the filter.
    fn retain_selection(&mut self, filtered: bool) -> usize {
        let records = &self.records;
        let filter = &self.filter;
        self.selection.retain(|id| {
            records
                .iter()
                .any(|r| r.id() == id && (!filtered || filter.matches(r)))
        })
    }

    /// Same field flips direction; a new field sorts ascending. Page unchanged.
    pub fn set_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        log::trace!("list sort: {:?}", self.sort);
    }

    /// Out-of-range pages are clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        let total = self.filtered_count();
        self.pagination.set_page(page, total);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    /// Adds or removes `id`. Ids outside the filtered collection are ignored.
    /// Returns whether the selection was touched.
    pub fn toggle_selection(&mut self, id: &str, selected: bool) -> bool {
        if !self.passes_filter(id) {
            log::warn!("ignoring selection toggle for unknown or hidden id {}", id);
            return false;
        }
        self.selection.set(id, selected);
        true
    }

    /// `true` selects exactly the rows of the current page (rows on other pages
    /// are not included); `false` clears the whole selection.
    pub fn select_all_visible(&mut self, selected: bool) {
        if selected {
            let ids = self.visible_ids();
            self.selection.replace(ids);
        } else {
            self.selection.clear();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids in store order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| self.selection.contains(r.id()))
            .map(|r| r.id().to_string())
            .collect()
    }

    /// State of the "select all" checkbox for the current page.
    pub fn page_selection_state(&self) -> PageSelection {
        let visible = self.visible_records();
        if visible.is_empty() {
            return PageSelection::Unchecked;
        }
        let selected = visible
            .iter()
            .filter(|r| self.selection.contains(r.id()))
            .count();
        if selected == 0 {
            PageSelection::Unchecked
        } else if selected == visible.len() {
            PageSelection::Checked
        } else {
            PageSelection::Indeterminate
        }
    }

    /// Atomic "new full collection" from the record store.
    ///
    /// Re-clamps the page and drops selected ids that no longer exist. Under
    /// `DropHidden` ids the current filter now hides are dropped too.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;

        let dropped = self.retain_selection(self.policy == SelectionPolicy::DropHidden);
        if dropped > 0 {
            log::debug!("dropped {} selection(s) after store update", dropped);
        }

        let total = self.filtered_count();
        self.pagination.clamp(total);
    }

    pub fn reload<S>(&mut self, store: &S) -> Result<(), StoreError>
    where
        S: RecordStore<R> + ?Sized,
    {
        let records = store.get_all()?;
        log::debug!("list reloaded: {} record(s)", records.len());
        self.replace_records(records);
        Ok(())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::criteria::Constraint;
    use crate::shared::list_view::record::FieldValue;
    use crate::shared::list_view::sort::SortDirection;
    use crate::shared::list_view::store::InMemoryStore;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        total: f64,
        status: &'static str,
    }

    impl ListRecord for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "id" => Some(FieldValue::Text(&self.id)),
                "name" => Some(FieldValue::Text(&self.name)),
                "total" => Some(FieldValue::Number(self.total)),
                "status" => Some(FieldValue::Status(self.status)),
                _ => None,
            }
        }
    }

    fn row(id: &str, name: &str, total: f64, status: &'static str) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            total,
            status,
        }
    }

    fn abc() -> Vec<Row> {
        vec![
            row("A", "John Doe", 99.99, "paid"),
            row("B", "Jane Smith", 149.99, "cancelled"),
            row("C", "Bob Wilson", 79.99, "refunded"),
        ]
    }

    fn ids(rows: Vec<&Row>) -> Vec<String> {
        rows.into_iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_sort_by_total_ascending() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.set_sort("total");
        assert_eq!(ids(ctl.visible_records()), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_descending_reverses_distinct_values() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.set_sort("total");
        let asc = ids(ctl.visible_records());
        ctl.set_sort("total");
        let mut desc = ids(ctl.visible_records());
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = vec![
            row("1", "x", 10.0, "paid"),
            row("2", "x", 5.0, "paid"),
            row("3", "x", 10.0, "paid"),
            row("4", "x", 5.0, "paid"),
        ];
        let mut ctl = ListViewController::new(rows, 10);
        ctl.set_sort("total");
        assert_eq!(ids(ctl.visible_records()), vec!["2", "4", "1", "3"]);
        let again = ids(ctl.visible_records());
        assert_eq!(again, vec!["2", "4", "1", "3"]);

        ctl.set_sort("total");
        assert_eq!(ids(ctl.visible_records()), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_filter_by_status() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        assert_eq!(ids(ctl.visible_records()), vec!["A"]);
        assert_eq!(ctl.filtered_count(), 1);
        assert_eq!(ctl.total_count(), 3);
    }

    #[test]
    fn test_filter_results_satisfy_every_constraint() {
        let mut ctl = ListViewController::new(abc(), 10);
        let criteria = FilterCriteria::new()
            .with("name", Constraint::contains("o"))
            .with("total", Constraint::number_range("80", "200"));
        ctl.set_filter(criteria.clone());
        let visible = ctl.visible_records();
        assert_eq!(ids(visible.clone()), vec!["A"]);
        assert!(visible.iter().all(|r| criteria.matches(*r)));
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut ctl = ListViewController::new(abc(), 1);
        ctl.set_page(3);
        assert_eq!(ctl.page(), 3);
        ctl.set_filter(FilterCriteria::new().with("name", Constraint::contains("j")));
        assert_eq!(ctl.page(), 1);
    }

    #[test]
    fn test_total_pages_and_clamping() {
        let mut ctl = ListViewController::new(abc(), 2);
        assert_eq!(ctl.total_pages(), 2);

        ctl.set_page(99);
        let clamped = ids(ctl.visible_records());
        ctl.set_page(ctl.total_pages());
        assert_eq!(ids(ctl.visible_records()), clamped);
        assert_eq!(clamped, vec!["C"]);

        let empty: ListViewController<Row> = ListViewController::new(Vec::new(), 2);
        assert_eq!(empty.total_pages(), 1);
        assert!(empty.visible_records().is_empty());
    }

    #[test]
    fn test_set_sort_keeps_page() {
        let mut ctl = ListViewController::new(abc(), 2);
        ctl.set_page(2);
        ctl.set_sort("name");
        assert_eq!(ctl.page(), 2);
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut ctl = ListViewController::new(abc(), 2);
        ctl.select_all_visible(true);
        assert_eq!(ctl.selected_ids(), vec!["A", "B"]);
        assert_eq!(ctl.page_selection_state(), PageSelection::Checked);

        ctl.set_page(2);
        assert_eq!(ctl.page_selection_state(), PageSelection::Unchecked);

        ctl.select_all_visible(false);
        assert!(ctl.selection().is_empty());
    }

    #[test]
    fn test_toggle_ignores_hidden_and_unknown_ids() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        assert!(!ctl.toggle_selection("B", true));
        assert!(!ctl.toggle_selection("Z", true));
        assert!(ctl.toggle_selection("A", true));
        assert_eq!(ctl.selected_ids(), vec!["A"]);
    }

    #[test]
    fn test_toggle_round_trip_restores_selection() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.toggle_selection("A", true);
        let before = ctl.selection().clone();
        ctl.toggle_selection("C", true);
        assert_eq!(ctl.page_selection_state(), PageSelection::Indeterminate);
        ctl.toggle_selection("C", false);
        assert_eq!(ctl.selection(), &before);
    }

    #[test]
    fn test_clear_selection_spans_all_pages() {
        let mut ctl = ListViewController::new(abc(), 2);
        ctl.toggle_selection("A", true);
        ctl.toggle_selection("C", true);
        ctl.clear_selection();
        assert!(ctl.selected_ids().is_empty());
        assert_eq!(ctl.page_selection_state(), PageSelection::Unchecked);
    }

    #[test]
    fn test_filter_retains_hidden_selection_by_default() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.toggle_selection("A", true);
        ctl.toggle_selection("B", true);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        assert_eq!(ctl.selected_ids(), vec!["A", "B"]);
    }

    #[test]
    fn test_drop_hidden_policy() {
        let mut ctl = ListViewController::new(abc(), 10)
            .with_selection_policy(SelectionPolicy::DropHidden);
        ctl.toggle_selection("A", true);
        ctl.toggle_selection("B", true);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        assert_eq!(ctl.selected_ids(), vec!["A"]);
    }

    #[test]
    fn test_drop_hidden_policy_on_store_update() {
        let mut ctl = ListViewController::new(abc(), 10)
            .with_selection_policy(SelectionPolicy::DropHidden);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        ctl.toggle_selection("A", true);

        ctl.replace_records(vec![
            row("A", "John Doe", 99.99, "refunded"),
            row("B", "Jane Smith", 149.99, "cancelled"),
        ]);

        assert!(ctl.visible_records().is_empty());
        assert!(ctl.selected_ids().is_empty());
    }

    #[test]
    fn test_retain_policy_keeps_hidden_selection_on_store_update() {
        let mut ctl = ListViewController::new(abc(), 10);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        ctl.toggle_selection("A", true);

        ctl.replace_records(vec![row("A", "John Doe", 99.99, "refunded")]);

        assert_eq!(ctl.selected_ids(), vec!["A"]);
    }

    #[test]
    fn test_store_update_clamps_page_and_selection() {
        let mut ctl = ListViewController::new(abc(), 1);
        ctl.set_page(3);
        ctl.toggle_selection("C", true);
        ctl.toggle_selection("A", true);

        let store = InMemoryStore::new(vec![row("A", "John Doe", 99.99, "paid")]);
        ctl.reload(&store).unwrap();

        assert_eq!(ctl.page(), 1);
        assert_eq!(ctl.selected_ids(), vec!["A"]);
        assert_eq!(ids(ctl.visible_records()), vec!["A"]);
    }

    #[test]
    fn test_store_error_leaves_state_untouched() {
        struct Broken;
        impl RecordStore<Row> for Broken {
            fn get_all(&self) -> Result<Vec<Row>, StoreError> {
                Err(StoreError::Unavailable("timeout".to_string()))
            }
        }

        let mut ctl = ListViewController::new(abc(), 10);
        let err = ctl.reload(&Broken).unwrap_err();
        assert_eq!(err, StoreError::Unavailable("timeout".to_string()));
        assert_eq!(ctl.total_count(), 3);
    }

    #[test]
    fn test_initial_sort_and_page_size() {
        let mut ctl = ListViewController::new(abc(), 10)
            .with_sort(SortState::by("total", SortDirection::Descending));
        assert_eq!(ids(ctl.visible_records()), vec!["B", "A", "C"]);
        ctl.set_page_size(1);
        assert_eq!(ctl.total_pages(), 3);
        assert_eq!(ids(ctl.visible_records()), vec!["B"]);
    }
}
