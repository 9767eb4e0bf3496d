use super::criteria::FilterCriteria;

/// Editable form state behind a filter panel.
///
/// Values are carried as typed (no validation); `to_criteria` turns the form
/// into the immutable criteria the list view filters by.
pub trait FilterDraft: Clone + Default + PartialEq {
    fn to_criteria(&self) -> FilterCriteria;

    /// Empties the form inputs that produce the constraint on `field`.
    fn clear_field(&mut self, field: &str);

    /// Number of non-empty constraints, for the filter badge.
    fn active_count(&self) -> usize {
        self.to_criteria().active_count()
    }
}

/// Draft / applied pair of a collapsible filter panel.
///
/// Edits only touch the draft. Criteria reach the list once per explicit
/// `apply`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPanel<D> {
    is_open: bool,
    draft: D,
    applied: D,
}

impl<D: FilterDraft> FilterPanel<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn applied(&self) -> &D {
        &self.applied
    }

    /// Opens the panel with the last applied values.
    pub fn open(&mut self) {
        self.draft = self.applied.clone();
        self.is_open = true;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.cancel();
        } else {
            self.open();
        }
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    /// Commits the draft and closes the panel.
    pub fn apply(&mut self) -> FilterCriteria {
        self.applied = self.draft.clone();
        self.is_open = false;
        let criteria = self.applied.to_criteria();
        log::debug!("filter applied: {} active", criteria.active_count());
        criteria
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        self.draft = self.applied.clone();
        self.is_open = false;
    }

    /// Clears the draft. The list keeps its filter until the next `apply`.
    pub fn reset(&mut self) {
        self.draft = D::default();
    }

    /// Drops one applied constraint (a removed filter tag) and returns the
    /// remaining criteria. An open draft loses the field too.
    pub fn remove(&mut self, field: &str) -> FilterCriteria {
        self.applied.clear_field(field);
        self.draft.clear_field(field);
        let criteria = self.applied.to_criteria();
        log::debug!("filter '{}' removed: {} active", field, criteria.active_count());
        criteria
    }

    /// Active constraints of the applied filter.
    pub fn active_count(&self) -> usize {
        self.applied.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::criteria::Constraint;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NameDraft {
        name: String,
        status: String,
    }

    impl FilterDraft for NameDraft {
        fn to_criteria(&self) -> FilterCriteria {
            FilterCriteria::new()
                .with("name", Constraint::contains(self.name.clone()))
                .with("status", Constraint::exact(self.status.clone()))
        }

        fn clear_field(&mut self, field: &str) {
            match field {
                "name" => self.name.clear(),
                "status" => self.status.clear(),
                _ => {}
            }
        }
    }

    #[test]
    fn test_edit_does_not_commit() {
        let mut panel: FilterPanel<NameDraft> = FilterPanel::new();
        panel.open();
        panel.edit(|d| d.name = "john".into());
        assert_eq!(panel.active_count(), 0);
        assert_eq!(panel.draft().name, "john");
    }

    #[test]
    fn test_apply_commits_and_closes() {
        let mut panel: FilterPanel<NameDraft> = FilterPanel::new();
        panel.open();
        panel.edit(|d| d.status = "paid".into());
        let criteria = panel.apply();
        assert!(!panel.is_open());
        assert_eq!(criteria.get("status"), Some(&Constraint::exact("paid")));
        assert_eq!(criteria.get("name"), None);
        assert_eq!(panel.active_count(), 1);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut panel: FilterPanel<NameDraft> = FilterPanel::new();
        panel.open();
        panel.edit(|d| d.status = "paid".into());
        panel.apply();

        panel.open();
        assert_eq!(panel.draft().status, "paid");
        panel.edit(|d| d.status = "refunded".into());
        panel.cancel();
        assert_eq!(panel.draft().status, "paid");
        assert_eq!(panel.applied().status, "paid");
    }

    #[test]
    fn test_reset_clears_draft_only() {
        let mut panel: FilterPanel<NameDraft> = FilterPanel::new();
        panel.open();
        panel.edit(|d| d.name = "jane".into());
        panel.apply();
        panel.open();
        panel.reset();
        assert_eq!(panel.draft(), &NameDraft::default());
        assert_eq!(panel.active_count(), 1);
        assert!(panel.apply().is_empty());
    }

    #[test]
    fn test_remove_tag_keeps_other_constraints() {
        let mut panel: FilterPanel<NameDraft> = FilterPanel::new();
        panel.open();
        panel.edit(|d| {
            d.name = "jo".into();
            d.status = "paid".into();
        });
        panel.apply();
        assert_eq!(panel.active_count(), 2);

        let criteria = panel.remove("name");
        assert_eq!(criteria.get("name"), None);
        assert_eq!(criteria.get("status"), Some(&Constraint::exact("paid")));
        assert_eq!(panel.applied().name, "");
        panel.open();
        assert_eq!(panel.draft().name, "");
    }
}
