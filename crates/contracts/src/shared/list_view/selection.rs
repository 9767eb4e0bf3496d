use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What happens to selected ids hidden by a newly applied filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Keep them until the user clears the selection
    #[default]
    Retain,
    /// Drop ids that no longer pass the filter
    DropHidden,
}

/// Tri-state of the header checkbox for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Ids of records marked for a bulk action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Replaces the whole selection.
    pub fn replace<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keeps only ids accepted by `keep`. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| keep(id));
        before - self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_then_off_restores_state() {
        let mut sel = SelectionSet::new();
        sel.set("A", true);
        let before = sel.clone();
        sel.set("B", true);
        sel.set("B", false);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_retain_reports_dropped() {
        let mut sel = SelectionSet::new();
        sel.replace(["A", "B", "C"]);
        let dropped = sel.retain(|id| id != "B");
        assert_eq!(dropped, 1);
        assert!(!sel.contains("B"));
        assert_eq!(sel.len(), 2);
    }
}
