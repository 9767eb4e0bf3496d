use serde::{Deserialize, Serialize};

use super::record::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// Current sort column and direction. No field means store order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// Stable in-place sort; ties keep their incoming order in both directions.
    pub fn apply<R: ListRecord>(&self, items: &mut [&R]) {
        let Some(field) = self.field.as_deref() else {
            return;
        };
        let ascending = self.direction.is_ascending();
        items.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, field);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_field_flips() {
        let mut sort = SortState::default();
        sort.toggle("total");
        assert_eq!(sort, SortState::by("total", SortDirection::Ascending));
        sort.toggle("total");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle("total");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let mut sort = SortState::by("total", SortDirection::Descending);
        sort.toggle("date");
        assert_eq!(sort, SortState::by("date", SortDirection::Ascending));
    }
}
