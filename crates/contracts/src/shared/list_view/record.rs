//! Field access for records shown in list views.
//!
//! Orders and customers have different shapes but share one list interaction
//! model. Every list record exposes its stable id and a field accessor keyed by
//! field name; sorting and filtering only ever go through that accessor.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Borrowed value of a single record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    /// Enumerated status, carried as its stable key ("paid", "active", ...)
    Status(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Natural comparison between two values of the same field.
    ///
    /// Text is compared case-insensitively, numbers numerically, dates
    /// chronologically. Values of different kinds compare as equal so the
    /// stable sort keeps them in store order.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b))
            | (FieldValue::Status(a), FieldValue::Status(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) | FieldValue::Status(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// A record that can be listed, filtered, sorted and selected.
pub trait ListRecord {
    /// Stable identifier, unique within one list.
    fn id(&self) -> &str;

    /// Value of the named field, `None` if the record has no such field
    /// (or the field is empty for this record).
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Compares two records by the named field. Records without the field go last.
    fn compare_by_field(&self, other: &Self, name: &str) -> Ordering
    where
        Self: Sized,
    {
        match (self.field(name), other.field(name)) {
            (Some(a), Some(b)) => a.compare(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_comparison_ignores_case() {
        let a = FieldValue::Text("alice");
        let b = FieldValue::Text("Bob");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            FieldValue::Text("JOHN").compare(&FieldValue::Text("john")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_number_and_date_comparison() {
        assert_eq!(
            FieldValue::Number(79.99).compare(&FieldValue::Number(99.99)),
            Ordering::Less
        );
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            FieldValue::Date(d2).compare(&FieldValue::Date(d1)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_kinds_compare_equal() {
        assert_eq!(
            FieldValue::Number(1.0).compare(&FieldValue::Text("1")),
            Ordering::Equal
        );
    }
}
