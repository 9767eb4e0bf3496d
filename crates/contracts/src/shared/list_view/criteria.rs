use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::record::{FieldValue, ListRecord};

/// Constraint on a single field.
///
/// Values are carried exactly as the user typed them; numeric bounds are only
/// interpreted when a record is tested against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// Exact match on an enumerated value (status key), case-sensitive
    Exact { value: String },
    /// Case-insensitive substring containment
    Contains { pattern: String },
    /// Inclusive numeric range
    NumberRange {
        min: Option<String>,
        max: Option<String>,
    },
    /// Inclusive date range
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Constraint {
    pub fn exact(value: impl Into<String>) -> Self {
        Constraint::Exact {
            value: value.into(),
        }
    }

    pub fn contains(pattern: impl Into<String>) -> Self {
        Constraint::Contains {
            pattern: pattern.into(),
        }
    }

    pub fn number_range(min: impl Into<String>, max: impl Into<String>) -> Self {
        let non_blank = |s: String| if s.trim().is_empty() { None } else { Some(s) };
        Constraint::NumberRange {
            min: non_blank(min.into()),
            max: non_blank(max.into()),
        }
    }

    pub fn date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Constraint::DateRange { from, to }
    }

    /// An empty constraint is always satisfied.
    pub fn is_empty(&self) -> bool {
        match self {
            Constraint::Exact { value } => value.trim().is_empty(),
            Constraint::Contains { pattern } => pattern.trim().is_empty(),
            Constraint::NumberRange { min, max } => {
                is_blank(min.as_deref()) && is_blank(max.as_deref())
            }
            Constraint::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }

    /// Tests one field value against the constraint.
    ///
    /// A record that lacks the field fails every non-empty constraint on it.
    pub fn matches(&self, value: Option<FieldValue<'_>>) -> bool {
        if self.is_empty() {
            return true;
        }

        match self {
            Constraint::Exact { value: expected } => value
                .and_then(|v| v.as_text())
                .map(|actual| actual == expected)
                .unwrap_or(false),
            Constraint::Contains { pattern } => value
                .and_then(|v| v.as_text())
                .map(|actual| {
                    actual
                        .to_lowercase()
                        .contains(&pattern.trim().to_lowercase())
                })
                .unwrap_or(false),
            Constraint::NumberRange { min, max } => {
                let min = parse_bound(min.as_deref());
                let max = parse_bound(max.as_deref());
                if min.is_none() && max.is_none() {
                    // no numeric bound: nothing to check
                    return true;
                }
                match value.and_then(|v| v.as_number()) {
                    Some(n) => min.map_or(true, |m| n >= m) && max.map_or(true, |m| n <= m),
                    None => false,
                }
            }
            Constraint::DateRange { from, to } => match value.and_then(|v| v.as_date()) {
                Some(d) => from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t),
                None => false,
            },
        }
    }

    /// Human-readable text for filter tags
    pub fn display_text(&self, field_label: &str) -> String {
        match self {
            Constraint::Exact { value } => format!("{}: {}", field_label, value),
            Constraint::Contains { pattern } => {
                format!("{} contains \"{}\"", field_label, pattern)
            }
            Constraint::NumberRange { min, max } => {
                range_text(field_label, min.as_deref(), max.as_deref())
            }
            Constraint::DateRange { from, to } => {
                let from = from.map(|d| d.format("%Y-%m-%d").to_string());
                let to = to.map(|d| d.format("%Y-%m-%d").to_string());
                range_text(field_label, from.as_deref(), to.as_deref())
            }
        }
    }
}

fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            log::warn!("ignoring non-numeric range bound {:?}", raw);
            None
        }
    }
}

fn range_text(label: &str, from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (Some(f), Some(t)) => format!("{}: {} – {}", label, f, t),
        (Some(f), None) => format!("{} ≥ {}", label, f),
        (None, Some(t)) => format!("{} ≤ {}", label, t),
        (None, None) => format!("{}: any", label),
    }
}

/// Committed filter: field name → constraint, AND-combined.
///
/// Applied criteria are never mutated; `with`/`without` consume the value and
/// return a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    constraints: BTreeMap<String, Constraint>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the constraint on `field`. Empty constraints are dropped.
    pub fn with(mut self, field: impl Into<String>, constraint: Constraint) -> Self {
        let field = field.into();
        if constraint.is_empty() {
            self.constraints.remove(&field);
        } else {
            self.constraints.insert(field, constraint);
        }
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.constraints.remove(field);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Constraint> {
        self.constraints.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.constraints.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of non-empty constraints (filter badge count)
    pub fn active_count(&self) -> usize {
        self.constraints.values().filter(|c| !c.is_empty()).count()
    }

    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        self.constraints
            .iter()
            .all(|(field, constraint)| constraint.matches(record.field(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_constraints_always_match() {
        assert!(Constraint::exact("").matches(None));
        assert!(Constraint::contains("   ").matches(None));
        assert!(Constraint::number_range("", "").matches(None));
        assert!(Constraint::date_range(None, None).matches(None));
    }

    #[test]
    fn test_exact_and_contains() {
        let status = Some(FieldValue::Status("paid"));
        assert!(Constraint::exact("paid").matches(status));
        assert!(!Constraint::exact("Paid").matches(status));
        assert!(!Constraint::exact(" paid").matches(status));
        assert!(!Constraint::exact("refunded").matches(status));

        let name = Some(FieldValue::Text("Jane Smith"));
        assert!(Constraint::contains("smi").matches(name));
        assert!(!Constraint::contains("doe").matches(name));
        assert!(!Constraint::contains("doe").matches(None));
    }

    #[test]
    fn test_number_range_is_inclusive() {
        let c = Constraint::number_range("79.99", "99.99");
        assert!(c.matches(Some(FieldValue::Number(79.99))));
        assert!(c.matches(Some(FieldValue::Number(99.99))));
        assert!(!c.matches(Some(FieldValue::Number(149.99))));
        assert!(!c.matches(None));

        let open_max = Constraint::number_range("100", "");
        assert!(open_max.matches(Some(FieldValue::Number(149.99))));
        assert!(!open_max.matches(Some(FieldValue::Number(99.99))));
    }

    #[test]
    fn test_malformed_bound_is_passed_through() {
        let c = Constraint::number_range("abc", "");
        assert!(!c.is_empty());
        assert!(c.matches(Some(FieldValue::Number(1.0))));

        let half = Constraint::number_range("abc", "100");
        assert!(half.matches(Some(FieldValue::Number(50.0))));
        assert!(!half.matches(Some(FieldValue::Number(150.0))));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let c = Constraint::date_range(Some(date(2024, 1, 14)), Some(date(2024, 1, 15)));
        assert!(c.matches(Some(FieldValue::Date(date(2024, 1, 14)))));
        assert!(c.matches(Some(FieldValue::Date(date(2024, 1, 15)))));
        assert!(!c.matches(Some(FieldValue::Date(date(2024, 1, 13)))));
    }

    #[test]
    fn test_with_produces_new_criteria() {
        let base = FilterCriteria::new().with("status", Constraint::exact("paid"));
        let edited = base.clone().with("customer", Constraint::contains("john"));
        assert_eq!(base.active_count(), 1);
        assert_eq!(edited.active_count(), 2);

        let cleared = edited.with("status", Constraint::exact(""));
        assert!(cleared.get("status").is_none());
        assert_eq!(cleared.active_count(), 1);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(
            Constraint::number_range("10", "").display_text("Total"),
            "Total ≥ 10"
        );
        assert_eq!(
            Constraint::date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
                .display_text("Date"),
            "Date: 2024-01-01 – 2024-01-31"
        );
    }
}
