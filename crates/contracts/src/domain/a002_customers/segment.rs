//! Customer segments: named sets of conditions over customer attributes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::Customer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentField {
    #[default]
    TotalSpend,
    OrderCount,
    LastOrderDate,
    RegistrationDate,
    Status,
}

impl SegmentField {
    pub fn all() -> &'static [SegmentField] {
        &[
            SegmentField::TotalSpend,
            SegmentField::OrderCount,
            SegmentField::LastOrderDate,
            SegmentField::RegistrationDate,
            SegmentField::Status,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SegmentField::TotalSpend => "total_spend",
            SegmentField::OrderCount => "order_count",
            SegmentField::LastOrderDate => "last_order_date",
            SegmentField::RegistrationDate => "registration_date",
            SegmentField::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SegmentField::TotalSpend => "Total Spend",
            SegmentField::OrderCount => "Order Count",
            SegmentField::LastOrderDate => "Last Order Date",
            SegmentField::RegistrationDate => "Registration Date",
            SegmentField::Status => "Customer Status",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOperator {
    #[default]
    GreaterThan,
    LessThan,
    Equals,
    NotEquals,
    Contains,
}

impl SegmentOperator {
    pub fn all() -> &'static [SegmentOperator] {
        &[
            SegmentOperator::GreaterThan,
            SegmentOperator::LessThan,
            SegmentOperator::Equals,
            SegmentOperator::NotEquals,
            SegmentOperator::Contains,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SegmentOperator::GreaterThan => "greater_than",
            SegmentOperator::LessThan => "less_than",
            SegmentOperator::Equals => "equals",
            SegmentOperator::NotEquals => "not_equals",
            SegmentOperator::Contains => "contains",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SegmentOperator::GreaterThan => "Greater than",
            SegmentOperator::LessThan => "Less than",
            SegmentOperator::Equals => "Equals",
            SegmentOperator::NotEquals => "Not equals",
            SegmentOperator::Contains => "Contains",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.code() == code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentCondition {
    pub field: SegmentField,
    pub operator: SegmentOperator,
    /// Raw input, parsed against the field type when evaluated
    pub value: String,
}

impl SegmentCondition {
    pub fn new(field: SegmentField, operator: SegmentOperator, value: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }

    /// A blank or unparsable value never matches.
    pub fn matches(&self, customer: &Customer) -> bool {
        let raw = self.value.trim();
        if raw.is_empty() {
            return false;
        }

        match self.field {
            SegmentField::TotalSpend => self.compare_number(customer.total_spend, raw),
            SegmentField::OrderCount => self.compare_number(customer.orders as f64, raw),
            SegmentField::LastOrderDate => self.compare_date(customer.last_order, raw),
            SegmentField::RegistrationDate => {
                self.compare_date(customer.registration_date, raw)
            }
            SegmentField::Status => {
                let actual = customer.status.code();
                let expected = raw.to_lowercase();
                match self.operator {
                    SegmentOperator::Equals => actual == expected,
                    SegmentOperator::NotEquals => actual != expected,
                    SegmentOperator::Contains => actual.contains(&expected),
                    // statuses have no order
                    SegmentOperator::GreaterThan | SegmentOperator::LessThan => false,
                }
            }
        }
    }

    fn compare_number(&self, actual: f64, raw: &str) -> bool {
        if self.operator == SegmentOperator::Contains {
            return actual.to_string().contains(raw);
        }
        let Ok(expected) = raw.parse::<f64>() else {
            log::warn!("segment value {:?} is not a number", raw);
            return false;
        };
        match self.operator {
            SegmentOperator::GreaterThan => actual > expected,
            SegmentOperator::LessThan => actual < expected,
            SegmentOperator::Equals => (actual - expected).abs() < f64::EPSILON,
            SegmentOperator::NotEquals => (actual - expected).abs() >= f64::EPSILON,
            SegmentOperator::Contains => false,
        }
    }

    fn compare_date(&self, actual: NaiveDate, raw: &str) -> bool {
        if self.operator == SegmentOperator::Contains {
            return actual.format("%Y-%m-%d").to_string().contains(raw);
        }
        let Ok(expected) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
            log::warn!("segment value {:?} is not a date", raw);
            return false;
        };
        match self.operator {
            SegmentOperator::GreaterThan => actual > expected,
            SegmentOperator::LessThan => actual < expected,
            SegmentOperator::Equals => actual == expected,
            SegmentOperator::NotEquals => actual != expected,
            SegmentOperator::Contains => false,
        }
    }

    /// "Total Spend greater than 1000"
    pub fn display_text(&self) -> String {
        format!(
            "{} {} {}",
            self.field.label(),
            self.operator.label().to_lowercase(),
            self.value.trim()
        )
    }
}

/// Named customer segment built in the segment dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSegment {
    pub name: String,
    pub description: String,
    pub conditions: Vec<SegmentCondition>,
}

impl Default for CustomerSegment {
    /// Starts with one empty "Total Spend greater than" condition.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            conditions: vec![SegmentCondition::default()],
        }
    }
}

impl CustomerSegment {
    pub fn add_condition(&mut self) {
        self.conditions.push(SegmentCondition::default());
    }

    /// Out-of-range indexes are ignored.
    pub fn remove_condition(&mut self, index: usize) {
        if index < self.conditions.len() {
            self.conditions.remove(index);
        }
    }

    pub fn update_condition(&mut self, index: usize, f: impl FnOnce(&mut SegmentCondition)) {
        if let Some(condition) = self.conditions.get_mut(index) {
            f(condition);
        }
    }

    /// All conditions must hold.
    pub fn matches(&self, customer: &Customer) -> bool {
        self.conditions.iter().all(|c| c.matches(customer))
    }

    pub fn matching_ids(&self, customers: &[Customer]) -> Vec<String> {
        customers
            .iter()
            .filter(|c| self.matches(c))
            .map(|c| c.id.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_customers::fixtures;

    fn segment(conditions: Vec<SegmentCondition>) -> CustomerSegment {
        CustomerSegment {
            name: "Test".into(),
            description: String::new(),
            conditions,
        }
    }

    #[test]
    fn test_high_value_segment() {
        let seg = segment(vec![SegmentCondition::new(
            SegmentField::TotalSpend,
            SegmentOperator::GreaterThan,
            "1000",
        )]);
        assert_eq!(
            seg.matching_ids(&fixtures::default_customers()),
            vec!["CUS-001", "CUS-002"]
        );
    }

    #[test]
    fn test_conditions_are_and_combined() {
        let seg = segment(vec![
            SegmentCondition::new(SegmentField::OrderCount, SegmentOperator::GreaterThan, "5"),
            SegmentCondition::new(SegmentField::Status, SegmentOperator::Equals, "Active"),
        ]);
        assert_eq!(seg.matching_ids(&fixtures::default_customers()), vec!["CUS-001"]);
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let seg = segment(vec![SegmentCondition::new(
            SegmentField::LastOrderDate,
            SegmentOperator::LessThan,
            "2024-01-01",
        )]);
        assert_eq!(
            seg.matching_ids(&fixtures::default_customers()),
            vec!["CUS-002", "CUS-003"]
        );

        let contains = segment(vec![SegmentCondition::new(
            SegmentField::RegistrationDate,
            SegmentOperator::Contains,
            "2023-0",
        )]);
        assert_eq!(
            contains.matching_ids(&fixtures::default_customers()),
            vec!["CUS-001", "CUS-002"]
        );
    }

    #[test]
    fn test_unparsable_or_blank_value_never_matches() {
        for value in ["lots", "", "  "] {
            let seg = segment(vec![SegmentCondition::new(
                SegmentField::TotalSpend,
                SegmentOperator::NotEquals,
                value,
            )]);
            assert!(seg.matching_ids(&fixtures::default_customers()).is_empty());
        }
    }

    #[test]
    fn test_condition_editing() {
        let mut seg = CustomerSegment::default();
        assert_eq!(seg.conditions.len(), 1);
        seg.add_condition();
        seg.update_condition(1, |c| {
            c.field = SegmentField::Status;
            c.operator = SegmentOperator::Equals;
            c.value = "blocked".into();
        });
        seg.remove_condition(0);
        seg.remove_condition(5);
        assert_eq!(seg.conditions.len(), 1);
        assert_eq!(seg.conditions[0].display_text(), "Customer Status equals blocked");
    }
}
