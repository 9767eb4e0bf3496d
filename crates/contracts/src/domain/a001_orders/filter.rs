use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::fields;
use crate::shared::list_view::{Constraint, FilterCriteria, FilterDraft};

/// Form state of the orders filter panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilterDraft {
    /// Status code, empty = all
    pub status: String,
    pub customer_name: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_amount: String,
    pub max_amount: String,
}

impl FilterDraft for OrderFilterDraft {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with(fields::STATUS, Constraint::exact(self.status.clone()))
            .with(fields::CUSTOMER, Constraint::contains(self.customer_name.clone()))
            .with(fields::DATE, Constraint::date_range(self.date_from, self.date_to))
            .with(
                fields::TOTAL,
                Constraint::number_range(self.min_amount.clone(), self.max_amount.clone()),
            )
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            fields::STATUS => self.status.clear(),
            fields::CUSTOMER => self.customer_name.clear(),
            fields::DATE => {
                self.date_from = None;
                self.date_to = None;
            }
            fields::TOTAL => {
                self.min_amount.clear();
                self.max_amount.clear();
            }
            _ => log::warn!("order filter has no field '{}'", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_orders::fixtures;

    #[test]
    fn test_default_draft_has_no_constraints() {
        assert!(OrderFilterDraft::default().to_criteria().is_empty());
        assert_eq!(OrderFilterDraft::default().active_count(), 0);
    }

    #[test]
    fn test_amount_and_date_range() {
        let draft = OrderFilterDraft {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 14),
            min_amount: "90".into(),
            ..Default::default()
        };
        assert_eq!(draft.active_count(), 2);

        let criteria = draft.to_criteria();
        let ids: Vec<_> = fixtures::default_orders()
            .into_iter()
            .filter(|o| criteria.matches(o))
            .map(|o| o.id.0)
            .collect();
        assert_eq!(ids, vec!["ORD-001", "ORD-002"]);
    }

    #[test]
    fn test_non_numeric_amount_is_ignored() {
        let draft = OrderFilterDraft {
            max_amount: "abc".into(),
            ..Default::default()
        };
        let criteria = draft.to_criteria();
        assert!(fixtures::default_orders().iter().all(|o| criteria.matches(o)));
    }
}
