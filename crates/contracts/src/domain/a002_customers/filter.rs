use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::fields;
use crate::shared::list_view::{Constraint, FilterCriteria, FilterDraft};

/// Form state of the customers filter panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerFilterDraft {
    pub status: String,
    pub customer_name: String,
    pub registered_from: Option<NaiveDate>,
    pub registered_to: Option<NaiveDate>,
    pub min_orders: String,
    pub max_orders: String,
    pub min_spend: String,
    pub max_spend: String,
}

impl FilterDraft for CustomerFilterDraft {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with(fields::STATUS, Constraint::exact(self.status.clone()))
            .with(fields::NAME, Constraint::contains(self.customer_name.clone()))
            .with(
                fields::REGISTRATION_DATE,
                Constraint::date_range(self.registered_from, self.registered_to),
            )
            .with(
                fields::ORDERS,
                Constraint::number_range(self.min_orders.clone(), self.max_orders.clone()),
            )
            .with(
                fields::TOTAL_SPEND,
                Constraint::number_range(self.min_spend.clone(), self.max_spend.clone()),
            )
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            fields::STATUS => self.status.clear(),
            fields::NAME => self.customer_name.clear(),
            fields::REGISTRATION_DATE => {
                self.registered_from = None;
                self.registered_to = None;
            }
            fields::ORDERS => {
                self.min_orders.clear();
                self.max_orders.clear();
            }
            fields::TOTAL_SPEND => {
                self.min_spend.clear();
                self.max_spend.clear();
            }
            _ => log::warn!("customer filter has no field '{}'", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_customers::fixtures;

    fn matching(draft: &CustomerFilterDraft) -> Vec<String> {
        let criteria = draft.to_criteria();
        fixtures::default_customers()
            .into_iter()
            .filter(|c| criteria.matches(c))
            .map(|c| c.id.0)
            .collect()
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let draft = CustomerFilterDraft {
            customer_name: "SMITH".into(),
            ..Default::default()
        };
        assert_eq!(matching(&draft), vec!["CUS-002"]);
    }

    #[test]
    fn test_orders_and_spend_ranges_are_inclusive() {
        let draft = CustomerFilterDraft {
            min_orders: "8".into(),
            max_spend: "2499.99".into(),
            ..Default::default()
        };
        assert_eq!(draft.active_count(), 2);
        assert_eq!(matching(&draft), vec!["CUS-001", "CUS-002"]);
    }

    #[test]
    fn test_registration_range() {
        let draft = CustomerFilterDraft {
            registered_from: NaiveDate::from_ymd_opt(2023, 8, 15),
            registered_to: NaiveDate::from_ymd_opt(2023, 10, 1),
            ..Default::default()
        };
        assert_eq!(matching(&draft), vec!["CUS-002", "CUS-003"]);
    }
}
