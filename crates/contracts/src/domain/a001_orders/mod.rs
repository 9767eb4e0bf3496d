pub mod aggregate;
pub mod detail;
pub mod filter;
pub mod fixtures;
pub mod invoice;

pub use aggregate::{Order, OrderId, OrderStatus};
pub use filter::OrderFilterDraft;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{Constraint, FilterCriteria, ListViewController};

    fn ids(ctl: &ListViewController<Order>) -> Vec<String> {
        ctl.visible_ids()
    }

    #[test]
    fn test_orders_sorted_by_total() {
        let mut ctl = ListViewController::new(fixtures::default_orders(), 10);
        ctl.set_sort(aggregate::fields::TOTAL);
        assert_eq!(ids(&ctl), vec!["ORD-003", "ORD-001", "ORD-002"]);
    }

    #[test]
    fn test_paid_filter_over_default_orders() {
        let mut ctl = ListViewController::new(fixtures::default_orders(), 10);
        ctl.set_filter(FilterCriteria::new().with("status", Constraint::exact("paid")));
        assert_eq!(ids(&ctl), vec!["ORD-001"]);
    }

    #[test]
    fn test_demo_orders_paginate() {
        let mut ctl = ListViewController::new(fixtures::demo_orders(), 10);
        assert_eq!(ctl.total_pages(), 3);
        ctl.set_page(3);
        assert_eq!(ctl.visible_records().len(), 5);
        ctl.select_all_visible(true);
        assert_eq!(ctl.selected_ids().len(), 5);
    }
}
