pub mod aggregate;
pub mod detail;
pub mod filter;
pub mod fixtures;
pub mod segment;
pub mod service;

pub use aggregate::{Customer, CustomerId, CustomerStatus};
pub use filter::CustomerFilterDraft;
pub use segment::{CustomerSegment, SegmentCondition, SegmentField, SegmentOperator};
pub use service::{CustomerService, LoggingCustomerService};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{
        FilterDraft, FilterPanel, ListViewController, PageSelection, SelectionPolicy,
    };

    #[test]
    fn test_panel_apply_drives_controller() {
        let mut ctl = ListViewController::new(fixtures::demo_customers(), 10)
            .with_selection_policy(SelectionPolicy::DropHidden);
        ctl.select_all_visible(true);
        assert_eq!(ctl.page_selection_state(), PageSelection::Checked);

        let mut panel: FilterPanel<CustomerFilterDraft> = FilterPanel::new();
        panel.open();
        panel.edit(|d| d.status = CustomerStatus::Blocked.code().to_string());
        ctl.set_filter(panel.apply());

        let visible = ctl.visible_records();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|c| c.status == CustomerStatus::Blocked));
        assert!(ctl
            .selected_ids()
            .iter()
            .all(|id| visible.iter().any(|c| c.id.as_str() == id)));
    }

    #[test]
    fn test_sort_by_spend_descending() {
        let mut ctl = ListViewController::new(fixtures::default_customers(), 10);
        ctl.set_sort(aggregate::fields::TOTAL_SPEND);
        ctl.set_sort(aggregate::fields::TOTAL_SPEND);
        assert_eq!(ctl.visible_ids(), vec!["CUS-001", "CUS-002", "CUS-003"]);
        assert_eq!(CustomerFilterDraft::default().active_count(), 0);
    }
}
