use crate::shared::list_state::ListScreenState;
use contracts::domain::a002_customers::{Customer, CustomerFilterDraft};
use contracts::shared::config::DashboardConfig;

pub type CustomersState = ListScreenState<Customer, CustomerFilterDraft>;

pub fn create_state(config: &DashboardConfig) -> CustomersState {
    ListScreenState::new(&config.customers, config.selection.on_filter_change)
}
