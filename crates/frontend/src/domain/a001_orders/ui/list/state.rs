use crate::shared::list_state::ListScreenState;
use contracts::domain::a001_orders::{Order, OrderFilterDraft};
use contracts::shared::config::DashboardConfig;

pub type OrdersState = ListScreenState<Order, OrderFilterDraft>;

pub fn create_state(config: &DashboardConfig) -> OrdersState {
    ListScreenState::new(&config.orders, config.selection.on_filter_change)
}
