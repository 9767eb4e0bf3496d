use contracts::domain::a002_customers::{CustomerService, LoggingCustomerService};

/// Service behind the customer dialogs. No backend yet: it only logs.
pub fn customer_service() -> impl CustomerService + Copy + Send + Sync + 'static {
    LoggingCustomerService
}
