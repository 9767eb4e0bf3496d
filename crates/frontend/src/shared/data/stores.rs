use contracts::domain::a001_orders::{fixtures::demo_orders, Order};
use contracts::domain::a002_customers::{fixtures::demo_customers, Customer};
use contracts::shared::list_view::InMemoryStore;

/// Mock order data behind the Orders screen
pub fn order_store() -> InMemoryStore<Order> {
    InMemoryStore::new(demo_orders())
}

/// Mock customer data behind the Customers screen
pub fn customer_store() -> InMemoryStore<Customer> {
    InMemoryStore::new(demo_customers())
}
