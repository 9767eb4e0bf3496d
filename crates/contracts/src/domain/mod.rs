pub mod a001_orders;
pub mod a002_customers;
