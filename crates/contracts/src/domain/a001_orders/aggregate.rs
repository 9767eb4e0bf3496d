use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list_view::{FieldValue, ListRecord};

// ============================================================================
// ID Type
// ============================================================================

/// Order number, e.g. "ORD-001"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Paid,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[OrderStatus::Paid, OrderStatus::Cancelled, OrderStatus::Refunded]
    }

    /// Stable key used in filters and URLs
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "Paid",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }
}

// ============================================================================
// List record
// ============================================================================

/// Row of the orders list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub status: OrderStatus,
    pub product: String,
    pub total: f64,
    pub date: NaiveDate,
}

/// Field names understood by `Order::field`
pub mod fields {
    pub const ID: &str = "id";
    pub const CUSTOMER: &str = "customer";
    pub const TYPE: &str = "type";
    pub const STATUS: &str = "status";
    pub const PRODUCT: &str = "product";
    pub const TOTAL: &str = "total";
    pub const DATE: &str = "date";
}

impl ListRecord for Order {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            fields::ID => Some(FieldValue::Text(self.id.as_str())),
            fields::CUSTOMER => Some(FieldValue::Text(&self.customer)),
            fields::TYPE => Some(FieldValue::Text(&self.order_type)),
            fields::STATUS => Some(FieldValue::Status(self.status.code())),
            fields::PRODUCT => Some(FieldValue::Text(&self.product)),
            fields::TOTAL => Some(FieldValue::Number(self.total)),
            fields::DATE => Some(FieldValue::Date(self.date)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderStatus::from_code("PAID"), Some(OrderStatus::Paid));
        assert_eq!(OrderStatus::from_code("pending"), None);
        assert_eq!(
            serde_json::to_string(&OrderStatus::Refunded).unwrap(),
            "\"refunded\""
        );
    }

    #[test]
    fn test_unknown_field_is_none() {
        let order = Order {
            id: OrderId::new("ORD-001"),
            customer: "John Doe".into(),
            order_type: "Standard".into(),
            status: OrderStatus::Paid,
            product: "Product A".into(),
            total: 99.99,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        assert_eq!(order.field("weight"), None);
        assert_eq!(order.field("status"), Some(FieldValue::Status("paid")));
    }
}
