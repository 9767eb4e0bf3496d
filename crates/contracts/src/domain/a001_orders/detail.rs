use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::OrderId;

/// Customer contact block of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
    pub billing_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: String,
    pub transaction_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub method: String,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Entry of the order history tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: DateTime<Utc>,
    pub action: String,
    pub user: String,
}

/// Full order shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderId,
    pub order_date: DateTime<Utc>,
    /// Fulfilment status label ("Processing", "Shipped", ...)
    pub status: String,
    pub customer: OrderContact,
    pub payment: PaymentInfo,
    pub shipping: ShippingInfo,
    pub items: Vec<OrderItem>,
    pub timeline: Vec<TimelineEvent>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderDetail {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of item lines (without tax and shipping)
    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Copy of the order under a new number, back at "Pending" with a fresh
    /// history.
    pub fn duplicate(&self, new_id: OrderId, now: DateTime<Utc>) -> Self {
        log::info!("duplicating order {} as {}", self.id, new_id);
        Self {
            id: new_id,
            order_date: now,
            status: "Pending".to_string(),
            timeline: vec![TimelineEvent {
                date: now,
                action: "Order Duplicated".to_string(),
                user: "System".to_string(),
            }],
            ..self.clone()
        }
    }
}

/// Badge class for a fulfilment/payment status label.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Pending" | "On Hold" => "badge--warning",
        "Processing" => "badge--info",
        "Shipped" | "Paid" | "paid" => "badge--primary",
        "Delivered" => "badge--success",
        "Cancelled" | "Failed" | "cancelled" => "badge--error",
        "Refunded" | "refunded" => "badge--accent",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_orders::fixtures;

    #[test]
    fn test_totals_of_sample_order() {
        let detail = fixtures::sample_order_detail(&OrderId::new("ORD-123456"));
        assert_eq!(detail.item_count(), 3);
        assert!((detail.items_subtotal() - detail.subtotal).abs() < 0.005);
        let expected = detail.subtotal + detail.tax + detail.shipping.cost;
        assert!((expected - detail.total).abs() < 0.005);
    }

    #[test]
    fn test_duplicate_resets_history() {
        let detail = fixtures::sample_order_detail(&OrderId::new("ORD-001"));
        let now = Utc::now();
        let copy = detail.duplicate(OrderId::new("ORD-900"), now);
        assert_eq!(copy.id.as_str(), "ORD-900");
        assert_eq!(copy.status, "Pending");
        assert_eq!(copy.timeline.len(), 1);
        assert_eq!(copy.timeline[0].action, "Order Duplicated");
        assert_eq!(copy.items, detail.items);
    }
}
