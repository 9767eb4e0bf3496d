//! Mock orders for the dashboard.

use chrono::{NaiveDate, TimeZone, Utc};

use super::aggregate::{Order, OrderId, OrderStatus};
use super::detail::{OrderContact, OrderDetail, OrderItem, PaymentInfo, ShippingInfo, TimelineEvent};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn order(
    id: &str,
    customer: &str,
    order_type: &str,
    status: OrderStatus,
    product: &str,
    total: f64,
    date: NaiveDate,
) -> Order {
    Order {
        id: OrderId::new(id),
        customer: customer.to_string(),
        order_type: order_type.to_string(),
        status,
        product: product.to_string(),
        total,
        date,
    }
}

/// ORD-001..ORD-003
pub fn default_orders() -> Vec<Order> {
    vec![
        order("ORD-001", "John Doe", "Standard", OrderStatus::Paid, "Product A", 99.99, date(2024, 1, 15)),
        order("ORD-002", "Jane Smith", "Express", OrderStatus::Cancelled, "Product B", 149.99, date(2024, 1, 14)),
        order("ORD-003", "Bob Wilson", "Standard", OrderStatus::Refunded, "Product C", 79.99, date(2024, 1, 13)),
    ]
}

/// Default orders followed by generated history, enough for several pages.
pub fn demo_orders() -> Vec<Order> {
    const CUSTOMERS: [&str; 6] = [
        "Alice Brown",
        "Carlos Diaz",
        "Emma Johnson",
        "Liam Chen",
        "Olivia Martin",
        "Noah Patel",
    ];
    const PRODUCTS: [&str; 4] = ["Product A", "Product B", "Product C", "Product D"];

    let mut orders = default_orders();
    let start = date(2024, 1, 12);
    for n in 0..22u32 {
        let status = match n % 5 {
            3 => OrderStatus::Cancelled,
            4 => OrderStatus::Refunded,
            _ => OrderStatus::Paid,
        };
        let total = 24.5 + ((n * 37) % 180) as f64 + 0.99;
        orders.push(order(
            &format!("ORD-{:03}", n + 4),
            CUSTOMERS[(n as usize) % CUSTOMERS.len()],
            if n % 3 == 0 { "Express" } else { "Standard" },
            status,
            PRODUCTS[(n as usize) % PRODUCTS.len()],
            total,
            start - chrono::Duration::days(n as i64),
        ));
    }
    orders
}

/// The sample order behind every detail modal, renumbered to `id`.
pub fn sample_order_detail(id: &OrderId) -> OrderDetail {
    let at = |d: u32, h: u32, m: u32| {
        Utc.with_ymd_and_hms(2024, 1, d, h, m, 0)
            .single()
            .unwrap_or_default()
    };

    OrderDetail {
        id: id.clone(),
        order_date: at(15, 10, 30),
        status: "Processing".to_string(),
        customer: OrderContact {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            shipping_address: "123 Main St, Apt 4B, New York, NY 10001".to_string(),
            billing_address: "123 Main St, Apt 4B, New York, NY 10001".to_string(),
        },
        payment: PaymentInfo {
            method: "Credit Card - Visa ending in 4242".to_string(),
            transaction_id: "txn_1234567890".to_string(),
            status: "Paid".to_string(),
        },
        shipping: ShippingInfo {
            method: "Express Shipping".to_string(),
            tracking_number: Some("1Z999AA1234567890".to_string()),
            estimated_delivery: Some(date(2024, 1, 18)),
            cost: 15.99,
        },
        items: vec![
            OrderItem {
                id: "1".to_string(),
                name: "Premium T-Shirt".to_string(),
                sku: "TS-001".to_string(),
                quantity: 2,
                size: Some("L".to_string()),
                color: Some("Navy Blue".to_string()),
                price: 29.99,
            },
            OrderItem {
                id: "2".to_string(),
                name: "Classic Jeans".to_string(),
                sku: "JN-101".to_string(),
                quantity: 1,
                size: Some("32".to_string()),
                color: Some("Dark Blue".to_string()),
                price: 49.99,
            },
        ],
        timeline: vec![
            TimelineEvent {
                date: at(15, 10, 30),
                action: "Order Placed".to_string(),
                user: "Customer".to_string(),
            },
            TimelineEvent {
                date: at(15, 10, 35),
                action: "Payment Confirmed".to_string(),
                user: "System".to_string(),
            },
            TimelineEvent {
                date: at(15, 11, 0),
                action: "Processing Started".to_string(),
                user: "Jane Smith (Staff)".to_string(),
            },
        ],
        subtotal: 109.97,
        tax: 9.99,
        total: 135.95,
    }
}

/// Detail for a list row: the sample order with the row's customer and date.
pub fn order_detail_for(order: &Order) -> OrderDetail {
    let mut detail = sample_order_detail(&order.id);
    detail.customer.name = order.customer.clone();
    detail.customer.email = format!(
        "{}@example.com",
        order
            .customer
            .split_whitespace()
            .next()
            .unwrap_or("customer")
            .to_lowercase()
    );
    if let Some(placed) = order.date.and_hms_opt(10, 30, 0) {
        detail.order_date = Utc.from_utc_datetime(&placed);
        if let Some(first) = detail.timeline.first_mut() {
            first.date = detail.order_date;
        }
    }
    detail.payment.status = order.status.display_name().to_string();
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let orders = demo_orders();
        let ids: HashSet<_> = orders.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids.len(), orders.len());
        assert_eq!(orders.len(), 25);
        assert_eq!(orders[0].id.as_str(), "ORD-001");
        assert_eq!(orders[24].id.as_str(), "ORD-025");
    }

    #[test]
    fn test_detail_for_row() {
        let orders = default_orders();
        let detail = order_detail_for(&orders[1]);
        assert_eq!(detail.id.as_str(), "ORD-002");
        assert_eq!(detail.customer.name, "Jane Smith");
        assert_eq!(detail.customer.email, "jane@example.com");
        assert_eq!(detail.payment.status, "Cancelled");
        assert_eq!(detail.order_date.date_naive(), orders[1].date);
    }
}
