//! Mock customers for the dashboard.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use super::aggregate::{Customer, CustomerId, CustomerStatus};
use super::detail::{
    Addresses, BasicInfo, Communication, CustomerAnalytics, CustomerDetail, CustomerNote,
    MarketingPreferences, OrderSummary,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    status: CustomerStatus,
    orders: u32,
    total_spend: f64,
    last_order: NaiveDate,
    registration_date: NaiveDate,
) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        status,
        orders,
        total_spend,
        last_order,
        registration_date,
    }
}

/// CUS-001..CUS-003
pub fn default_customers() -> Vec<Customer> {
    vec![
        customer("CUS-001", "John Doe", "john@example.com", CustomerStatus::Active, 15, 2499.99, date(2024, 1, 15), date(2023, 6, 1)),
        customer("CUS-002", "Jane Smith", "jane@example.com", CustomerStatus::Inactive, 8, 1299.99, date(2023, 12, 20), date(2023, 8, 15)),
        customer("CUS-003", "Bob Wilson", "bob@example.com", CustomerStatus::Blocked, 3, 499.99, date(2023, 11, 30), date(2023, 10, 1)),
    ]
}

pub fn demo_customers() -> Vec<Customer> {
    const NAMES: [&str; 8] = [
        "Alice Brown",
        "Carlos Diaz",
        "Emma Johnson",
        "Liam Chen",
        "Olivia Martin",
        "Noah Patel",
        "Sophia Rossi",
        "Mason Clark",
    ];

    let mut customers = default_customers();
    for (n, name) in NAMES.iter().chain(NAMES.iter().take(6)).enumerate() {
        let n = n as u32;
        let first = name.split_whitespace().next().unwrap_or("user").to_lowercase();
        let status = match n % 6 {
            4 => CustomerStatus::Inactive,
            5 => CustomerStatus::Blocked,
            _ => CustomerStatus::Active,
        };
        let orders = 1 + (n * 7) % 24;
        customers.push(customer(
            &format!("CUS-{:03}", n + 4),
            name,
            &format!("{}{}@example.com", first, n + 4),
            status,
            orders,
            orders as f64 * (45.0 + (n % 5) as f64 * 20.0) + 0.99,
            date(2024, 1, 10) - chrono::Duration::days((n * 9) as i64),
            date(2023, 1, 5) + chrono::Duration::days((n * 17) as i64),
        ));
    }
    customers
}

pub fn sample_notes() -> Vec<CustomerNote> {
    let at = |d: u32, h: u32, m: u32| {
        Utc.with_ymd_and_hms(2024, 1, d, h, m, 0)
            .single()
            .unwrap_or_default()
    };
    vec![
        CustomerNote {
            id: Uuid::from_u128(1),
            content: "Customer requested information about bulk ordering.".to_string(),
            created_at: at(15, 10, 30),
            created_by: "John Smith".to_string(),
        },
        CustomerNote {
            id: Uuid::from_u128(2),
            content: "Follow up on size exchange request for order #ORD-002.".to_string(),
            created_at: at(14, 15, 45),
            created_by: "Sarah Johnson".to_string(),
        },
    ]
}

/// The sample profile behind every detail modal, renumbered to `id`.
pub fn sample_customer_detail(id: &CustomerId) -> CustomerDetail {
    CustomerDetail {
        id: id.clone(),
        basic_info: BasicInfo {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date_of_birth: Some(date(1990, 5, 15)),
            gender: Some("Male".to_string()),
            registration_date: date(2023, 6, 1),
            status: CustomerStatus::Active,
        },
        addresses: Addresses {
            billing: "123 Main St, Apt 4B, New York, NY 10001".to_string(),
            shipping: vec![
                "123 Main St, Apt 4B, New York, NY 10001".to_string(),
                "456 Work Ave, Suite 100, New York, NY 10002".to_string(),
            ],
        },
        order_history: vec![
            OrderSummary {
                id: "ORD-001".to_string(),
                date: date(2024, 1, 15),
                total: 299.99,
                status: "delivered".to_string(),
                items: 3,
            },
            OrderSummary {
                id: "ORD-002".to_string(),
                date: date(2023, 12, 20),
                total: 199.99,
                status: "processing".to_string(),
                items: 2,
            },
        ],
        analytics: CustomerAnalytics {
            total_spend: 2499.99,
            average_order_value: 166.67,
            orders_count: 15,
            last_order_date: date(2024, 1, 15),
            favorite_categories: vec![
                "Shirts".to_string(),
                "Jeans".to_string(),
                "Accessories".to_string(),
            ],
            returns_count: 1,
        },
        marketing: MarketingPreferences {
            email_subscribed: true,
            sms_subscribed: false,
            segments: vec!["High Value".to_string(), "Regular Customer".to_string()],
            last_campaign: Some("Holiday Sale 2023".to_string()),
        },
        communications: vec![
            Communication {
                date: date(2024, 1, 15),
                kind: "email".to_string(),
                subject: "Order Confirmation".to_string(),
                content: "Thank you for your order #ORD-001".to_string(),
            },
            Communication {
                date: date(2024, 1, 10),
                kind: "support".to_string(),
                subject: "Size Exchange Request".to_string(),
                content: "Customer requested size exchange for order #ORD-002".to_string(),
            },
        ],
        notes: sample_notes(),
    }
}

/// Detail for a list row: the sample profile with the row's own attributes.
pub fn customer_detail_for(customer: &Customer) -> CustomerDetail {
    let mut detail = sample_customer_detail(&customer.id);
    detail.basic_info.name = customer.name.clone();
    detail.basic_info.email = customer.email.clone();
    detail.basic_info.status = customer.status;
    detail.basic_info.registration_date = customer.registration_date;
    detail.analytics.total_spend = customer.total_spend;
    detail.analytics.orders_count = customer.orders;
    detail.analytics.average_order_value = customer.average_order_value();
    detail.analytics.last_order_date = customer.last_order;
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_customers() {
        let customers = demo_customers();
        assert_eq!(customers.len(), 17);
        let ids: HashSet<_> = customers.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), customers.len());
        assert!(customers.iter().all(|c| c.orders > 0));
    }

    #[test]
    fn test_detail_for_row_uses_row_analytics() {
        let customers = default_customers();
        let detail = customer_detail_for(&customers[2]);
        assert_eq!(detail.id.as_str(), "CUS-003");
        assert_eq!(detail.basic_info.status, CustomerStatus::Blocked);
        assert_eq!(detail.analytics.orders_count, 3);
        assert!((detail.analytics.average_order_value - 499.99 / 3.0).abs() < 1e-9);
    }
}
