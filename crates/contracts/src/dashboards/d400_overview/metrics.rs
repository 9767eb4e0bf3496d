use serde::{Deserialize, Serialize};

use crate::shared::indicators::{
    IndicatorId, IndicatorMeta, IndicatorSet, IndicatorSetMeta, IndicatorStatus, IndicatorValue,
    ValueFormat,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueFigures {
    pub current: f64,
    pub previous: f64,
    pub year_to_date: f64,
}

/// Channel split, in percent of sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByChannel {
    pub online: f64,
    pub retail: f64,
    pub wholesale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesMetrics {
    pub total_revenue: RevenueFigures,
    pub sales_by_channel: SalesByChannel,
    pub average_order_value: f64,
    pub conversion_rate: f64,
    /// Month-over-month change of the conversion rate, percentage points
    pub conversion_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub name: String,
    pub sales: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryMetrics {
    pub low_stock_items: u32,
    pub top_selling_products: Vec<ProductSales>,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    pub new_customers: u32,
    pub returning_customers: u32,
    pub customer_lifetime_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteMetrics {
    pub visitors: u32,
    pub bounce_rate: f64,
}

/// Everything shown on the Dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub sales: SalesMetrics,
    pub inventory: InventoryMetrics,
    pub customers: CustomerMetrics,
    pub website: WebsiteMetrics,
}

/// Low stock above this count is flagged
pub const LOW_STOCK_WARNING: u32 = 10;
/// Bounce rate (percent) above this is flagged
pub const BOUNCE_RATE_WARNING: f64 = 40.0;

impl DashboardMetrics {
    /// Mock figures for the overview page.
    pub fn sample() -> Self {
        Self {
            sales: SalesMetrics {
                total_revenue: RevenueFigures {
                    current: 124_500.0,
                    previous: 115_000.0,
                    year_to_date: 1_450_000.0,
                },
                sales_by_channel: SalesByChannel {
                    online: 45.0,
                    retail: 35.0,
                    wholesale: 20.0,
                },
                average_order_value: 85.0,
                conversion_rate: 2.8,
                conversion_change: -0.8,
            },
            inventory: InventoryMetrics {
                low_stock_items: 12,
                top_selling_products: vec![
                    ProductSales { name: "Product A".to_string(), sales: 150 },
                    ProductSales { name: "Product B".to_string(), sales: 120 },
                    ProductSales { name: "Product C".to_string(), sales: 90 },
                ],
                total_value: 275_000.0,
            },
            customers: CustomerMetrics {
                new_customers: 245,
                returning_customers: 1850,
                customer_lifetime_value: 440.0,
            },
            website: WebsiteMetrics {
                visitors: 12_500,
                bounce_rate: 35.5,
            },
        }
    }

    /// `(current - previous) / previous * 100`; `None` without a previous period.
    pub fn revenue_growth_percent(&self) -> Option<f64> {
        let revenue = &self.sales.total_revenue;
        if revenue.previous == 0.0 {
            return None;
        }
        Some((revenue.current - revenue.previous) / revenue.previous * 100.0)
    }

    pub fn channel_shares(&self) -> Vec<(&'static str, f64)> {
        let ch = &self.sales.sales_by_channel;
        vec![
            ("Online", ch.online),
            ("Retail", ch.retail),
            ("Wholesale", ch.wholesale),
        ]
    }

    /// Top sellers with their sales relative to the best seller (0..=100).
    pub fn top_seller_share(&self) -> Vec<(String, u32, f64)> {
        let best = self
            .inventory
            .top_selling_products
            .iter()
            .map(|p| p.sales)
            .max()
            .unwrap_or(0);
        self.inventory
            .top_selling_products
            .iter()
            .map(|p| {
                let share = if best == 0 {
                    0.0
                } else {
                    p.sales as f64 * 100.0 / best as f64
                };
                (p.name.clone(), p.sales, share)
            })
            .collect()
    }

    /// Headline cards of the overview page.
    pub fn headline_set(&self) -> IndicatorSet {
        let growth = self.revenue_growth_percent();
        let growth_status = match growth {
            Some(g) if g >= 0.0 => IndicatorStatus::Good,
            Some(_) => IndicatorStatus::Bad,
            None => IndicatorStatus::Neutral,
        };
        let conversion_status = if self.sales.conversion_change < 0.0 {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Good
        };
        let stock_status = if self.inventory.low_stock_items > LOW_STOCK_WARNING {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Neutral
        };
        let bounce_status = if self.website.bounce_rate > BOUNCE_RATE_WARNING {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Good
        };

        let rows: Vec<(&str, &str, &str, ValueFormat, IndicatorValue)> = vec![
            (
                "revenue",
                "Total Revenue",
                "dollar",
                ValueFormat::usd(),
                value(
                    "revenue",
                    self.sales.total_revenue.current,
                    growth,
                    growth_status,
                    Some(format!(
                        "YTD: {}",
                        ValueFormat::usd().format(self.sales.total_revenue.year_to_date)
                    )),
                ),
            ),
            (
                "aov",
                "Average Order Value",
                "shopping-bag",
                ValueFormat::usd(),
                value(
                    "aov",
                    self.sales.average_order_value,
                    None,
                    IndicatorStatus::Neutral,
                    None,
                ),
            ),
            (
                "conversion",
                "Conversion Rate",
                "trending-up",
                ValueFormat::Percent { decimals: 1 },
                value(
                    "conversion",
                    self.sales.conversion_rate,
                    None,
                    conversion_status,
                    Some(format!("{:+.1}% from last month", self.sales.conversion_change)),
                ),
            ),
            (
                "low_stock",
                "Low Stock Items",
                "alert",
                ValueFormat::Integer,
                value(
                    "low_stock",
                    self.inventory.low_stock_items as f64,
                    None,
                    stock_status,
                    Some("Items need reordering".to_string()),
                ),
            ),
            (
                "inventory_value",
                "Inventory Value",
                "package",
                ValueFormat::usd(),
                value(
                    "inventory_value",
                    self.inventory.total_value,
                    None,
                    IndicatorStatus::Neutral,
                    None,
                ),
            ),
            (
                "new_customers",
                "New Customers",
                "users",
                ValueFormat::Integer,
                value(
                    "new_customers",
                    self.customers.new_customers as f64,
                    None,
                    IndicatorStatus::Good,
                    Some(format!("{} returning", self.customers.returning_customers)),
                ),
            ),
            (
                "clv",
                "Customer Lifetime Value",
                "star",
                ValueFormat::usd(),
                value(
                    "clv",
                    self.customers.customer_lifetime_value,
                    None,
                    IndicatorStatus::Neutral,
                    None,
                ),
            ),
            (
                "visitors",
                "Website Visitors",
                "bar-chart",
                ValueFormat::Integer,
                value(
                    "visitors",
                    self.website.visitors as f64,
                    None,
                    bounce_status,
                    Some(format!("Bounce rate {:.1}%", self.website.bounce_rate)),
                ),
            ),
        ];

        let mut indicators = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        for (id, label, icon, format, val) in rows {
            indicators.push(IndicatorMeta {
                id: IndicatorId::new(id),
                label: label.to_string(),
                icon: icon.to_string(),
                format,
                description: None,
            });
            values.push(val);
        }

        IndicatorSet {
            meta: IndicatorSetMeta {
                id: "overview".to_string(),
                label: "Store Performance".to_string(),
                indicators: indicators.iter().map(|m| m.id.clone()).collect(),
                columns: 4,
            },
            indicators,
            values,
        }
    }
}

fn value(
    id: &str,
    v: f64,
    change_percent: Option<f64>,
    status: IndicatorStatus,
    subtitle: Option<String>,
) -> IndicatorValue {
    IndicatorValue {
        id: IndicatorId::new(id),
        value: Some(v),
        change_percent,
        status,
        subtitle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_growth() {
        let metrics = DashboardMetrics::sample();
        let growth = metrics.revenue_growth_percent().unwrap();
        assert!((growth - 8.260869565).abs() < 1e-6);

        let mut flat = metrics.clone();
        flat.sales.total_revenue.previous = 0.0;
        assert_eq!(flat.revenue_growth_percent(), None);
    }

    #[test]
    fn test_top_seller_share() {
        let shares = DashboardMetrics::sample().top_seller_share();
        assert_eq!(shares[0].2, 100.0);
        assert!((shares[2].2 - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_headline_statuses() {
        let set = DashboardMetrics::sample().headline_set();
        assert_eq!(set.meta.indicators.len(), set.values.len());
        let status = |id: &str| {
            set.values
                .iter()
                .find(|v| v.id.0 == id)
                .map(|v| v.status)
                .unwrap()
        };
        assert_eq!(status("revenue"), IndicatorStatus::Good);
        assert_eq!(status("conversion"), IndicatorStatus::Bad);
        assert_eq!(status("low_stock"), IndicatorStatus::Warning);
        assert_eq!(status("visitors"), IndicatorStatus::Good);
    }
}
