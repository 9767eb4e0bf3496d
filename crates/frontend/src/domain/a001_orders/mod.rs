pub mod ui;

use crate::shared::export::CsvExportable;
use contracts::domain::a001_orders::Order;

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec!["Order", "Customer", "Type", "Status", "Product", "Total", "Date"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer.clone(),
            self.order_type.clone(),
            self.status.display_name().to_string(),
            self.product.clone(),
            format!("{:.2}", self.total),
            self.date.format("%Y-%m-%d").to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use contracts::domain::a001_orders::fixtures::default_orders;

    #[test]
    fn test_orders_csv() {
        let csv = to_csv(&default_orders()[..1]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Order,Customer,Type,Status,Product,Total,Date"));
        assert_eq!(
            lines.next(),
            Some("ORD-001,John Doe,Standard,Paid,Product A,99.99,2024-01-15")
        );
    }
}
