pub mod ui;

use crate::shared::export::CsvExportable;
use contracts::domain::a002_customers::Customer;

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec![
            "Customer",
            "Name",
            "Email",
            "Status",
            "Orders",
            "Total Spend",
            "Last Order",
            "Registered",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.status.display_name().to_string(),
            self.orders.to_string(),
            format!("{:.2}", self.total_spend),
            self.last_order.format("%Y-%m-%d").to_string(),
            self.registration_date.format("%Y-%m-%d").to_string(),
        ]
    }
}
