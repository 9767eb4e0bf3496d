//! Plain-text invoice for an order (preview + download).

use std::fmt::{self, Write};

use super::detail::OrderDetail;

pub const COMPANY_LINES: [&str; 4] = [
    "Your Company Name",
    "123 Business Street",
    "City, State 12345",
    "Phone: (555) 123-4567",
];

pub fn invoice_file_name(detail: &OrderDetail) -> String {
    format!("invoice-{}.txt", detail.id)
}

/// Renders the invoice as fixed-width text.
pub fn render_invoice(detail: &OrderDetail) -> String {
    let mut out = String::new();
    match write_invoice(&mut out, detail) {
        Ok(()) => out,
        Err(e) => {
            log::error!("invoice {} could not be rendered: {}", detail.id, e);
            String::new()
        }
    }
}

/// Writes the invoice text into any `fmt::Write` sink.
pub fn write_invoice<W: Write>(out: &mut W, detail: &OrderDetail) -> fmt::Result {
    for line in COMPANY_LINES {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "INVOICE")?;
    writeln!(out, "Invoice #: {}", detail.id)?;
    writeln!(out, "Date: {}", detail.order_date.format("%Y-%m-%d"))?;
    writeln!(out)?;

    let customer = &detail.customer;
    writeln!(out, "Bill To:")?;
    for line in [
        &customer.name,
        &customer.email,
        &customer.phone,
        &customer.billing_address,
    ] {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:<28} {:<10} {:>5} {:>10} {:>10}",
        "Item", "SKU", "Qty", "Price", "Total"
    )?;
    writeln!(out, "{}", "-".repeat(67))?;
    for item in &detail.items {
        writeln!(
            out,
            "{:<28} {:<10} {:>5} {:>10} {:>10}",
            item.name,
            item.sku,
            item.quantity,
            money(item.price),
            money(item.line_total())
        )?;
    }
    writeln!(out, "{}", "-".repeat(67))?;

    let totals = [
        ("Subtotal", detail.subtotal),
        ("Shipping", detail.shipping.cost),
        ("Tax", detail.tax),
        ("Total", detail.total),
    ];
    for (label, value) in totals {
        writeln!(out, "{:>55} {:>11}", format!("{}:", label), money(value))?;
    }

    writeln!(out)?;
    writeln!(out, "Thank you for your business!")?;
    writeln!(
        out,
        "For any questions about this invoice, please contact our customer service team."
    )
}

pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_orders::aggregate::OrderId;
    use crate::domain::a001_orders::fixtures;

    #[test]
    fn test_invoice_contains_lines_and_totals() {
        let detail = fixtures::sample_order_detail(&OrderId::new("ORD-123456"));
        let text = render_invoice(&detail);
        assert!(text.contains("Invoice #: ORD-123456"));
        assert!(text.contains("Date: 2024-01-15"));
        assert!(text.contains("Premium T-Shirt"));
        assert!(text.contains("$59.98"));
        assert!(text.contains("$135.95"));
        assert_eq!(invoice_file_name(&detail), "invoice-ORD-123456.txt");
    }

    #[test]
    fn test_write_invoice_propagates_sink_errors() {
        struct Full;
        impl Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let detail = fixtures::sample_order_detail(&OrderId::new("ORD-1"));
        assert!(write_invoice(&mut Full, &detail).is_err());

        let mut text = String::new();
        write_invoice(&mut text, &detail).unwrap();
        assert_eq!(text, render_invoice(&detail));
        assert!(text.lines().any(|l| l == "Bill To:"));
    }
}
