/// Readable title for a page key. Fallback: the key itself.
pub fn page_label(key: &str) -> &str {
    match key {
        "dashboard" => "Dashboard",
        "orders" => "Orders",
        "customers" => "Customers",
        "settings" => "Settings",
        "help" => "Help",
        _ => key,
    }
}
