//! Page keys of the center zone.
//!
//! - `registry` - page key → view
//! - `page_labels` - page key → title shown in the sidebar and header

pub mod page_labels;
pub mod registry;

pub use page_labels::page_label;
pub use registry::render_page;

pub const DEFAULT_PAGE: &str = "dashboard";

/// Sidebar order: (key, icon)
pub const NAV_PAGES: [(&str, &str); 5] = [
    ("dashboard", "dashboard"),
    ("orders", "orders"),
    ("customers", "customers"),
    ("settings", "settings"),
    ("help", "help"),
];

pub fn is_known_page(key: &str) -> bool {
    NAV_PAGES.iter().any(|(k, _)| *k == key)
}
