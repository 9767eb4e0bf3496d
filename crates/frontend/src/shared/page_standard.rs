//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_orders--list"`) and a `data-page-category` taken from below.

/// Table with filters, pagination and bulk actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record (modal body).
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Metric cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Settings and help.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `true` when `id` is `{entity}--{category}` with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => {
            !entity.is_empty()
                && [PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM]
                    .contains(&category)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_orders--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("orders"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_orders--grid"));
    }
}
