/// Helpers shared by the list screens
use contracts::shared::list_view::{SortDirection, SortState};

/// Sort arrow shown next to a column title
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        match sort.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// `$2,499.99`
pub fn format_money(value: f64) -> String {
    contracts::shared::indicators::ValueFormat::usd().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::by("total", SortDirection::Descending);
        assert_eq!(get_sort_indicator(&sort, "total"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "date"), " ⇅");
        assert_eq!(get_sort_class(&SortState::default(), "total"), "sort-icon");
        assert_eq!(format_money(2499.99), "$2,499.99");
    }
}
