/// Date formatting shared by the list and detail screens
use chrono::{DateTime, NaiveDate, Utc};

/// `2024-01-15` -> `Jan 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `2024-01-15T10:30:00Z` -> `Jan 15, 2024 10:30`
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y %H:%M").to_string()
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses the value of `<input type="date">`; empty or malformed = no date.
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d), "Jan 5, 2024");
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_datetime(dt), "Jan 15, 2024 10:30");
    }

    #[test]
    fn test_input_value_round_trip() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(to_input_value(d), "2024-01-15");
        assert_eq!(from_input_value("2024-01-15"), d);
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("15.01.2024"), None);
        assert_eq!(to_input_value(None), "");
    }
}
