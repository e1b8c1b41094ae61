//! Date helpers shared by the ledger views.

use chrono::NaiveDate;

/// Format a date as DD.MM.YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Today's date in the user's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date in ISO form, for `<input type="date">` defaults.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date(date), "05.03.2025");
    }

    #[test]
    fn test_today_iso_shape() {
        let iso = today_iso();
        assert!(NaiveDate::parse_from_str(&iso, "%Y-%m-%d").is_ok());
    }
}
