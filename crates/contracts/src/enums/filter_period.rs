use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date-window presets for the transactions list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterPeriod {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl FilterPeriod {
    /// Stable lowercase code.
    pub fn code(&self) -> &'static str {
        match self {
            FilterPeriod::All => "all",
            FilterPeriod::Week => "week",
            FilterPeriod::Month => "month",
            FilterPeriod::Year => "year",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterPeriod::All => "All",
            FilterPeriod::Week => "Last 7 days",
            FilterPeriod::Month => "Last month",
            FilterPeriod::Year => "Last year",
        }
    }

    /// All periods, in presentation order.
    pub fn all() -> [FilterPeriod; 4] {
        [
            FilterPeriod::All,
            FilterPeriod::Week,
            FilterPeriod::Month,
            FilterPeriod::Year,
        ]
    }

    /// Parse from a lowercase code.
    pub fn from_code(code: &str) -> Result<Self, String> {
        match code {
            "all" => Ok(FilterPeriod::All),
            "week" => Ok(FilterPeriod::Week),
            "month" => Ok(FilterPeriod::Month),
            "year" => Ok(FilterPeriod::Year),
            _ => Err(format!("Unknown filter period: {}", code)),
        }
    }

    /// Earliest date (inclusive) an entry may carry to fall inside the
    /// window ending at `today`. `All` has no lower bound.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            FilterPeriod::All => None,
            FilterPeriod::Week => today.checked_sub_days(Days::new(6)),
            FilterPeriod::Month => today.checked_sub_months(Months::new(1)),
            FilterPeriod::Year => today.checked_sub_months(Months::new(12)),
        }
    }

    /// Whether `date` falls inside the window ending at `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start_date(today) {
            Some(start) => date >= start,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_window_spans_seven_days_inclusive() {
        let today = date(2025, 3, 15);
        assert_eq!(
            FilterPeriod::Week.start_date(today),
            Some(date(2025, 3, 9))
        );
        assert!(FilterPeriod::Week.contains(date(2025, 3, 9), today));
        assert!(!FilterPeriod::Week.contains(date(2025, 3, 8), today));
    }

    #[test]
    fn month_and_year_windows_use_calendar_arithmetic() {
        let today = date(2025, 3, 15);
        assert_eq!(
            FilterPeriod::Month.start_date(today),
            Some(date(2025, 2, 15))
        );
        assert_eq!(
            FilterPeriod::Year.start_date(today),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn all_has_no_lower_bound() {
        let today = date(2025, 3, 15);
        assert_eq!(FilterPeriod::All.start_date(today), None);
        assert!(FilterPeriod::All.contains(date(1999, 1, 1), today));
    }

    #[test]
    fn from_code_round_trips() {
        for p in FilterPeriod::all() {
            assert_eq!(FilterPeriod::from_code(p.code()), Ok(p));
        }
        assert!(FilterPeriod::from_code("quarter").is_err());
    }
}
