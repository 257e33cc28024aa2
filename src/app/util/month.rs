use std::fmt;

use axum::http::StatusCode;
use chrono::{Datelike, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::app::models::api_error::ApiError;

lazy_static! {
    pub static ref MONTH_REGEX: Regex = Regex::new(r"^(\d{4})-(\d{2})$").unwrap();
}

/// A calendar month in UTC, written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    first: NaiveDate,
    next: NaiveDate,
}

impl Month {
    pub fn from_ymd(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = first.checked_add_months(Months::new(1))?;

        Some(Self { first, next })
    }

    pub fn parse(value: &str) -> Result<Self, ApiError> {
        let invalid = || ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Invalid month.".to_string(),
        };

        let Some(captures) = MONTH_REGEX.captures(value.trim()) else {
            return Err(invalid());
        };

        let year = captures[1].parse::<i32>();
        let month = captures[2].parse::<u32>();
        let (Ok(year), Ok(month)) = (year, month) else {
            return Err(invalid());
        };

        Self::from_ymd(year, month).ok_or_else(invalid)
    }

    /// Parses `value` when present, otherwise the current month.
    pub fn parse_or_current(value: Option<&str>) -> Result<Self, ApiError> {
        match value {
            Some(value) => Self::parse(value),
            None => Ok(Self::current()),
        }
    }

    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        let first = today.with_day(1).unwrap_or(today);

        Self {
            first,
            next: first
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn previous(&self) -> Option<Self> {
        let first = self.first.checked_sub_months(Months::new(1))?;

        Some(Self {
            first,
            next: self.first,
        })
    }

    /// `count` months ending at `self`, newest first.
    pub fn recent(&self, count: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(count);
        let mut cursor = Some(*self);

        while months.len() < count {
            let Some(month) = cursor else {
                break;
            };

            months.push(month);
            cursor = month.previous();
        }

        months
    }

    /// Half-open `[start, end)` range in unix seconds.
    pub fn range(&self) -> (i64, i64) {
        let midnight = NaiveTime::default();
        let start = Utc.from_utc_datetime(&self.first.and_time(midnight));
        let end = Utc.from_utc_datetime(&self.next.and_time(midnight));

        (start.timestamp(), end.timestamp())
    }

    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.first.year(), self.first.month())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let month = Month::parse("2026-03").unwrap();
        assert_eq!(month.to_string(), "2026-03");
        assert_eq!(month.label(), "March 2026");
    }

    #[test]
    fn rejects_malformed_months() {
        for value in ["2026-13", "2026-00", "2026-3", "26-03", "march", ""] {
            let err = Month::parse(value).unwrap_err();
            assert_eq!(err.code, StatusCode::BAD_REQUEST, "{}", value);
        }
    }

    #[test]
    fn range_covers_whole_month() {
        let (start, end) = Month::parse("2024-02").unwrap().range();

        // 2024-02-01T00:00:00Z and 2024-03-01T00:00:00Z
        assert_eq!(start, 1_706_745_600);
        assert_eq!(end, 1_709_251_200);
        assert_eq!(end - start, 29 * 86_400);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let (start, end) = Month::parse("2025-12").unwrap().range();
        let (next_start, _) = Month::parse("2026-01").unwrap().range();

        assert_eq!(end, next_start);
        assert_eq!(end - start, 31 * 86_400);
    }

    #[test]
    fn recent_is_newest_first_across_years() {
        let months: Vec<String> = Month::parse("2026-02")
            .unwrap()
            .recent(4)
            .iter()
            .map(|m| m.to_string())
            .collect();

        assert_eq!(months, vec!["2026-02", "2026-01", "2025-12", "2025-11"]);
    }

    #[test]
    fn serializes_as_string() {
        let month = Month::parse("2026-10").unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2026-10\"");
    }
}
