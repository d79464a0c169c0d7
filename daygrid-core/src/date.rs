//! Immutable Gregorian calendar dates.
//!
//! `CalendarDate` is a plain `Copy` value: every arithmetic operation returns a
//! new date and never touches the receiver, so grids and buckets can be built
//! from shared dates without cloning.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Years accepted by the constructors: the four-digit years of `YYYY-MM-DD`.
/// Grids and view windows reach at most a few weeks past either end, which
/// stays well inside chrono's range.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A calendar day with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> DayGridResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
            .map(CalendarDate)
            .ok_or_else(|| DayGridError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> DayGridResult<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .ok()
            .filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
            .map(CalendarDate)
            .ok_or_else(|| DayGridError::InvalidDate(s.to_string()))
    }

    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of the week with Sunday = 0 through Saturday = 6.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Shift by `days`.
    ///
    /// # Panics
    ///
    /// If the result leaves chrono's representable range, which no shift of a
    /// supported date by less than 250,000 years can do.
    pub fn add_days(&self, days: i64) -> Self {
        CalendarDate(self.0 + Duration::days(days))
    }

    pub fn first_of_month(&self) -> Self {
        self.add_days(-i64::from(self.0.day0()))
    }

    /// Number of days in this date's month, derived from the distance to the
    /// first day of the following month.
    pub fn days_in_month(&self) -> u32 {
        let first = self.first_of_month().0;
        first
            .checked_add_months(Months::new(1))
            .map_or(31, |next| (next - first).num_days() as u32)
    }

    pub fn first_of_year(&self) -> Self {
        self.add_days(-i64::from(self.0.ordinal0()))
    }

    pub fn last_of_year(&self) -> Self {
        // December 31st exists in every year chrono can represent
        NaiveDate::from_ymd_opt(self.year(), 12, 31).map_or(*self, CalendarDate)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.0.month0() as usize]
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.day_of_week() as usize]
    }

}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DayGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DayGridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CalendarDate::parse(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(date("2024-02-10").days_in_month(), 29);
        assert_eq!(date("2023-02-10").days_in_month(), 28);
        assert_eq!(date("1900-02-01").days_in_month(), 28);
        assert_eq!(date("2000-02-01").days_in_month(), 29);
        assert_eq!(date("2024-12-31").days_in_month(), 31);
        assert_eq!(date("2024-04-30").days_in_month(), 30);
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        let d = date("2023-12-30");
        assert_eq!(d.add_days(3), date("2024-01-02"));
        assert_eq!(d.add_days(-30), date("2023-11-30"));
        // receiver is untouched
        assert_eq!(d, date("2023-12-30"));
    }

    #[test]
    fn day_of_week_starts_on_sunday() {
        assert_eq!(date("2024-03-03").day_of_week(), 0);
        assert_eq!(date("2024-02-01").day_of_week(), 4);
        assert_eq!(date("2024-02-01").weekday_name(), "Thursday");
        assert_eq!(date("2024-09-01").month_name(), "September");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            CalendarDate::parse("2024-02-30"),
            Err(DayGridError::InvalidDate(_))
        ));
        assert!(CalendarDate::parse("03/05/2024").is_err());
    }

    #[test]
    fn years_outside_four_digits_are_rejected() {
        assert!(matches!(
            CalendarDate::parse("+262142-12-15"),
            Err(DayGridError::InvalidDate(_))
        ));
        assert!(CalendarDate::new(262142, 12, 1).is_err());
        assert!(CalendarDate::new(0, 12, 31).is_err());
        assert!(CalendarDate::new(10000, 1, 1).is_err());

        assert!(CalendarDate::parse("0001-01-01").is_ok());
        assert!(CalendarDate::parse("9999-12-31").is_ok());
    }

    #[test]
    fn year_bounds() {
        assert_eq!(date("2024-06-15").first_of_year(), date("2024-01-01"));
        assert_eq!(date("2024-06-15").last_of_year(), date("2024-12-31"));
        assert_eq!(date("2023-01-01").last_of_year(), date("2023-12-31"));
    }

    #[test]
    fn serializes_as_iso_string() {
        let json = serde_json::to_string(&date("2024-03-05")).unwrap();
        assert_eq!(json, "\"2024-03-05\"");

        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date("2024-03-05"));
    }
}
