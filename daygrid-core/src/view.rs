//! View granularities and the inclusive date ranges they query.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{DayGridError, DayGridResult};
use crate::grid::build_grid;

/// How deeply events are grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Week,
    Month,
    Year,
}

impl View {
    /// The window the client shows for this view around `date`.
    ///
    /// - week: the Sunday-to-Saturday week containing `date`
    /// - month: the full 42-day grid, including borrowed days
    /// - year: January 1st through December 31st
    pub fn range_around(&self, date: CalendarDate) -> DateRange {
        match self {
            View::Week => {
                let start = date.add_days(-i64::from(date.day_of_week()));
                DateRange {
                    start,
                    end: start.add_days(6),
                }
            }
            View::Month => {
                let grid = build_grid(date);
                DateRange {
                    start: grid.first(),
                    end: grid.last(),
                }
            }
            View::Year => DateRange {
                start: date.first_of_year(),
                end: date.last_of_year(),
            },
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Week => write!(f, "week"),
            View::Month => write!(f, "month"),
            View::Year => write!(f, "year"),
        }
    }
}

impl FromStr for View {
    type Err = DayGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(View::Week),
            "month" => Ok(View::Month),
            "year" => Ok(View::Year),
            _ => Err(DayGridError::UnknownView(s.to_string())),
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> DayGridResult<Self> {
        if start > end {
            return Err(DayGridError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}
