//! Month grid layout.
//!
//! A month is always drawn as six full Sunday-first weeks. Days before the
//! 1st are borrowed from the previous month and the remaining cells are
//! filled from the next month.

use serde::{Serialize, Serializer};

use crate::date::CalendarDate;

pub const GRID_WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_CELLS: usize = GRID_WEEKS * DAYS_PER_WEEK;

/// Exactly 42 consecutive days covering one month, starting on a Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    reference: CalendarDate,
    days: Vec<CalendarDate>,
}

/// Lay out the month containing `reference`.
pub fn build_grid(reference: CalendarDate) -> CalendarGrid {
    let first = reference.first_of_month();
    let month_len = i64::from(first.days_in_month());
    let leading = i64::from(first.day_of_week());

    let mut days = Vec::with_capacity(GRID_CELLS);

    // Tail of the previous month, oldest first
    days.extend((1..=leading).rev().map(|back| first.add_days(-back)));

    days.extend((0..month_len).map(|offset| first.add_days(offset)));

    let trailing = GRID_CELLS as i64 - leading - month_len;
    let last = first.add_days(month_len - 1);
    days.extend((1..=trailing).map(|ahead| last.add_days(ahead)));

    CalendarGrid { reference, days }
}

impl CalendarGrid {
    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    /// Rows of seven days, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn first(&self) -> CalendarDate {
        self.days[0]
    }

    pub fn last(&self) -> CalendarDate {
        self.days[GRID_CELLS - 1]
    }

    pub fn reference(&self) -> CalendarDate {
        self.reference
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    /// Number of cells borrowed from the previous month.
    pub fn leading_days(&self) -> usize {
        self.reference.first_of_month().day_of_week() as usize
    }

    /// Whether `date` belongs to the laid-out month rather than a neighbour.
    pub fn is_in_month(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'a> IntoIterator for &'a CalendarGrid {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

impl Serialize for CalendarGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.days.serialize(serializer)
    }
}
