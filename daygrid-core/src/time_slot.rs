//! The fixed table of one-hour time slots.
//!
//! Slot labels are a wire contract shared with the web client, which renders
//! the day starting from the "12:00 PM - 1:00 AM" row. The labels are kept
//! exactly as the client expects them, including the midnight hour being
//! written as "12:00 PM".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DayGridError, DayGridResult};

pub const SLOT_COUNT: usize = 24;

const SLOT_LABELS: [&str; SLOT_COUNT] = [
    "12:00 PM - 1:00 AM",
    "1:00 AM - 2:00 AM",
    "2:00 AM - 3:00 AM",
    "3:00 AM - 4:00 AM",
    "4:00 AM - 5:00 AM",
    "5:00 AM - 6:00 AM",
    "6:00 AM - 7:00 AM",
    "7:00 AM - 8:00 AM",
    "8:00 AM - 9:00 AM",
    "9:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    "12:00 PM - 1:00 PM",
    "1:00 PM - 2:00 PM",
    "2:00 PM - 3:00 PM",
    "3:00 PM - 4:00 PM",
    "4:00 PM - 5:00 PM",
    "5:00 PM - 6:00 PM",
    "6:00 PM - 7:00 PM",
    "7:00 PM - 8:00 PM",
    "8:00 PM - 9:00 PM",
    "9:00 PM - 10:00 PM",
    "10:00 PM - 11:00 PM",
    "11:00 PM - 12:00 PM",
];

/// One of the 24 labelled one-hour intervals of a day, ordered by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct TimeSlot(u8);

/// Accepted wire forms: the label, or the numeric index the original client sent.
#[derive(Deserialize)]
#[serde(untagged)]
enum SlotRepr {
    Index(u8),
    Label(String),
}

impl TimeSlot {
    pub fn from_index(index: u8) -> DayGridResult<Self> {
        if (index as usize) < SLOT_COUNT {
            Ok(TimeSlot(index))
        } else {
            Err(DayGridError::UnknownTimeSlot(index.to_string()))
        }
    }

    /// Look up a slot by its exact label. A bare index ("14") is accepted too,
    /// since JSON object keys always arrive as strings.
    pub fn from_label(label: &str) -> DayGridResult<Self> {
        let label = label.trim();

        if let Some(index) = SLOT_LABELS.iter().position(|l| *l == label) {
            return Ok(TimeSlot(index as u8));
        }

        match label.parse::<u8>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Err(DayGridError::UnknownTimeSlot(label.to_string())),
        }
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        SLOT_LABELS[self.0 as usize]
    }

    /// All slots in display order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT as u8).map(TimeSlot)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = DayGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::from_label(s)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slot = match SlotRepr::deserialize(deserializer)? {
            SlotRepr::Index(index) => TimeSlot::from_index(index),
            SlotRepr::Label(label) => TimeSlot::from_label(&label),
        };
        slot.map_err(serde::de::Error::custom)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label().to_string()
    }
}
