//! Event records.
//!
//! Events are owned by the store; the grid, bucketing and search operations
//! only read slices of them and hand back reshaped copies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{DayGridError, DayGridResult};
use crate::time_slot::TimeSlot;

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    pub date: CalendarDate,
    /// The hour this event occupies. Required for week view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeSlot>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    /// Sort key used everywhere events are ordered: by date, then by slot.
    /// Events without a slot sort before the first slot of their day.
    pub fn chronological_key(&self) -> (CalendarDate, Option<TimeSlot>) {
        (self.date, self.time)
    }

    pub fn from_new(id: String, user_id: &str, new: NewEvent) -> Self {
        Event {
            id,
            user_id: user_id.to_string(),
            date: new.date,
            time: new.time,
            title: new.title.trim().to_string(),
            description: new.description,
            completed: new.completed,
        }
    }

    /// Replace the editable fields, keeping identity and ownership.
    pub fn apply(&mut self, changes: NewEvent) {
        self.date = changes.date;
        self.time = changes.time;
        self.title = changes.title.trim().to_string();
        self.description = changes.description;
        self.completed = changes.completed;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Payload for creating or editing an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub date: CalendarDate,
    #[serde(default)]
    pub time: Option<TimeSlot>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: CalendarDate) -> Self {
        NewEvent {
            title: title.into(),
            date,
            time: None,
            description: String::new(),
            completed: false,
        }
    }

    pub fn validate(&self) -> DayGridResult<()> {
        if self.title.trim().is_empty() {
            return Err(DayGridError::InvalidEvent("title must not be empty".into()));
        }
        Ok(())
    }
}
