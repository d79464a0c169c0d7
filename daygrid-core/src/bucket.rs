//! Grouping events for the week, month and year views.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::date::CalendarDate;
use crate::error::{DayGridError, DayGridResult};
use crate::event::Event;
use crate::time_slot::TimeSlot;
use crate::view::{DateRange, View};

/// Events keyed by ISO date, then by time slot.
pub type EventsByDateAndSlot = BTreeMap<String, BTreeMap<TimeSlot, Vec<Event>>>;

/// Events keyed by ISO date.
pub type EventsByDate = BTreeMap<String, Vec<Event>>;

/// Events shaped for one view. Serialized without a tag: the caller already
/// knows which view it asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BucketedEvents {
    Week(EventsByDateAndSlot),
    Month(EventsByDate),
    Year(Vec<Event>),
}

impl BucketedEvents {
    pub fn view(&self) -> View {
        match self {
            BucketedEvents::Week(_) => View::Week,
            BucketedEvents::Month(_) => View::Month,
            BucketedEvents::Year(_) => View::Year,
        }
    }

    /// Total number of events across all buckets.
    pub fn event_count(&self) -> usize {
        match self {
            BucketedEvents::Week(by_date) => by_date
                .values()
                .flat_map(|slots| slots.values())
                .map(Vec::len)
                .sum(),
            BucketedEvents::Month(by_date) => by_date.values().map(Vec::len).sum(),
            BucketedEvents::Year(events) => events.len(),
        }
    }
}

/// Group `events` falling within `[start, end]` for `view`.
///
/// Within every bucket events are ordered by (date, slot); events sharing
/// both keep their input order.
pub fn bucket_events(
    events: &[Event],
    start: CalendarDate,
    end: CalendarDate,
    view: View,
) -> DayGridResult<BucketedEvents> {
    let range = DateRange::new(start, end)?;

    let mut selected: Vec<&Event> = events.iter().filter(|e| range.contains(e.date)).collect();
    // Stable sort keeps ties in input order
    selected.sort_by_key(|e| e.chronological_key());

    match view {
        View::Week => by_date_and_slot(&selected).map(BucketedEvents::Week),
        View::Month => Ok(BucketedEvents::Month(by_date(&selected))),
        View::Year => Ok(BucketedEvents::Year(
            selected.into_iter().cloned().collect(),
        )),
    }
}

fn by_date_and_slot(events: &[&Event]) -> DayGridResult<EventsByDateAndSlot> {
    let mut buckets = EventsByDateAndSlot::new();

    for event in events {
        let slot = event
            .time
            .ok_or_else(|| DayGridError::MissingTimeSlot(event.id.clone()))?;

        buckets
            .entry(event.date.to_string())
            .or_default()
            .entry(slot)
            .or_default()
            .push((*event).clone());
    }

    Ok(buckets)
}

fn by_date(events: &[&Event]) -> EventsByDate {
    let mut buckets = EventsByDate::new();

    for event in events {
        buckets
            .entry(event.date.to_string())
            .or_default()
            .push((*event).clone());
    }

    buckets
}
