use daygrid_core::{
    BucketedEvents, CalendarDate, DayGridError, Event, TimeSlot, View, bucket_events,
};

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

fn event(id: &str, day: &str, time: Option<&str>) -> Event {
    Event {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        date: date(day),
        time: time.map(|t| TimeSlot::from_label(t).unwrap()),
        title: format!("Event {id}"),
        description: String::new(),
        completed: false,
    }
}

fn march() -> (CalendarDate, CalendarDate) {
    (date("2024-03-01"), date("2024-03-31"))
}

#[test]
fn month_view_groups_by_date_in_slot_order() {
    let events = vec![
        event("b", "2024-03-05", Some("2:00 PM - 3:00 PM")),
        event("a", "2024-03-05", Some("9:00 AM - 10:00 AM")),
    ];
    let (start, end) = march();

    let BucketedEvents::Month(by_date) = bucket_events(&events, start, end, View::Month).unwrap()
    else {
        panic!("expected month buckets");
    };

    assert_eq!(by_date.len(), 1);
    let ids: Vec<_> = by_date["2024-03-05"].iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn week_view_groups_by_date_then_slot() {
    let events = vec![
        event("a", "2024-03-05", Some("9:00 AM - 10:00 AM")),
        event("b", "2024-03-05", Some("2:00 PM - 3:00 PM")),
        event("c", "2024-03-06", Some("9:00 AM - 10:00 AM")),
    ];
    let (start, end) = march();

    let result = bucket_events(&events, start, end, View::Week).unwrap();
    assert_eq!(result.event_count(), 3);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["2024-03-05"]["9:00 AM - 10:00 AM"][0]["id"], "a");
    assert_eq!(json["2024-03-05"]["2:00 PM - 3:00 PM"][0]["id"], "b");
    assert_eq!(json["2024-03-06"]["9:00 AM - 10:00 AM"][0]["id"], "c");
}

#[test]
fn week_view_requires_time_slot() {
    let events = vec![
        event("a", "2024-03-05", Some("9:00 AM - 10:00 AM")),
        event("no-slot", "2024-03-05", None),
    ];
    let (start, end) = march();

    let err = bucket_events(&events, start, end, View::Week).unwrap_err();
    assert!(matches!(err, DayGridError::MissingTimeSlot(id) if id == "no-slot"));

    // Month and year views accept unslotted events
    assert!(bucket_events(&events, start, end, View::Month).is_ok());
    assert!(bucket_events(&events, start, end, View::Year).is_ok());
}

#[test]
fn ties_keep_input_order() {
    let slot = Some("9:00 AM - 10:00 AM");
    let events = vec![
        event("first", "2024-03-05", slot),
        event("second", "2024-03-05", slot),
        event("third", "2024-03-05", slot),
    ];
    let (start, end) = march();

    let BucketedEvents::Week(by_date) = bucket_events(&events, start, end, View::Week).unwrap()
    else {
        panic!("expected week buckets");
    };

    let slot = TimeSlot::from_index(9).unwrap();
    let ids: Vec<_> = by_date["2024-03-05"][&slot]
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn year_view_is_flat_and_chronological() {
    let events = vec![
        event("dec", "2024-12-01", Some("1:00 AM - 2:00 AM")),
        event("jan-late", "2024-01-10", Some("11:00 PM - 12:00 PM")),
        event("jan-early", "2024-01-10", Some("12:00 PM - 1:00 AM")),
        event("outside", "2025-01-01", Some("1:00 AM - 2:00 AM")),
    ];

    let result =
        bucket_events(&events, date("2024-01-01"), date("2024-12-31"), View::Year).unwrap();
    let BucketedEvents::Year(list) = &result else {
        panic!("expected flat list");
    };

    let ids: Vec<_> = list.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["jan-early", "jan-late", "dec"]);
    assert_eq!(result.view(), View::Year);
}

#[test]
fn range_bounds_are_inclusive() {
    let events = vec![
        event("start", "2024-03-01", None),
        event("end", "2024-03-31", None),
        event("before", "2024-02-29", None),
    ];
    let (start, end) = march();

    let result = bucket_events(&events, start, end, View::Month).unwrap();
    assert_eq!(result.event_count(), 2);
}

#[test]
fn reversed_range_is_rejected() {
    let events = vec![event("a", "2024-03-05", None)];

    let err = bucket_events(&events, date("2024-03-31"), date("2024-03-01"), View::Month)
        .unwrap_err();
    assert!(matches!(err, DayGridError::InvalidRange { .. }));
}

#[test]
fn input_is_not_modified() {
    let events = vec![
        event("b", "2024-03-06", Some("9:00 AM - 10:00 AM")),
        event("a", "2024-03-05", Some("9:00 AM - 10:00 AM")),
    ];
    let before = events.clone();
    let (start, end) = march();

    bucket_events(&events, start, end, View::Year).unwrap();
    assert_eq!(events, before);
}
