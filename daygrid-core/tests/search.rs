use daygrid_core::{CalendarDate, DayGridError, Event, PageMeta, search};

fn event(id: usize, title: &str) -> Event {
    Event {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        date: CalendarDate::new(2024, 3, 1).unwrap().add_days(id as i64),
        time: None,
        title: title.to_string(),
        description: String::new(),
        completed: false,
    }
}

fn meetings(count: usize) -> Vec<Event> {
    (0..count).map(|i| event(i, &format!("Team Meeting {i}"))).collect()
}

#[test]
fn second_page_holds_the_remainder() {
    let mut events = meetings(7);
    events.push(event(100, "Dentist"));

    let result = search(&events, "meet", 2, 5).unwrap();

    assert_eq!(result.list.len(), 2);
    assert_eq!(
        result.page_meta,
        PageMeta {
            limit: 5,
            page: 2,
            total: 7,
            total_pages: 2,
        }
    );
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let events = meetings(3);

    let result = search(&events, "", 10, 5).unwrap();

    assert!(result.list.is_empty());
    assert_eq!(result.page_meta.total, 3);
    assert_eq!(result.page_meta.total_pages, 1);
}

#[test]
fn match_is_case_insensitive_substring() {
    let events = vec![
        event(1, "Standup MEETING"),
        event(2, "lunch"),
        event(3, "meetup"),
    ];

    let result = search(&events, "Meet", 1, 10).unwrap();
    let ids: Vec<_> = result.list.iter().map(|e| e.id.as_str()).collect();

    assert_eq!(ids, ["1", "3"]);
    assert_eq!(result.page_meta.total, 2);
}

#[test]
fn empty_keyword_matches_everything() {
    let result = search(&meetings(4), "", 1, 3).unwrap();

    assert_eq!(result.list.len(), 3);
    assert_eq!(result.page_meta.total, 4);
    assert_eq!(result.page_meta.total_pages, 2);
}

#[test]
fn no_matches_yields_zero_pages() {
    let result = search(&meetings(4), "holiday", 1, 5).unwrap();

    assert!(result.list.is_empty());
    assert_eq!(result.page_meta.total, 0);
    assert_eq!(result.page_meta.total_pages, 0);
}

#[test]
fn non_positive_page_or_limit_is_rejected() {
    let events = meetings(2);

    for (page, limit) in [(0, 5), (-1, 5), (1, 0), (1, -3)] {
        let err = search(&events, "", page, limit).unwrap_err();
        assert!(matches!(err, DayGridError::InvalidPagination { .. }));
    }
}

#[test]
fn page_result_wire_shape() {
    let result = search(&meetings(1), "", 1, 5).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["list"][0]["title"], "Team Meeting 0");
    assert_eq!(json["pageMeta"]["totalPages"], 1);
    assert_eq!(json["pageMeta"]["limit"], 5);
}

#[test]
fn whitespace_in_keyword_is_significant() {
    let events = vec![event(1, "Team meeting"), event(2, "Dentist")];

    let space = search(&events, " ", 1, 10).unwrap();
    assert_eq!(space.page_meta.total, 1);
    assert_eq!(space.list[0].title, "Team meeting");

    let trailing = search(&events, "meeting ", 1, 10).unwrap();
    assert_eq!(trailing.page_meta.total, 0);
    assert!(trailing.list.is_empty());
}
