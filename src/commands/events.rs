use anyhow::Result;
use daygrid_core::store::EventStore;
use daygrid_core::{CalendarDate, DateRange, View, bucket_events};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    store: &EventStore,
    user: &str,
    view: &str,
    around: CalendarDate,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let view: View = view.parse()?;
    let range = resolve_range(view, around, from, to)?;

    let events = store.in_range(user, &range);
    let bucketed = bucket_events(&events, range.start, range.end, view)?;

    println!(
        "{}",
        format!("{} view: {} to {}", view, range.start, range.end).bold()
    );

    if bucketed.event_count() == 0 {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    println!("{}", bucketed.render());

    Ok(())
}

/// Explicit --from/--to win; missing ends come from the view's window.
fn resolve_range(
    view: View,
    around: CalendarDate,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<DateRange> {
    let window = view.range_around(around);

    let start = match from {
        Some(s) => CalendarDate::parse(s)?,
        None => window.start,
    };
    let end = match to {
        Some(s) => CalendarDate::parse(s)?,
        None => window.end,
    };

    Ok(DateRange::new(start, end)?)
}
