//! Terminal rendering for daygrid-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use std::collections::HashSet;

use daygrid_core::bucket::{EventsByDate, EventsByDateAndSlot};
use daygrid_core::{BucketedEvents, CalendarDate, CalendarGrid, Event};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let check = if self.completed { "[x]" } else { "[ ]" };
        let slot = self.time.map(|t| t.label()).unwrap_or("any time");
        let title = if self.completed {
            self.title.strikethrough().dimmed().to_string()
        } else {
            self.title.clone()
        };

        format!(
            "{} {} {} {}",
            check,
            title,
            self.date.to_string().dimmed(),
            slot.dimmed()
        )
    }
}

impl Render for BucketedEvents {
    fn render(&self) -> String {
        match self {
            BucketedEvents::Week(by_date) => render_week(by_date),
            BucketedEvents::Month(by_date) => render_month(by_date),
            BucketedEvents::Year(events) => events
                .iter()
                .map(|e| format!("  {}", e.render()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn date_heading(key: &str) -> String {
    match CalendarDate::parse(key) {
        Ok(date) => format!(
            "{} {} {}",
            date.weekday_name(),
            date.month_name(),
            date.day()
        ),
        Err(_) => key.to_string(),
    }
}

fn render_week(by_date: &EventsByDateAndSlot) -> String {
    let mut lines = Vec::new();

    for (date, slots) in by_date {
        lines.push(date_heading(date).bold().to_string());
        for (slot, events) in slots {
            lines.push(format!("  {}", slot.label().cyan()));
            for event in events {
                lines.push(format!("    {}", event.title));
            }
        }
    }

    lines.join("\n")
}

fn render_month(by_date: &EventsByDate) -> String {
    let mut lines = Vec::new();

    for (date, events) in by_date {
        lines.push(date_heading(date).bold().to_string());
        for event in events {
            let slot = event.time.map(|t| t.label()).unwrap_or("any time");
            lines.push(format!("  {} {}", format!("{:>20}", slot).cyan(), event.title));
        }
    }

    lines.join("\n")
}

/// Six rows of seven days. Borrowed days are dimmed, today is highlighted and
/// days with events are underlined.
pub fn render_grid(grid: &CalendarGrid, today: CalendarDate, busy: &HashSet<CalendarDate>) -> String {
    let reference = grid.reference();
    let title = format!("{} {}", reference.month_name(), reference.year());

    let mut lines = vec![
        format!("{:^20}", title).bold().to_string(),
        "Su Mo Tu We Th Fr Sa".dimmed().to_string(),
    ];

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|day| {
                let cell = format!("{:>2}", day.day());
                let cell = if busy.contains(day) {
                    cell.underline().to_string()
                } else {
                    cell
                };

                if *day == today {
                    cell.reversed().to_string()
                } else if !grid.is_in_month(*day) {
                    cell.dimmed().to_string()
                } else {
                    cell
                }
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}
