use anyhow::Result;
use daygrid_core::store::EventStore;
use daygrid_core::{CalendarDate, NewEvent, TimeSlot};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    store: &mut EventStore,
    user: &str,
    title: String,
    date: &str,
    time: Option<&str>,
    description: Option<String>,
) -> Result<()> {
    let mut new = NewEvent::new(title, CalendarDate::parse(date)?);
    new.time = time.map(TimeSlot::from_label).transpose()?;
    new.description = description.unwrap_or_default();

    let event = store.commit(|store| store.create(user, new))?;

    println!("{} {}", "Created".green(), event.render());
    println!("  {}", event.id.dimmed());

    Ok(())
}
