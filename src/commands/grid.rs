use std::collections::HashSet;

use anyhow::Result;
use daygrid_core::store::EventStore;
use daygrid_core::{CalendarDate, DateRange, build_grid};

use crate::render::render_grid;

pub fn run(store: &EventStore, user: &str, reference: CalendarDate) -> Result<()> {
    let grid = build_grid(reference);

    let range = DateRange::new(grid.first(), grid.last())?;
    let busy: HashSet<CalendarDate> = store
        .in_range(user, &range)
        .into_iter()
        .map(|e| e.date)
        .collect();

    println!("{}", render_grid(&grid, CalendarDate::today(), &busy));

    Ok(())
}
