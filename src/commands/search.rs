use anyhow::Result;
use daygrid_core::search;
use daygrid_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &EventStore, user: &str, keyword: &str, page: i64, limit: i64) -> Result<()> {
    let events = store.for_user(user);
    let result = search(&events, keyword, page, limit)?;

    if result.list.is_empty() {
        println!("{}", "No events found".dimmed());
    } else {
        for event in &result.list {
            println!("{}", event.render());
        }
    }

    let meta = result.page_meta;
    println!(
        "{}",
        format!(
            "Page {} of {} ({} matching)",
            meta.page, meta.total_pages, meta.total
        )
        .dimmed()
    );

    Ok(())
}
