use anyhow::Result;
use daygrid_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &mut EventStore, user: &str, id: &str) -> Result<()> {
    let event = store.commit(|store| store.delete(user, id))?;

    println!("{} {}", "Deleted".red(), event.render());

    Ok(())
}
