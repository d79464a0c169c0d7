use anyhow::Result;
use daygrid_core::store::EventStore;

use crate::render::Render;

pub fn run(store: &mut EventStore, user: &str, id: &str, completed: bool) -> Result<()> {
    let event = store.commit(|store| store.set_completed(user, id, completed))?;

    println!("{}", event.render());

    Ok(())
}
