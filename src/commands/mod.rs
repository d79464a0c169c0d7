pub mod done;
pub mod events;
pub mod grid;
pub mod new;
pub mod remove;
pub mod search;
