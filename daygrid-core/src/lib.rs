//! Core types for the daygrid ecosystem.
//!
//! This crate lays out month grids, groups events for the week/month/year
//! views and paginates keyword searches. It is shared by daygrid-server and
//! the daygrid CLI:
//! - `grid::build_grid` for the 42-day month layout
//! - `bucket::bucket_events` for per-view grouping
//! - `search::search` for keyword pagination
//! - `store::EventStore` for JSON-file persistence

pub mod bucket;
pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod grid;
pub mod search;
pub mod store;
pub mod time_slot;
pub mod view;

pub use bucket::{BucketedEvents, bucket_events};
pub use date::CalendarDate;
pub use error::{DayGridError, DayGridResult};
pub use event::{Event, NewEvent};
pub use grid::{CalendarGrid, build_grid};
pub use search::{PageMeta, PageResult, search};
pub use time_slot::TimeSlot;
pub use view::{DateRange, View};
