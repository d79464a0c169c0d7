//! Error types for the daygrid ecosystem.

use thiserror::Error;

use crate::date::CalendarDate;

/// Errors that can occur in daygrid operations.
#[derive(Error, Debug)]
pub enum DayGridError {
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    #[error("Event '{0}' has no time slot (required for week view)")]
    MissingTimeSlot(String),

    #[error("Invalid pagination: page and limit must be at least 1 (got page={page}, limit={limit})")]
    InvalidPagination { page: i64, limit: i64 },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("Unknown view '{0}'. Expected week, month or year")]
    UnknownView(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DayGridError {
    /// Whether the error came from validating caller input rather than from
    /// the environment (filesystem, config).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DayGridError::InvalidRange { .. }
                | DayGridError::MissingTimeSlot(_)
                | DayGridError::InvalidPagination { .. }
                | DayGridError::InvalidDate(_)
                | DayGridError::UnknownTimeSlot(_)
                | DayGridError::UnknownView(_)
                | DayGridError::InvalidEvent(_)
        )
    }
}

/// Result type alias for daygrid operations.
pub type DayGridResult<T> = Result<T, DayGridError>;
