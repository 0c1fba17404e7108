//! Error types for the data boundary.
//!
//! Interaction handling never fails; errors only arise when events or
//! settings are decoded from the host, or when a grid is laid out for a
//! view it cannot draw.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::view::CalendarView;

/// Errors raised while building calendar data
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Event ends at or before it starts
    #[error("Invalid time range: {start} is not before {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// JSON decoding error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The time grid has no layout for this view
    #[error("View {0:?} has no time grid")]
    UnsupportedView(CalendarView),
}

/// Result type alias for calendar data operations
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors raised while loading or watching calendar settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings decoded but are not usable
    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
