//! Event interaction layer for a salon appointment calendar.
//!
//! Classifies calendar events, resolves their paint style, and mediates
//! pointer input between the user and a resource/time grid, calling back
//! into the host page through [`CalendarPort`].
//!
//! ## Modules
//!
//! - `types` - Events, resources and their JSON boundary
//! - `classify` - Event kind and interaction capabilities
//! - `style` - Inline style resolution and status precedence
//! - `input` - Pointer mediation and resource pre-selection
//! - `grid` - Grid layout and hit testing
//! - `view` - Views and date navigation
//! - `settings` / `settings_watcher` - Persisted configuration and hot reload

pub mod classify;
pub mod constants;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod style;
pub mod types;
pub mod view;

pub use classify::{EventKind, classify};
pub use error::{CalendarError, CalendarResult, SettingsError, SettingsResult};
pub use grid::{GridLayout, TimeGrid};
pub use input::{
    CalendarPort, CellInfo, Disposition, GridRegion, InteractionContext, InteractionMediator, PointerEvent,
    SlotSelection,
};
pub use settings::CalendarSettings;
pub use style::{EventStyle, ThemePalette, resolve_background_style, resolve_style};
pub use types::{Appointment, AppointmentDetails, CalendarEvent, Id, OverlayEvent, OverlayKind, Resource};
pub use view::{CalendarView, NavigateAction, ViewControl};
