//! Pointer input handling for the calendar grid.
//!
//! This module decides, per pointer event, which logical action a press on
//! the calendar triggers, before the hosting grid's own handling runs.
//!
//! ## Architecture
//!
//! The grid reports three regions: time-slot cells, date cells and event
//! bodies. Pointer-down on a cell captures which resource and date the
//! gesture started on; the [`InteractionMediator`] then either swallows the
//! event and calls the host through [`CalendarPort`], or forwards it so the
//! grid selects natively. An explicit [`GesturePhase`] tracks the one gesture
//! in flight.
//!
//! ## Modules
//!
//! - `pointer` - Pointer events, grid regions and native slot selections
//! - `preselect` - Resource extraction and the per-gesture interaction context
//! - `state` - Gesture state machine
//! - `port` - Host callback interface
//! - `mediator` - Decision logic tying the above together

mod mediator;
mod pointer;
mod port;
mod preselect;
mod state;

pub use mediator::InteractionMediator;
pub use pointer::{GridRegion, PointerEvent, PointerKind, SlotAction, SlotSelection};
pub use port::CalendarPort;
pub use preselect::{CellInfo, CellRegion, InteractionContext, ResourcePreselector, ResourceRef};
pub use state::{Disposition, GesturePhase, Resolution};
