//! Pointer events and the grid regions they land on.

use chrono::NaiveDateTime;

use crate::input::preselect::CellInfo;
use crate::types::{CalendarEvent, Id, ViewportPoint};

/// Low-level pointer event kinds, in browser dispatch order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Click,
    ContextMenu,
}

/// One pointer event on its way to the hosting grid.
///
/// Mirrors the two cancellation primitives a DOM event offers. Once
/// propagation is stopped the grid must not run its own handling.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: ViewportPoint,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: ViewportPoint) -> Self {
        Self {
            kind,
            position,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, ViewportPoint::new(x, y))
    }

    pub fn click(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Click, ViewportPoint::new(x, y))
    }

    pub fn context_menu(x: f32, y: f32) -> Self {
        Self::new(PointerKind::ContextMenu, ViewportPoint::new(x, y))
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Prevent default and stop propagation
    pub fn swallow(&mut self) {
        self.prevent_default();
        self.stop_propagation();
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// The grid region under the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum GridRegion<'a> {
    /// Body of a drawn event
    EventBody(&'a CalendarEvent),
    /// Empty time-slot cell in a resource column
    TimeSlot(CellInfo),
    /// Date cell in the header band or month grid
    DateCell(CellInfo),
}

/// How a slot selection was made, as reported by the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotAction {
    #[default]
    Click,
    DoubleClick,
    Select,
}

/// The grid's native slot selection.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotSelection {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Often missing; filled from the pre-selected resource when absent
    pub resource_id: Option<Id>,
    pub action: SlotAction,
}

impl SlotSelection {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            resource_id: None,
            action: SlotAction::Click,
        }
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<Id>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_action(mut self, action: SlotAction) -> Self {
        self.action = action;
        self
    }
}
