//! Event classification.
//!
//! Every calendar entry is one of five kinds, and each kind carries its own
//! interactivity rules. Classification is a pure function of the host's
//! `type` discriminant.

use serde::{Deserialize, Serialize};

use crate::types::{CalendarEvent, OverlayKind};

/// Logical kind of a calendar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Appointment,
    Available,
    Unavailable,
    Blocked,
    Background,
}

impl EventKind {
    /// Map the host's `type` string to a kind.
    ///
    /// Missing or unrecognised tags become `Appointment`, the richest and
    /// most constrained kind. This fails open: a new overlay type added by
    /// the host gets full appointment interactivity until it is taught here.
    pub fn from_type_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("available") => EventKind::Available,
            Some("unavailable") => EventKind::Unavailable,
            Some("blocked") => EventKind::Blocked,
            Some("background") => EventKind::Background,
            _ => EventKind::Appointment,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Appointment => "appointment",
            EventKind::Available => "available",
            EventKind::Unavailable => "unavailable",
            EventKind::Blocked => "blocked",
            EventKind::Background => "background",
        }
    }

    /// The overlay kind, or `None` for appointments
    pub fn overlay(self) -> Option<OverlayKind> {
        match self {
            EventKind::Appointment => None,
            EventKind::Available => Some(OverlayKind::Available),
            EventKind::Unavailable => Some(OverlayKind::Unavailable),
            EventKind::Blocked => Some(OverlayKind::Blocked),
            EventKind::Background => Some(OverlayKind::Background),
        }
    }

    /// Synthetic overlays the grid cannot select natively; pointer
    /// interaction on them is always swallowed and routed to selection.
    pub fn is_selectable_overlay(self) -> bool {
        matches!(self, EventKind::Blocked | EventKind::Available)
    }

    /// Only appointments open a context menu
    pub fn has_context_menu(self) -> bool {
        self == EventKind::Appointment
    }

    /// False for layers drawn with `pointer-events: none`
    pub fn is_interactive(self) -> bool {
        !matches!(self, EventKind::Unavailable | EventKind::Background)
    }
}

impl From<OverlayKind> for EventKind {
    fn from(kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Available => EventKind::Available,
            OverlayKind::Unavailable => EventKind::Unavailable,
            OverlayKind::Blocked => EventKind::Blocked,
            OverlayKind::Background => EventKind::Background,
        }
    }
}

/// Classify a calendar entry
pub fn classify(event: &CalendarEvent) -> EventKind {
    match event {
        CalendarEvent::Appointment(_) => EventKind::Appointment,
        CalendarEvent::Overlay(overlay) => overlay.kind.into(),
    }
}
