//! Gesture state machine.
//!
//! One cycle per pointer gesture; nothing survives into the next gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Armed      (pointer-down on a slot or date cell, context captured)
//! Armed    -> Resolved   (intercept gate answered: swallowed or forwarded)
//! Idle     -> Resolved   (pointer-down / click / context-menu on an event body)
//! Resolved -> Idle       (native selection consumed, swallowed click or
//!                         context menu handled, or next gesture begins)
//! ```

use crate::types::CalendarEvent;

/// What happened to a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Default prevented and propagation stopped; the grid never sees it
    Swallowed,
    /// Left alone for the grid's own handling
    Forwarded,
}

/// Outcome of a resolved gesture
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub disposition: Disposition,
    /// Event already reported through `select_event` during this gesture
    pub selected: Option<CalendarEvent>,
}

/// Phase of the current pointer gesture
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Interaction context captured, gate not yet asked
    Armed,
    Resolved(Resolution),
}

impl GesturePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed)
    }

    /// Returns true if this gesture was swallowed
    pub fn is_swallowed(&self) -> bool {
        matches!(
            self,
            Self::Resolved(Resolution {
                disposition: Disposition::Swallowed,
                ..
            })
        )
    }

    /// Returns true if `event` was already reported in this gesture
    pub fn has_selected(&self, event: &CalendarEvent) -> bool {
        match self {
            Self::Resolved(Resolution {
                selected: Some(selected),
                ..
            }) => selected == event,
            _ => false,
        }
    }

    pub fn disposition(&self) -> Option<Disposition> {
        match self {
            Self::Resolved(resolution) => Some(resolution.disposition),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn arm(&mut self) {
        *self = Self::Armed;
    }

    pub fn resolve(&mut self, disposition: Disposition) {
        *self = Self::Resolved(Resolution {
            disposition,
            selected: None,
        });
    }

    /// Resolve as swallowed, remembering the event handed to `select_event`
    pub fn resolve_selected(&mut self, event: &CalendarEvent) {
        *self = Self::Resolved(Resolution {
            disposition: Disposition::Swallowed,
            selected: Some(event.clone()),
        });
    }
}
