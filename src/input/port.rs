//! The host-facing port.
//!
//! Everything the interaction layer does to the outside world goes through
//! [`CalendarPort`]. The host page implements it; every method defaults to a
//! no-op so a host only wires what it handles.

use chrono::NaiveDate;

use crate::input::pointer::SlotSelection;
use crate::input::preselect::InteractionContext;
use crate::types::{CalendarEvent, Id, ViewportPoint};
use crate::view::CalendarView;

/// Callbacks into the page that renders the calendar.
pub trait CalendarPort {
    /// An event was selected.
    ///
    /// Fires for blocked/available overlays straight from the pointer
    /// handlers, and for everything else when the grid selects natively.
    fn select_event(&mut self, _event: &CalendarEvent) {}

    /// An empty slot range was selected and no interception claimed it.
    /// `slot.resource_id` is already filled from the pre-selection.
    fn select_slot(&mut self, _slot: &SlotSelection) {}

    /// Pointer-down landed on a cell; `None` when the column is unknown.
    fn preselect_resource(&mut self, _resource_id: Option<&Id>) {}

    /// Gate for slot and date-cell presses and drill-downs.
    ///
    /// Return `true` to claim the gesture: the pointer event is cancelled and
    /// the grid's own selection never fires. The default `false` lets the
    /// grid proceed.
    fn intercept_slot_click(&mut self, _context: &InteractionContext) -> bool {
        false
    }

    /// Right-click on an appointment, at viewport coordinates
    fn event_context_menu(&mut self, _event: &CalendarEvent, _position: ViewportPoint) {}

    /// Switch to another view; the host applies it
    fn change_view(&mut self, _view: CalendarView) {}

    /// Move the anchor date; the host applies it
    fn navigate(&mut self, _date: NaiveDate) {}
}

impl<P: CalendarPort + ?Sized> CalendarPort for &mut P {
    fn select_event(&mut self, event: &CalendarEvent) {
        (**self).select_event(event)
    }

    fn select_slot(&mut self, slot: &SlotSelection) {
        (**self).select_slot(slot)
    }

    fn preselect_resource(&mut self, resource_id: Option<&Id>) {
        (**self).preselect_resource(resource_id)
    }

    fn intercept_slot_click(&mut self, context: &InteractionContext) -> bool {
        (**self).intercept_slot_click(context)
    }

    fn event_context_menu(&mut self, event: &CalendarEvent, position: ViewportPoint) {
        (**self).event_context_menu(event, position)
    }

    fn change_view(&mut self, view: CalendarView) {
        (**self).change_view(view)
    }

    fn navigate(&mut self, date: NaiveDate) {
        (**self).navigate(date)
    }
}

impl<P: CalendarPort + ?Sized> CalendarPort for Box<P> {
    fn select_event(&mut self, event: &CalendarEvent) {
        (**self).select_event(event)
    }

    fn select_slot(&mut self, slot: &SlotSelection) {
        (**self).select_slot(slot)
    }

    fn preselect_resource(&mut self, resource_id: Option<&Id>) {
        (**self).preselect_resource(resource_id)
    }

    fn intercept_slot_click(&mut self, context: &InteractionContext) -> bool {
        (**self).intercept_slot_click(context)
    }

    fn event_context_menu(&mut self, event: &CalendarEvent, position: ViewportPoint) {
        (**self).event_context_menu(event, position)
    }

    fn change_view(&mut self, view: CalendarView) {
        (**self).change_view(view)
    }

    fn navigate(&mut self, date: NaiveDate) {
        (**self).navigate(date)
    }
}
