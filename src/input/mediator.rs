//! Interaction mediator.
//!
//! Sits between raw pointer events and the hosting grid. For every event it
//! decides whether to swallow it (cancel and emit a host callback) or let the
//! grid handle it natively. Nothing here returns an error: malformed input
//! degrades to "no resource, no interception".
//!
//! ## Decisions
//!
//! | Region       | Event        | Kind               | Result                                |
//! |--------------|--------------|--------------------|---------------------------------------|
//! | slot / date  | down         | any                | pre-select, then intercept gate       |
//! | slot / date  | click        | any                | closes a swallowed press              |
//! | event body   | down, click  | blocked, available | swallow, `select_event`               |
//! | event body   | context menu | appointment        | swallow, `event_context_menu`         |
//! | event body   | anything     | other              | forward to the grid                   |
//!
//! A swallowed gesture ends on its last event (the click, or the context
//! menu itself). Until then a native callback for it is dropped; after it,
//! native callbacks belong to a new gesture.

use chrono::NaiveDate;

use crate::classify::classify;
use crate::input::pointer::{GridRegion, PointerEvent, PointerKind, SlotSelection};
use crate::input::port::CalendarPort;
use crate::input::preselect::{CellInfo, InteractionContext, ResourcePreselector};
use crate::input::state::{Disposition, GesturePhase};
use crate::perf::DISPATCH_BUDGET_MS;
use crate::profile_scope;
use crate::types::CalendarEvent;
use crate::view::{CalendarView, NavigateAction, ViewControl};

/// Per-calendar interaction handler, generic over the host port.
pub struct InteractionMediator<P: CalendarPort> {
    port: P,
    preselector: ResourcePreselector,
    phase: GesturePhase,
    views: ViewControl,
}

impl<P: CalendarPort> InteractionMediator<P> {
    pub fn new(port: P, views: ViewControl) -> Self {
        Self {
            port,
            preselector: ResourcePreselector::new(),
            phase: GesturePhase::Idle,
            views,
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn preselector(&self) -> &ResourcePreselector {
        &self.preselector
    }

    pub fn views(&self) -> &ViewControl {
        &self.views
    }

    /// Host re-rendered with a new view or date
    pub fn set_views(&mut self, views: ViewControl) {
        self.views = views;
    }

    /// Forget the current gesture
    pub fn end_gesture(&mut self) {
        self.phase.reset();
        self.preselector.clear();
    }

    // ------------------------------------------------------------------------
    // Cells
    // ------------------------------------------------------------------------

    /// Pointer-down on an empty time-slot cell
    pub fn slot_pointer_down(&mut self, cell: &CellInfo, event: &mut PointerEvent) -> Disposition {
        self.cell_pointer_down(cell, event, "time-slot")
    }

    /// Pointer-down on a date cell
    pub fn date_cell_pointer_down(&mut self, cell: &CellInfo, event: &mut PointerEvent) -> Disposition {
        self.cell_pointer_down(cell, event, "date-cell")
    }

    fn cell_pointer_down(
        &mut self,
        cell: &CellInfo,
        event: &mut PointerEvent,
        region: &'static str,
    ) -> Disposition {
        self.end_gesture();
        let context = self.preselector.on_cell_pointer_down(cell).clone();
        self.phase.arm();

        self.port.preselect_resource(context.resource_id.as_ref());
        if self.port.intercept_slot_click(&context) {
            event.swallow();
            self.phase.resolve(Disposition::Swallowed);
            tracing::debug!(region, resource = ?context.resource_id, "cell press intercepted");
            Disposition::Swallowed
        } else {
            self.phase.resolve(Disposition::Forwarded);
            tracing::trace!(region, resource = ?context.resource_id, "cell press forwarded");
            Disposition::Forwarded
        }
    }

    // ------------------------------------------------------------------------
    // Event bodies
    // ------------------------------------------------------------------------

    /// Pointer-down on an event body; starts a new gesture
    pub fn event_pointer_down(&mut self, calendar_event: &CalendarEvent, event: &mut PointerEvent) -> Disposition {
        self.end_gesture();
        self.select_overlay(calendar_event, event)
    }

    /// Click on an event body; continues the gesture its pointer-down began
    /// and ends it when swallowed
    pub fn event_click(&mut self, calendar_event: &CalendarEvent, event: &mut PointerEvent) -> Disposition {
        let disposition = self.select_overlay(calendar_event, event);
        if disposition == Disposition::Swallowed {
            self.end_gesture();
        }
        disposition
    }

    /// Click on a slot or date cell. Closes a gesture whose press was
    /// intercepted, cancelling the click with it.
    pub fn cell_click(&mut self, event: &mut PointerEvent) -> Disposition {
        if !self.phase.is_swallowed() {
            return Disposition::Forwarded;
        }
        event.swallow();
        self.end_gesture();
        Disposition::Swallowed
    }

    /// Blocked and available overlays are swallowed and reported exactly
    /// once per gesture, however many of down/click reach them.
    fn select_overlay(&mut self, calendar_event: &CalendarEvent, event: &mut PointerEvent) -> Disposition {
        let kind = classify(calendar_event);
        if !kind.is_selectable_overlay() {
            if !self.phase.is_swallowed() {
                self.phase.resolve(Disposition::Forwarded);
            }
            return Disposition::Forwarded;
        }

        event.swallow();
        if self.phase.has_selected(calendar_event) {
            tracing::trace!(kind = kind.as_str(), "overlay already selected this gesture");
        } else {
            tracing::debug!(kind = kind.as_str(), "overlay selected");
            self.port.select_event(calendar_event);
        }
        self.phase.resolve_selected(calendar_event);
        Disposition::Swallowed
    }

    /// Context-menu on an event body. Only appointments open a menu, and
    /// opening one ends the gesture.
    pub fn event_context_menu(&mut self, calendar_event: &CalendarEvent, event: &mut PointerEvent) -> Disposition {
        if !classify(calendar_event).has_context_menu() {
            return Disposition::Forwarded;
        }
        event.swallow();
        tracing::debug!(x = event.position.x, y = event.position.y, "appointment context menu");
        self.port.event_context_menu(calendar_event, event.position);
        self.end_gesture();
        Disposition::Swallowed
    }

    /// Route a pointer event by the region it hit.
    ///
    /// Context menus on cells carry no decision and are forwarded.
    pub fn dispatch(&mut self, region: &GridRegion<'_>, event: &mut PointerEvent) -> Disposition {
        profile_scope!("mediator_dispatch", DISPATCH_BUDGET_MS);
        match (region, event.kind) {
            (GridRegion::EventBody(e), PointerKind::Down) => self.event_pointer_down(e, event),
            (GridRegion::EventBody(e), PointerKind::Click) => self.event_click(e, event),
            (GridRegion::EventBody(e), PointerKind::ContextMenu) => self.event_context_menu(e, event),
            (GridRegion::TimeSlot(cell), PointerKind::Down) => self.slot_pointer_down(cell, event),
            (GridRegion::DateCell(cell), PointerKind::Down) => self.date_cell_pointer_down(cell, event),
            (GridRegion::TimeSlot(_) | GridRegion::DateCell(_), PointerKind::Click) => self.cell_click(event),
            (GridRegion::TimeSlot(_) | GridRegion::DateCell(_), PointerKind::ContextMenu) => Disposition::Forwarded,
        }
    }

    // ------------------------------------------------------------------------
    // Native grid callbacks
    // ------------------------------------------------------------------------

    /// The grid selected a slot range on its own.
    ///
    /// Dropped while a swallowed gesture is still open; its own closing
    /// event ends it. Otherwise gated again with the grid's start and
    /// resource, then reported with the pre-selected resource filled in,
    /// and the gesture ends.
    pub fn native_select_slot(&mut self, slot: SlotSelection) {
        if self.phase.is_swallowed() {
            tracing::trace!("slot selection dropped; gesture was swallowed");
            return;
        }

        let gate = InteractionContext {
            resource_id: slot.resource_id.clone(),
            date: Some(slot.start),
        };
        if self.port.intercept_slot_click(&gate) {
            tracing::debug!(resource = ?gate.resource_id, "slot selection intercepted");
            self.end_gesture();
            return;
        }

        let mut slot = slot;
        if slot.resource_id.is_none() {
            slot.resource_id = self.preselector.take().and_then(|c| c.resource_id);
        }
        self.port.select_slot(&slot);
        self.end_gesture();
    }

    /// The grid selected an event on its own. Dropped while a swallowed
    /// gesture is still open, which also covers an overlay already reported.
    pub fn native_select_event(&mut self, calendar_event: &CalendarEvent) {
        if self.phase.is_swallowed() {
            tracing::trace!("event selection dropped; gesture was swallowed");
            return;
        }
        self.port.select_event(calendar_event);
        self.end_gesture();
    }

    // ------------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------------

    /// Drill-down from a day number or header into `view`.
    ///
    /// Gated like a cell press with no resource. If claimed nothing changes;
    /// otherwise the grid default applies: go to the date, then the view.
    pub fn drill_down(&mut self, date: NaiveDate, view: CalendarView) -> Disposition {
        self.end_gesture();
        let context = InteractionContext {
            resource_id: None,
            date: date.and_hms_opt(0, 0, 0),
        };
        if self.port.intercept_slot_click(&context) {
            tracing::debug!(%date, "drill-down intercepted");
            return Disposition::Swallowed;
        }
        self.phase.resolve(Disposition::Forwarded);
        self.port.navigate(date);
        if self.views.allows(view) {
            self.port.change_view(view);
        }
        Disposition::Forwarded
    }

    /// Ask the host to switch view. Views outside `available_views` are
    /// ignored. Returns whether the request was passed on.
    pub fn request_view(&mut self, view: CalendarView) -> bool {
        if !self.views.allows(view) {
            tracing::debug!(?view, "view not available");
            return false;
        }
        if view != self.views.view {
            self.port.change_view(view);
        }
        true
    }

    /// Ask the host to move the anchor date; returns the new date
    pub fn request_navigate(&mut self, action: NavigateAction, today: NaiveDate) -> NaiveDate {
        let date = self.views.view.navigate(self.views.date, action, today);
        self.port.navigate(date);
        date
    }
}
