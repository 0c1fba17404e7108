//! Pointer gestures through the interaction mediator.
//!
//! Each test plays one or more complete gestures (pointer-down, click, and
//! the grid's native callback) and checks what the host port observed.

use crate::helpers::{PortCall, RecordingPort, appointment, at, monday, overlay};
use salon_calendar::input::{
    CellInfo, CellRegion, Disposition, InteractionContext, InteractionMediator, PointerEvent, SlotSelection,
};
use salon_calendar::types::{CalendarEvent, Id, OverlayKind, ViewportPoint};
use salon_calendar::view::{CalendarView, NavigateAction, ViewControl};
use serde_json::json;

fn mediator(port: RecordingPort) -> InteractionMediator<RecordingPort> {
    InteractionMediator::new(port, ViewControl::new(CalendarView::Day, monday()))
}

fn slot_cell(resource: i64, hour: u32, minute: u32) -> CellInfo {
    CellInfo::new().with_resource(Id::Number(resource)).at(at(hour, minute))
}

// ============================================================================
// Slot presses and the intercept gate
// ============================================================================

#[test]
fn test_intercepted_slot_press_blocks_native_selection() {
    let mut m = mediator(RecordingPort::intercepting());
    let mut down = PointerEvent::down(10.0, 100.0);

    assert_eq!(m.slot_pointer_down(&slot_cell(3, 10, 0), &mut down), Disposition::Swallowed);
    assert!(down.is_default_prevented());
    assert!(down.is_propagation_stopped());
    assert!(m.phase().is_swallowed());

    m.native_select_slot(SlotSelection::new(at(10, 0), at(10, 15)));
    assert!(m.port().selected_slots().is_empty());
    assert!(m.phase().is_swallowed());

    // The cell's click closes the gesture and is cancelled with it
    let mut click = PointerEvent::click(10.0, 100.0);
    assert_eq!(m.cell_click(&mut click), Disposition::Swallowed);
    assert!(click.is_propagation_stopped());
    assert!(m.phase().is_idle());
}

#[test]
fn test_selection_after_intercepted_press_is_reported() {
    let mut m = mediator(RecordingPort::intercepting());
    m.slot_pointer_down(&slot_cell(3, 10, 0), &mut PointerEvent::down(10.0, 100.0));
    m.cell_click(&mut PointerEvent::click(10.0, 100.0));

    // Later keyboard selection, host no longer claiming slots
    m.port_mut().intercept = false;
    m.native_select_slot(SlotSelection::new(at(14, 0), at(15, 0)).with_resource_id(2));
    assert_eq!(m.port().selected_slots().len(), 1);
}

#[test]
fn test_forwarded_cell_click_is_left_alone() {
    let mut m = mediator(RecordingPort::new());
    m.slot_pointer_down(&slot_cell(3, 10, 0), &mut PointerEvent::down(10.0, 100.0));
    let mut click = PointerEvent::click(10.0, 100.0);
    assert_eq!(m.cell_click(&mut click), Disposition::Forwarded);
    assert!(!click.is_default_prevented());
}

#[test]
fn test_forwarded_slot_press_reaches_host_with_preselected_resource() {
    let mut m = mediator(RecordingPort::new());
    let mut down = PointerEvent::down(10.0, 100.0);

    assert_eq!(m.slot_pointer_down(&slot_cell(3, 10, 0), &mut down), Disposition::Forwarded);
    assert!(!down.is_default_prevented());
    assert!(!down.is_propagation_stopped());

    m.native_select_slot(SlotSelection::new(at(10, 0), at(10, 15)));

    let slots = m.port().selected_slots();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].resource_id, Some(Id::Number(3)));
    assert_eq!(m.port().preselected(), vec![Some(Id::Number(3))]);
}

#[test]
fn test_gate_is_asked_with_captured_context() {
    let mut m = mediator(RecordingPort::new());
    m.slot_pointer_down(&slot_cell(3, 10, 15), &mut PointerEvent::down(0.0, 0.0));

    let expected = InteractionContext {
        resource_id: Some(Id::Number(3)),
        date: Some(at(10, 15)),
    };
    assert_eq!(
        m.port().calls,
        vec![PortCall::Preselect(Some(Id::Number(3))), PortCall::Intercept(expected)]
    );
}

#[test]
fn test_native_resource_is_kept_when_present() {
    let mut m = mediator(RecordingPort::new());
    m.slot_pointer_down(&slot_cell(3, 10, 0), &mut PointerEvent::down(0.0, 0.0));
    m.native_select_slot(SlotSelection::new(at(10, 0), at(10, 15)).with_resource_id(5));

    assert_eq!(m.port().selected_slots()[0].resource_id, Some(Id::Number(5)));
}

#[test]
fn test_native_selection_is_gated_again() {
    let mut m = mediator(RecordingPort::new());
    m.slot_pointer_down(&slot_cell(3, 10, 0), &mut PointerEvent::down(0.0, 0.0));

    // Host changes its mind between pointer-down and the grid's selection
    m.port_mut().intercept = true;
    m.native_select_slot(SlotSelection::new(at(10, 0), at(10, 15)));
    assert!(m.port().selected_slots().is_empty());
}

#[test]
fn test_context_does_not_leak_into_next_gesture() {
    let mut m = mediator(RecordingPort::new());
    m.slot_pointer_down(&slot_cell(3, 10, 0), &mut PointerEvent::down(0.0, 0.0));
    m.native_select_slot(SlotSelection::new(at(10, 0), at(10, 15)));

    // Drag selection with no preceding cell press
    m.native_select_slot(SlotSelection::new(at(11, 0), at(12, 0)));
    let slots = m.port().selected_slots();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].resource_id, None);
}

#[test]
fn test_date_cell_reports_resource_id_not_record() {
    let mut m = mediator(RecordingPort::new());
    let cell = CellInfo::from_props(
        &json!({ "resource": { "resourceId": 7 }, "value": "2025-01-06" }),
        CellRegion::DateCell,
    );
    m.date_cell_pointer_down(&cell, &mut PointerEvent::down(0.0, 0.0));

    assert_eq!(m.port().preselected(), vec![Some(Id::Number(7))]);
    assert_eq!(m.preselector().resource_id(), Some(&Id::Number(7)));
}

#[test]
fn test_unknown_column_preselects_none() {
    let mut m = mediator(RecordingPort::new());
    let cell = CellInfo::from_props(&json!({ "value": 12 }), CellRegion::TimeSlot);
    m.slot_pointer_down(&cell, &mut PointerEvent::down(0.0, 0.0));
    assert_eq!(m.port().preselected(), vec![None]);
}

// ============================================================================
// Event bodies
// ============================================================================

#[test]
fn test_available_click_selects_exactly_once() {
    let mut m = mediator(RecordingPort::new());
    let strip = overlay(OverlayKind::Available, 2, 9, 17);

    let mut down = PointerEvent::down(170.0, 700.0);
    let mut click = PointerEvent::click(170.0, 700.0);
    assert_eq!(m.event_pointer_down(&strip, &mut down), Disposition::Swallowed);

    // The grid never sees the gesture, but a stray native callback is ignored too
    m.native_select_event(&strip);

    assert_eq!(m.event_click(&strip, &mut click), Disposition::Swallowed);
    assert!(click.is_propagation_stopped());
    assert!(m.phase().is_idle());

    assert_eq!(m.port().selected_events(), vec![strip.id().cloned()]);
}

#[test]
fn test_overlay_gesture_does_not_swallow_later_selection() {
    let mut m = mediator(RecordingPort::new());
    let blocked = overlay(OverlayKind::Blocked, 1, 12, 13);
    m.event_pointer_down(&blocked, &mut PointerEvent::down(10.0, 520.0));
    m.event_click(&blocked, &mut PointerEvent::click(10.0, 520.0));

    // Drag selection with no cell press of its own
    m.native_select_slot(SlotSelection::new(at(14, 0), at(15, 0)).with_resource_id(2));
    let slots = m.port().selected_slots();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].resource_id, Some(Id::Number(2)));
}

#[test]
fn test_context_menu_does_not_swallow_later_selection() {
    let mut m = mediator(RecordingPort::new());
    let blocked = overlay(OverlayKind::Blocked, 1, 12, 13);
    let booking: CalendarEvent = appointment(42, 1, 9, 0, 60).into();

    m.event_pointer_down(&blocked, &mut PointerEvent::down(10.0, 520.0));
    m.event_click(&blocked, &mut PointerEvent::click(10.0, 520.0));
    m.event_context_menu(&booking, &mut PointerEvent::context_menu(10.0, 280.0));
    assert!(m.phase().is_idle());

    m.native_select_event(&booking);
    assert_eq!(
        m.port().selected_events(),
        vec![Some(Id::from("blocked-1-12")), Some(Id::Number(42))]
    );
}

#[test]
fn test_blocked_selected_again_on_next_gesture() {
    let mut m = mediator(RecordingPort::new());
    let blocked = overlay(OverlayKind::Blocked, 1, 12, 13);

    for _ in 0..2 {
        m.event_pointer_down(&blocked, &mut PointerEvent::down(10.0, 520.0));
        m.event_click(&blocked, &mut PointerEvent::click(10.0, 520.0));
    }
    assert_eq!(m.port().selected_events().len(), 2);
}

#[test]
fn test_appointment_press_is_left_to_the_grid() {
    let mut m = mediator(RecordingPort::new());
    let booking: CalendarEvent = appointment(42, 1, 9, 0, 60).into();
    let mut down = PointerEvent::down(10.0, 280.0);

    assert_eq!(m.event_pointer_down(&booking, &mut down), Disposition::Forwarded);
    assert!(!down.is_default_prevented());
    assert!(m.port().selected_events().is_empty());

    m.native_select_event(&booking);
    assert_eq!(m.port().selected_events(), vec![Some(Id::Number(42))]);
}

#[test]
fn test_context_menu_only_for_appointments() {
    let mut m = mediator(RecordingPort::new());

    let blocked = overlay(OverlayKind::Blocked, 1, 12, 13);
    let mut menu = PointerEvent::context_menu(10.0, 520.0);
    assert_eq!(m.event_context_menu(&blocked, &mut menu), Disposition::Forwarded);
    assert!(!menu.is_default_prevented());
    assert_eq!(m.port().context_menus(), 0);

    let booking: CalendarEvent = appointment(42, 1, 9, 0, 60).into();
    let mut menu = PointerEvent::context_menu(12.5, 281.0);
    assert_eq!(m.event_context_menu(&booking, &mut menu), Disposition::Swallowed);
    assert!(menu.is_default_prevented());
    assert_eq!(
        m.port().calls.last(),
        Some(&PortCall::ContextMenu(Some(Id::Number(42)), ViewportPoint::new(12.5, 281.0)))
    );
}

#[test]
fn test_unavailable_body_is_never_swallowed() {
    let mut m = mediator(RecordingPort::new());
    let mask = overlay(OverlayKind::Unavailable, 1, 6, 9);
    let mut down = PointerEvent::down(10.0, 100.0);
    assert_eq!(m.event_pointer_down(&mask, &mut down), Disposition::Forwarded);
    assert!(m.port().calls.is_empty());
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_drill_down_navigates_then_changes_view() {
    let mut m = mediator(RecordingPort::new());
    let day = monday().succ_opt().unwrap();

    assert_eq!(m.drill_down(day, CalendarView::Day), Disposition::Forwarded);
    let calls = &m.port().calls;
    assert_eq!(calls[1..], [PortCall::Navigate(day), PortCall::ChangeView(CalendarView::Day)]);
}

#[test]
fn test_intercepted_drill_down_changes_nothing() {
    let mut m = mediator(RecordingPort::intercepting());
    assert_eq!(m.drill_down(monday(), CalendarView::Day), Disposition::Swallowed);
    assert!(
        !m.port()
            .calls
            .iter()
            .any(|c| matches!(c, PortCall::Navigate(_) | PortCall::ChangeView(_)))
    );
}

#[test]
fn test_view_requests_respect_available_views() {
    let views = ViewControl::new(CalendarView::Day, monday())
        .with_available_views(&[CalendarView::Day, CalendarView::Week]);
    let mut m = InteractionMediator::new(RecordingPort::new(), views);

    assert!(!m.request_view(CalendarView::Month));
    assert!(m.request_view(CalendarView::Day));
    assert!(m.port().calls.is_empty());
    assert!(m.request_view(CalendarView::Week));
    assert_eq!(m.port().calls, vec![PortCall::ChangeView(CalendarView::Week)]);
}

#[test]
fn test_navigate_request() {
    let mut m = mediator(RecordingPort::new());
    let next = m.request_navigate(NavigateAction::Next, monday());
    assert_eq!(next, monday().succ_opt().unwrap());
    assert_eq!(m.port().calls, vec![PortCall::Navigate(next)]);
}

#[test]
fn test_port_by_mutable_reference() {
    let mut port = RecordingPort::intercepting();
    {
        let mut m = InteractionMediator::new(&mut port, ViewControl::new(CalendarView::Day, monday()));
        m.slot_pointer_down(&slot_cell(1, 9, 0), &mut PointerEvent::down(0.0, 0.0));
    }
    assert_eq!(port.preselected(), vec![Some(Id::Number(1))]);
}
