//! Unit tests for the event data boundary and classification.

use salon_calendar::classify::{EventKind, classify};
use salon_calendar::error::CalendarError;
use salon_calendar::types::{CalendarEvent, Id, OverlayKind, events_from_json, events_from_value_lenient};
use serde_json::json;

#[test]
fn test_host_event_list_decodes_every_kind() {
    let events = events_from_json(
        r##"[
            { "type": "appointment", "id": 1, "title": "Cut", "start": "2025-01-06T10:00:00", "end": "2025-01-06T10:30:00", "resourceId": 3 },
            { "type": "available", "id": "available-3", "start": "2025-01-06T09:00:00", "end": "2025-01-06T17:00:00", "resourceId": 3 },
            { "type": "unavailable", "start": "2025-01-06T06:00:00", "end": "2025-01-06T09:00:00" },
            { "type": "blocked", "id": "blocked-12", "start": "2025-01-06T12:00:00", "end": "2025-01-06T13:00:00" },
            { "type": "background", "start": "2025-01-06T06:00:00", "end": "2025-01-06T22:00:00" }
        ]"##,
    )
    .unwrap();

    let kinds: Vec<_> = events.iter().map(classify).collect();
    assert_eq!(
        kinds,
        [
            EventKind::Appointment,
            EventKind::Available,
            EventKind::Unavailable,
            EventKind::Blocked,
            EventKind::Background
        ]
    );
    assert_eq!(events[0].resource_id(), Some(&Id::Number(3)));
    assert_eq!(events[1].id(), Some(&Id::Text("available-3".into())));
}

#[test]
fn test_unknown_type_fails_open_to_appointment() {
    for tag in [json!("holiday"), json!(null)] {
        let event: CalendarEvent = serde_json::from_value(json!({
            "type": tag,
            "start": "2025-01-06T10:00:00",
            "end": "2025-01-06T10:30:00",
        }))
        .unwrap();
        assert_eq!(classify(&event), EventKind::Appointment);
    }

    let untyped: CalendarEvent =
        serde_json::from_value(json!({ "start": "2025-01-06T10:00:00", "end": "2025-01-06T10:30:00" })).unwrap();
    assert_eq!(classify(&untyped), EventKind::Appointment);
}

#[test]
fn test_inverted_range_is_rejected() {
    let result = events_from_json(r#"[{ "start": "2025-01-06T11:00:00", "end": "2025-01-06T10:00:00" }]"#);
    assert!(matches!(result, Err(CalendarError::Json(_))));
}

#[test]
fn test_lenient_decode_skips_bad_entries() {
    let events = events_from_value_lenient(&json!([
        { "type": "blocked", "start": "2025-01-06T12:00:00", "end": "2025-01-06T13:00:00" },
        { "type": "blocked", "start": "not a date", "end": "2025-01-06T13:00:00" },
        { "type": "blocked", "start": "2025-01-06T13:00:00", "end": "2025-01-06T12:00:00" },
        42,
    ]));
    assert_eq!(events.len(), 1);
    assert!(events_from_value_lenient(&json!({ "not": "a list" })).is_empty());
}

#[test]
fn test_appointment_payload_is_read_leniently() {
    let event: CalendarEvent = serde_json::from_value(json!({
        "type": "appointment",
        "start": "2025-01-06T10:00:00",
        "end": "2025-01-06T10:30:00",
        "resource": { "paymentStatus": "Paid", "confirmedOverride": "yes", "arrivedOverride": true, "serviceColor": 7 },
    }))
    .unwrap();
    let details = &event.as_appointment().unwrap().details;
    assert!(details.is_paid());
    assert!(!details.confirmed_override);
    assert!(details.arrived_override);
    assert_eq!(details.service_color.as_deref(), Some("7"));
}

#[test]
fn test_overlay_payload_is_kept_opaque() {
    let schedule = json!({ "staffId": 3, "shift": "morning" });
    let event: CalendarEvent = serde_json::from_value(json!({
        "type": "available",
        "start": "2025-01-06T09:00:00",
        "end": "2025-01-06T13:00:00",
        "resource": schedule,
    }))
    .unwrap();
    match event {
        CalendarEvent::Overlay(overlay) => {
            assert_eq!(overlay.kind, OverlayKind::Available);
            assert_eq!(overlay.payload, Some(schedule));
        }
        other => panic!("expected overlay, got {other:?}"),
    }
}

#[test]
fn test_epoch_millis_and_offsets_are_wall_clock() {
    let event: CalendarEvent = serde_json::from_value(json!({
        "start": "2025-01-06T10:00:00+02:00",
        "end": 1_736_161_200_000_i64,
    }))
    .unwrap();
    assert_eq!(event.start().to_string(), "2025-01-06 10:00:00");
    assert_eq!(event.end().to_string(), "2025-01-06 11:00:00");
}

#[test]
fn test_events_serialize_back_to_host_shape() {
    let events = events_from_json(
        r#"[{ "type": "blocked", "id": "blocked-1", "start": "2025-01-06T12:00:00", "end": "2025-01-06T13:00:00" }]"#,
    )
    .unwrap();
    let value = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(value["type"], "blocked");
    assert_eq!(value["start"], "2025-01-06T12:00:00");
    assert!(value.get("resource").is_none());
}
