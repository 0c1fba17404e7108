//! Core types for the calendar interaction layer.
//!
//! This module defines the events, resources and coordinates the layer reads.
//! Events arrive from the host in a loose JSON shape (a `type` string plus an
//! untyped `resource` payload); they are decoded once into [`CalendarEvent`]
//! so the rest of the crate works with a closed sum type.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

use crate::classify::EventKind;
use crate::error::{CalendarError, CalendarResult};

// ============================================================================
// Identifiers
// ============================================================================

/// Event or resource identifier.
///
/// Staff columns use numeric ids; synthetic overlays use text ids such as
/// `blocked-12-2025-01-06`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Id {
    /// Lenient read of an id from an untyped JSON value.
    ///
    /// Integral floats are accepted since JavaScript hosts have no integer type.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Id::Number),
            Value::String(s) => Some(Id::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

// ============================================================================
// Resources & Coordinates
// ============================================================================

/// A bookable column in the grid, typically a staff member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub resource_id: Id,
    pub resource_title: String,
}

impl Resource {
    pub fn new(resource_id: impl Into<Id>, resource_title: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            resource_title: resource_title.into(),
        }
    }
}

/// Pointer position in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportPoint {
    pub x: f32,
    pub y: f32,
}

impl ViewportPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Wall-clock parsing
// ============================================================================

const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a host timestamp into wall-clock time.
///
/// Accepts RFC 3339 (the offset is kept as local wall clock), naive ISO
/// date-times and bare dates (midnight). Returns `None` for anything else.
pub fn parse_wall_clock(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Lenient read of a timestamp from an untyped JSON value
pub fn wall_clock_from_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_wall_clock(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

pub(crate) mod wall_clock {
    use super::{WALL_CLOCK_FORMAT, parse_wall_clock};
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Millis(i64),
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(WALL_CLOCK_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Text(text) => parse_wall_clock(&text),
            Repr::Millis(ms) => DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc()),
        };
        parsed.ok_or_else(|| de::Error::custom("expected an ISO-8601 date-time or epoch milliseconds"))
    }

    pub mod option {
        use super::super::WALL_CLOCK_FORMAT;
        use chrono::NaiveDateTime;
        use serde::Serializer;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.collect_str(&v.format(WALL_CLOCK_FORMAT)),
                None => serializer.serialize_none(),
            }
        }
    }
}

fn check_range(start: NaiveDateTime, end: NaiveDateTime) -> CalendarResult<()> {
    if start < end {
        Ok(())
    } else {
        Err(CalendarError::InvalidRange { start, end })
    }
}

// ============================================================================
// Appointments
// ============================================================================

/// Business state carried by an appointment's `resource` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentDetails {
    /// Colour of the booked service, used as the base fill
    pub service_color: Option<String>,
    pub payment_status: Option<String>,
    /// Front desk marked the booking confirmed in this session
    pub confirmed_override: bool,
    /// Front desk marked the client arrived in this session
    pub arrived_override: bool,
}

impl AppointmentDetails {
    /// Read the business fields out of a host payload.
    ///
    /// Anything missing or of the wrong shape falls back to the default.
    /// Override flags only count when they are literally `true`.
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            service_color: payload
                .get("serviceColor")
                .and_then(scalar_text)
                .filter(|c| !c.is_empty()),
            payment_status: payload.get("paymentStatus").and_then(scalar_text),
            confirmed_override: payload.get("confirmedOverride") == Some(&Value::Bool(true)),
            arrived_override: payload.get("arrivedOverride") == Some(&Value::Bool(true)),
        }
    }

    fn to_payload(&self) -> Value {
        let mut payload = json!({
            "confirmedOverride": self.confirmed_override,
            "arrivedOverride": self.arrived_override,
        });
        if let Some(color) = &self.service_color {
            payload["serviceColor"] = Value::String(color.clone());
        }
        if let Some(status) = &self.payment_status {
            payload["paymentStatus"] = Value::String(status.clone());
        }
        payload
    }

    pub fn with_service_color(mut self, color: impl Into<String>) -> Self {
        self.service_color = Some(color.into());
        self
    }

    pub fn with_payment_status(mut self, status: impl Into<String>) -> Self {
        self.payment_status = Some(status.into());
        self
    }

    pub fn confirmed(mut self) -> Self {
        self.confirmed_override = true;
        self
    }

    pub fn arrived(mut self) -> Self {
        self.arrived_override = true;
        self
    }

    /// Payment status equals `paid`, ignoring case
    pub fn is_paid(&self) -> bool {
        self.payment_status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("paid"))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A booked appointment.
#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    /// Missing only when an untyped host entry fell back to appointment
    pub id: Option<Id>,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: Option<Id>,
    pub details: AppointmentDetails,
}

impl Appointment {
    pub fn new(
        id: impl Into<Id>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> CalendarResult<Self> {
        check_range(start, end)?;
        Ok(Self {
            id: Some(id.into()),
            title: title.into(),
            start,
            end,
            resource_id: None,
            details: AppointmentDetails::default(),
        })
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<Id>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_details(mut self, details: AppointmentDetails) -> Self {
        self.details = details;
        self
    }
}

// ============================================================================
// Overlays
// ============================================================================

/// The four non-appointment event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Available,
    Unavailable,
    Blocked,
    Background,
}

/// Caller-supplied inline style on an overlay; always wins over defaults
/// on non-interactive layers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

/// Availability strip, unavailability mask, blocked time or plain background.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayEvent {
    pub kind: OverlayKind,
    pub id: Option<Id>,
    pub title: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: Option<Id>,
    pub style: Option<InlineStyle>,
    /// Opaque host record (e.g. the staff schedule), handed back on selection
    pub payload: Option<Value>,
}

impl OverlayEvent {
    pub fn new(kind: OverlayKind, start: NaiveDateTime, end: NaiveDateTime) -> CalendarResult<Self> {
        check_range(start, end)?;
        Ok(Self {
            kind,
            id: None,
            title: None,
            start,
            end,
            resource_id: None,
            style: None,
            payload: None,
        })
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<Id>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

// ============================================================================
// CalendarEvent
// ============================================================================

/// Any entry drawn on the calendar.
///
/// Deserializes from the host's JSON shape. A missing or unrecognised
/// `type` becomes an [`Appointment`]; see [`EventKind::from_type_tag`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub enum CalendarEvent {
    Appointment(Appointment),
    Overlay(OverlayEvent),
}

impl CalendarEvent {
    pub fn start(&self) -> NaiveDateTime {
        match self {
            CalendarEvent::Appointment(a) => a.start,
            CalendarEvent::Overlay(o) => o.start,
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        match self {
            CalendarEvent::Appointment(a) => a.end,
            CalendarEvent::Overlay(o) => o.end,
        }
    }

    pub fn id(&self) -> Option<&Id> {
        match self {
            CalendarEvent::Appointment(a) => a.id.as_ref(),
            CalendarEvent::Overlay(o) => o.id.as_ref(),
        }
    }

    pub fn resource_id(&self) -> Option<&Id> {
        match self {
            CalendarEvent::Appointment(a) => a.resource_id.as_ref(),
            CalendarEvent::Overlay(o) => o.resource_id.as_ref(),
        }
    }

    /// Length in fractional minutes
    pub fn duration_minutes(&self) -> f64 {
        (self.end() - self.start()).num_milliseconds() as f64 / 60_000.0
    }

    /// True if `at` falls in `[start, end)`
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start() <= at && at < self.end()
    }

    pub fn as_appointment(&self) -> Option<&Appointment> {
        match self {
            CalendarEvent::Appointment(a) => Some(a),
            CalendarEvent::Overlay(_) => None,
        }
    }
}

impl From<Appointment> for CalendarEvent {
    fn from(appointment: Appointment) -> Self {
        CalendarEvent::Appointment(appointment)
    }
}

impl From<OverlayEvent> for CalendarEvent {
    fn from(overlay: OverlayEvent) -> Self {
        CalendarEvent::Overlay(overlay)
    }
}

/// Wire shape of a host event.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(with = "wall_clock")]
    start: NaiveDateTime,
    #[serde(with = "wall_clock")]
    end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<InlineStyle>,
}

impl TryFrom<RawEvent> for CalendarEvent {
    type Error = CalendarError;

    fn try_from(raw: RawEvent) -> CalendarResult<Self> {
        check_range(raw.start, raw.end)?;
        let event = match EventKind::from_type_tag(raw.kind.as_deref()).overlay() {
            None => CalendarEvent::Appointment(Appointment {
                id: raw.id,
                title: raw.title.unwrap_or_default(),
                start: raw.start,
                end: raw.end,
                resource_id: raw.resource_id,
                details: raw
                    .resource
                    .as_ref()
                    .map(AppointmentDetails::from_payload)
                    .unwrap_or_default(),
            }),
            Some(kind) => CalendarEvent::Overlay(OverlayEvent {
                kind,
                id: raw.id,
                title: raw.title,
                start: raw.start,
                end: raw.end,
                resource_id: raw.resource_id,
                style: raw.style,
                payload: raw.resource,
            }),
        };
        Ok(event)
    }
}

impl From<CalendarEvent> for RawEvent {
    fn from(event: CalendarEvent) -> Self {
        match event {
            CalendarEvent::Appointment(a) => RawEvent {
                kind: Some(EventKind::Appointment.as_str().to_string()),
                id: a.id,
                title: Some(a.title),
                start: a.start,
                end: a.end,
                resource_id: a.resource_id,
                resource: Some(a.details.to_payload()),
                style: None,
            },
            CalendarEvent::Overlay(o) => RawEvent {
                kind: Some(EventKind::from(o.kind).as_str().to_string()),
                id: o.id,
                title: o.title,
                start: o.start,
                end: o.end,
                resource_id: o.resource_id,
                resource: o.payload,
                style: o.style,
            },
        }
    }
}

/// Decode a JSON array of host events, failing on the first bad entry.
pub fn events_from_json(json: &str) -> CalendarResult<Vec<CalendarEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode host events, dropping entries that cannot be drawn.
///
/// A malformed entry must never take the whole calendar down, so bad
/// entries are skipped and only traced.
pub fn events_from_value_lenient(value: &Value) -> Vec<CalendarEvent> {
    let Some(entries) = value.as_array() else {
        tracing::trace!("event list is not an array; rendering nothing");
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match CalendarEvent::deserialize(entry) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::trace!(error = %e, "skipping undrawable event");
                None
            }
        })
        .collect()
}
