//! Event style resolution.
//!
//! Turns an event plus the host's theme palette into the inline style the
//! grid paints. Resolution is total: every missing colour has a fixed
//! fallback, so any event produces a well-defined style.
//!
//! ## Appointment precedence
//!
//! Status fills are an ordered rule table ([`STATUS_RULES`]) evaluated top
//! down, first match wins:
//!
//! ```text
//! paid       -> #278741            (payment is the terminal state)
//! arrived    -> palette.arrivedColor   (only when configured)
//! confirmed  -> palette.confirmedColor (only when configured)
//! (none)     -> service colour, if any
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::{Appointment, AppointmentDetails, CalendarEvent, InlineStyle, OverlayEvent, OverlayKind};

// ============================================================================
// Theme Palette
// ============================================================================

/// Host-configurable colours. Unset or empty entries fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePalette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrived_color: Option<String>,
}

fn configured(color: &Option<String>) -> Option<&str> {
    color.as_deref().filter(|c| !c.trim().is_empty())
}

impl ThemePalette {
    pub fn blocked_color(&self) -> Option<&str> {
        configured(&self.blocked_color)
    }

    pub fn unavailable_color(&self) -> Option<&str> {
        configured(&self.unavailable_color)
    }

    pub fn available_color(&self) -> Option<&str> {
        configured(&self.available_color)
    }

    pub fn confirmed_color(&self) -> Option<&str> {
        configured(&self.confirmed_color)
    }

    pub fn arrived_color(&self) -> Option<&str> {
        configured(&self.arrived_color)
    }
}

// ============================================================================
// Resolved Style
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Pointer,
}

/// Inline style for one event box, serialized as CSS property names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    pub z_index: i32,
    pub pointer_events: PointerEvents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl EventStyle {
    /// True when the box receives pointer input
    pub fn is_hit_testable(&self) -> bool {
        self.pointer_events == PointerEvents::Auto
    }

    pub fn is_compressed(&self) -> bool {
        self.transform.is_some()
    }

    fn non_interactive() -> Self {
        Self {
            z_index: BACKGROUND_Z_INDEX,
            pointer_events: PointerEvents::None,
            ..Self::default()
        }
    }

    /// Solid fill with white text and a matching border
    fn fill(&mut self, color: &str) {
        self.background_color = Some(color.to_string());
        self.color = Some(ON_FILL_TEXT_COLOR.to_string());
        self.border = Some(solid_border(color));
    }

    /// Caller fields replace computed ones
    fn apply_inline(&mut self, inline: &InlineStyle) {
        if let Some(bg) = &inline.background_color {
            self.background_color = Some(bg.clone());
        }
        if let Some(color) = &inline.color {
            self.color = Some(color.clone());
        }
        if let Some(border) = &inline.border {
            self.border = Some(border.clone());
        }
        if let Some(opacity) = inline.opacity {
            self.opacity = Some(opacity);
        }
    }

    fn compress(&mut self) {
        self.transform = Some(COMPRESS_TRANSFORM.to_string());
        self.transform_origin = Some(COMPRESS_TRANSFORM_ORIGIN.to_string());
        self.padding_top = Some("0px".to_string());
        self.padding_bottom = Some("0px".to_string());
        self.line_height = Some("1".to_string());
    }
}

fn solid_border(color: &str) -> String {
    format!("1px solid {color}")
}

// ============================================================================
// Status Rules
// ============================================================================

/// One entry of the appointment status precedence table.
pub struct StatusRule {
    pub name: &'static str,
    pub applies: fn(&AppointmentDetails) -> bool,
    pub color: fn(&ThemePalette) -> Option<&str>,
}

fn is_paid(details: &AppointmentDetails) -> bool {
    details.is_paid()
}

fn is_arrived(details: &AppointmentDetails) -> bool {
    details.arrived_override
}

fn is_confirmed(details: &AppointmentDetails) -> bool {
    details.confirmed_override
}

fn paid_color(_: &ThemePalette) -> Option<&str> {
    Some(PAID_COLOR)
}

/// Status fills in priority order
pub const STATUS_RULES: [StatusRule; 3] = [
    StatusRule {
        name: "paid",
        applies: is_paid,
        color: paid_color,
    },
    StatusRule {
        name: "arrived",
        applies: is_arrived,
        color: ThemePalette::arrived_color,
    },
    StatusRule {
        name: "confirmed",
        applies: is_confirmed,
        color: ThemePalette::confirmed_color,
    },
];

/// First status rule that applies and has a colour, with that colour.
///
/// A rule whose colour is not configured is skipped, so an arrived booking
/// with no `arrivedColor` can still show as confirmed.
pub fn status_fill<'p>(
    details: &AppointmentDetails,
    palette: &'p ThemePalette,
) -> Option<(&'static str, &'p str)> {
    STATUS_RULES.iter().find_map(|rule| {
        if (rule.applies)(details) {
            (rule.color)(palette).map(|color| (rule.name, color))
        } else {
            None
        }
    })
}

/// Bookings in `(0, 16]` minutes are drawn at half height
pub fn should_compress(duration_minutes: f64) -> bool {
    duration_minutes > 0.0 && duration_minutes <= COMPRESS_MAX_MINUTES
}

// ============================================================================
// Resolvers
// ============================================================================

/// Resolve the foreground style for any event.
pub fn resolve_style(event: &CalendarEvent, palette: &ThemePalette) -> EventStyle {
    match event {
        CalendarEvent::Appointment(appointment) => appointment_style(appointment, palette),
        CalendarEvent::Overlay(overlay) => overlay_style(overlay, palette),
    }
}

fn appointment_style(appointment: &Appointment, palette: &ThemePalette) -> EventStyle {
    let mut style = EventStyle {
        z_index: APPOINTMENT_Z_INDEX,
        pointer_events: PointerEvents::Auto,
        ..EventStyle::default()
    };

    if let Some(service_color) = &appointment.details.service_color {
        style.fill(service_color);
    }
    if let Some((_, color)) = status_fill(&appointment.details, palette) {
        style.fill(color);
    }

    let minutes = (appointment.end - appointment.start).num_milliseconds() as f64 / 60_000.0;
    if should_compress(minutes) {
        style.compress();
    }
    style
}

fn overlay_style(overlay: &OverlayEvent, palette: &ThemePalette) -> EventStyle {
    match overlay.kind {
        OverlayKind::Blocked => EventStyle {
            background_color: Some(palette.blocked_color().unwrap_or(DEFAULT_BLOCKED_COLOR).to_string()),
            color: Some(BLOCKED_TEXT_COLOR.to_string()),
            border: Some(solid_border(
                palette.blocked_color().unwrap_or(DEFAULT_BLOCKED_BORDER_COLOR),
            )),
            opacity: Some(BLOCKED_OPACITY),
            z_index: BLOCKED_Z_INDEX,
            pointer_events: PointerEvents::Auto,
            cursor: Some(Cursor::Pointer),
            ..EventStyle::default()
        },
        OverlayKind::Available => EventStyle {
            background_color: Some(
                palette.available_color().unwrap_or(DEFAULT_AVAILABLE_COLOR).to_string(),
            ),
            border: Some(AVAILABLE_BORDER.to_string()),
            opacity: Some(AVAILABLE_OPACITY),
            z_index: AVAILABLE_Z_INDEX,
            pointer_events: PointerEvents::Auto,
            cursor: Some(Cursor::Pointer),
            ..EventStyle::default()
        },
        OverlayKind::Unavailable | OverlayKind::Background => {
            let mut style = EventStyle {
                background_color: Some(
                    palette.unavailable_color().unwrap_or(DEFAULT_UNAVAILABLE_COLOR).to_string(),
                ),
                border: Some("none".to_string()),
                opacity: Some(BACKGROUND_OPACITY),
                ..EventStyle::non_interactive()
            };
            if let Some(inline) = &overlay.style {
                style.apply_inline(inline);
            }
            style
        }
    }
}

/// Resolve the style for the grid's background-event lane.
///
/// Availability strips and masks drawn in that lane never take pointer
/// input, whatever their kind. A caller style replaces the default fill
/// wholesale. Other kinds get `None`: the grid's own default applies.
pub fn resolve_background_style(event: &CalendarEvent, palette: &ThemePalette) -> Option<EventStyle> {
    let CalendarEvent::Overlay(overlay) = event else {
        return None;
    };
    let default_fill = match overlay.kind {
        OverlayKind::Unavailable => palette.unavailable_color().unwrap_or(DEFAULT_UNAVAILABLE_COLOR),
        OverlayKind::Available | OverlayKind::Background => DEFAULT_AVAILABLE_COLOR,
        OverlayKind::Blocked => return None,
    };

    let mut style = EventStyle::non_interactive();
    match &overlay.style {
        Some(inline) => style.apply_inline(inline),
        None => {
            style.background_color = Some(default_fill.to_string());
            style.opacity = Some(BACKGROUND_OPACITY);
        }
    }
    Some(style)
}
