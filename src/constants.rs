//! Calendar-wide constants.
//!
//! Centralizes the colours, stacking order and grid geometry the
//! interaction layer falls back to when the host leaves a value unset.

// ============================================================================
// Status Colours
// ============================================================================

/// Fill used for appointments whose payment status is `paid`
pub const PAID_COLOR: &str = "#278741";

/// Text colour drawn on top of service/status fills
pub const ON_FILL_TEXT_COLOR: &str = "#ffffff";

// ============================================================================
// Overlay Fallback Colours
// ============================================================================

/// Blocked fill when the palette has no `blockedColor`
pub const DEFAULT_BLOCKED_COLOR: &str = "#e5e7eb";

/// Blocked border when the palette has no `blockedColor`
pub const DEFAULT_BLOCKED_BORDER_COLOR: &str = "#d1d5db";

/// Text colour for blocked overlays
pub const BLOCKED_TEXT_COLOR: &str = "#111827";

/// Available fill when the palette has no `availableColor`
pub const DEFAULT_AVAILABLE_COLOR: &str = "#dbeafe";

/// Border drawn around available overlays
pub const AVAILABLE_BORDER: &str = "1px solid #93c5fd";

/// Unavailable fill when the palette has no `unavailableColor`
pub const DEFAULT_UNAVAILABLE_COLOR: &str = "#e5e7eb";

// ============================================================================
// Stacking & Opacity
// ============================================================================

pub const APPOINTMENT_Z_INDEX: i32 = 10;
pub const BLOCKED_Z_INDEX: i32 = 5;
pub const AVAILABLE_Z_INDEX: i32 = 2;
pub const BACKGROUND_Z_INDEX: i32 = 1;

pub const BLOCKED_OPACITY: f32 = 0.9;
pub const AVAILABLE_OPACITY: f32 = 0.8;
pub const BACKGROUND_OPACITY: f32 = 0.5;

// ============================================================================
// Short-Booking Compression
// ============================================================================

/// Bookings at or under this many minutes are drawn at half height
pub const COMPRESS_MAX_MINUTES: f64 = 16.0;

pub const COMPRESS_TRANSFORM: &str = "scaleY(0.5)";
pub const COMPRESS_TRANSFORM_ORIGIN: &str = "top left";

// ============================================================================
// Grid Defaults
// ============================================================================

/// First visible hour of the time grid (wall clock)
pub const DEFAULT_MIN_HOUR: u32 = 6;

/// Last visible hour of the time grid (wall clock)
pub const DEFAULT_MAX_HOUR: u32 = 22;

/// Minutes per selectable slot
pub const DEFAULT_STEP_MINUTES: u32 = 15;

/// Slots grouped under one time-gutter label
pub const DEFAULT_TIMESLOTS: u32 = 4;

/// Height of one slot row in pixels
pub const DEFAULT_SLOT_HEIGHT: f32 = 20.0;

/// Width of one resource/day column in pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 160.0;

/// Height of the date-cell header band in pixels
pub const DEFAULT_HEADER_HEIGHT: f32 = 32.0;

/// Settings file name under the platform config directory
pub const SETTINGS_DIR_NAME: &str = "salon-calendar";
pub const SETTINGS_FILE_NAME: &str = "calendar.json";
