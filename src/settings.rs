//! Calendar settings.
//!
//! Palette, visible time window, slot geometry and view options, stored as
//! camelCase JSON. Missing fields take the defaults below, so an empty `{}`
//! file is valid.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{SettingsError, SettingsResult};
use crate::style::ThemePalette;
use crate::view::CalendarView;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarSettings {
    pub palette: ThemePalette,
    /// First visible wall-clock time
    #[serde(with = "hh_mm")]
    pub min_time: NaiveTime,
    /// End of the visible window (exclusive)
    #[serde(with = "hh_mm")]
    pub max_time: NaiveTime,
    pub step_minutes: u32,
    /// Slot rows grouped under one time-gutter label
    pub timeslots: u32,
    pub default_view: CalendarView,
    pub available_views: Vec<CalendarView>,
    pub slot_height: f32,
    pub column_width: f32,
    pub header_height: f32,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            palette: ThemePalette::default(),
            min_time: NaiveTime::from_hms_opt(DEFAULT_MIN_HOUR, 0, 0).unwrap_or_default(),
            max_time: NaiveTime::from_hms_opt(DEFAULT_MAX_HOUR, 0, 0).unwrap_or_default(),
            step_minutes: DEFAULT_STEP_MINUTES,
            timeslots: DEFAULT_TIMESLOTS,
            default_view: CalendarView::Day,
            available_views: CalendarView::ALL.to_vec(),
            slot_height: DEFAULT_SLOT_HEIGHT,
            column_width: DEFAULT_COLUMN_WIDTH,
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

/// `<config dir>/salon-calendar/calendar.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl CalendarSettings {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load calendar settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a settings file
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.min_time >= self.max_time {
            return Err(SettingsError::Invalid(format!(
                "minTime {} must be before maxTime {}",
                self.min_time, self.max_time
            )));
        }
        if self.step_minutes == 0 || self.timeslots == 0 {
            return Err(SettingsError::Invalid(
                "stepMinutes and timeslots must be positive".into(),
            ));
        }
        if self.available_views.is_empty() {
            return Err(SettingsError::Invalid("availableViews is empty".into()));
        }
        if !self.available_views.contains(&self.default_view) {
            return Err(SettingsError::Invalid(format!(
                "defaultView {:?} is not in availableViews",
                self.default_view
            )));
        }
        let positive = |d: f32| d.is_finite() && d > 0.0;
        if !positive(self.slot_height)
            || !positive(self.column_width)
            || !self.header_height.is_finite()
            || self.header_height < 0.0
        {
            return Err(SettingsError::Invalid("grid dimensions must be positive".into()));
        }
        Ok(())
    }

    /// Number of slot rows in the visible window
    pub fn slot_count(&self) -> u32 {
        let minutes = (self.max_time - self.min_time).num_minutes().max(0) as u32;
        minutes.div_ceil(self.step_minutes.max(1))
    }
}

/// `"HH:MM"` or `"HH:MM:SS"`
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M:%S"))
            .map_err(|_| de::Error::custom(format!("invalid time of day: {text}")))
    }
}
