//! Unit tests for settings persistence and hot reload.

use salon_calendar::error::SettingsError;
use salon_calendar::settings::{CalendarSettings, default_settings_path};
use salon_calendar::settings_watcher::SettingsWatcher;
use salon_calendar::view::CalendarView;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("calendar.json");

    let mut settings = CalendarSettings::default();
    settings.default_view = CalendarView::Week;
    settings.palette.arrived_color = Some("#f59e0b".into());
    settings.save_to(&path).unwrap();

    let loaded = CalendarSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"minTime\": \"06:00\""));
    assert!(raw.contains("\"defaultView\": \"week\""));
}

#[test]
fn test_load_rejects_bad_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calendar.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(CalendarSettings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calendar.json");
    fs::write(&path, r#"{ "stepMinutes": 0 }"#).unwrap();
    assert!(matches!(CalendarSettings::load_from(&path), Err(SettingsError::Invalid(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = CalendarSettings::load_from(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_default_path_ends_with_file_name() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("salon-calendar/calendar.json"));
    }
}

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calendar.json");
    fs::write(&path, "{}").unwrap();

    let watcher = SettingsWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

/// Ignored because file watcher events are timing-dependent and platform
/// specific.
#[test]
#[ignore]
fn test_watcher_reloads_modified_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calendar.json");
    fs::write(&path, "{}").unwrap();
    let mut watcher = SettingsWatcher::new(path.clone()).unwrap();

    fs::write(&path, r#"{ "stepMinutes": 30 }"#).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(500));

    let mut settings = CalendarSettings::default();
    if watcher.reload_into(&mut settings) {
        assert_eq!(settings.step_minutes, 30);
    }
}
