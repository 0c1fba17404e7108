//! Hot reload for the calendar settings file.
//!
//! Watches the file's parent directory so a settings file created after
//! startup is picked up. Hosts call [`SettingsWatcher::poll`] from their own
//! loop; nothing here spawns threads beyond the platform watcher.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use crate::error::SettingsResult;
use crate::settings::CalendarSettings;

/// Change to the watched settings file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

impl SettingsEvent {
    fn from_kind(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(_) => Some(Self::Created),
            EventKind::Modify(_) => Some(Self::Modified),
            EventKind::Remove(_) => Some(Self::Deleted),
            _ => None,
        }
    }
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<SettingsEvent>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let (tx, rx) = channel();
        let target = path.clone();
        let file_name = target.file_name().map(ToOwned::to_owned);

        let mut watcher = recommended_watcher(move |result: notify::Result<Event>| match result {
            Ok(event) => {
                let touches_file = event
                    .paths
                    .iter()
                    .any(|p| p == &target || p.file_name().map(ToOwned::to_owned) == file_name);
                if !touches_file {
                    return;
                }
                if let Some(change) = SettingsEvent::from_kind(&event.kind) {
                    let _ = tx.send(change);
                }
            }
            Err(error) => {
                let _ = tx.send(SettingsEvent::Error(error.to_string()));
            }
        })?;

        let watch_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching calendar settings at {}", path.display());

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Latest pending change, draining older ones. Editors often emit
    /// several events per save.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(event) => latest = Some(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }

    /// Apply a pending change to `settings`.
    ///
    /// Returns true when `settings` was replaced. A file that fails to load
    /// or validate keeps the previous settings.
    pub fn reload_into(&mut self, settings: &mut CalendarSettings) -> bool {
        match self.poll() {
            Some(SettingsEvent::Created | SettingsEvent::Modified) => {
                match CalendarSettings::load_from(&self.path) {
                    Ok(loaded) => {
                        tracing::info!("Calendar settings reloaded");
                        *settings = loaded;
                        true
                    }
                    Err(e) => {
                        tracing::warn!("Keeping previous calendar settings: {}", e);
                        false
                    }
                }
            }
            Some(SettingsEvent::Deleted) => {
                tracing::warn!("Calendar settings file deleted");
                false
            }
            Some(SettingsEvent::Error(e)) => {
                tracing::error!("Settings watch error: {}", e);
                false
            }
            None => false,
        }
    }
}
