//! [`Tracker`] implementations.

use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use police_budget_analytics_models::{AnalyticsEvent, EventName, EventPayload};

use crate::Tracker;

/// Logs each event at debug level under the `analytics` target.
pub struct LogTracker;

impl Tracker for LogTracker {
    fn track(&self, event: EventName, payload: &EventPayload) {
        log::debug!(target: "analytics", "{event} {payload:?}");
    }
}

/// Drops every event.
pub struct NullTracker;

impl Tracker for NullTracker {
    fn track(&self, _event: EventName, _payload: &EventPayload) {}
}

/// Appends one JSON object per event to a file.
///
/// Write failures are logged at warn level and the event is dropped.
pub struct JsonLinesTracker {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesTracker {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path events are written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_event(&self, event: &AnalyticsEvent) -> Result<(), Box<dyn std::error::Error>> {
        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let mut file = self
            .file
            .lock()
            .map_err(|_| "analytics file lock poisoned")?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Tracker for JsonLinesTracker {
    fn track(&self, event: EventName, payload: &EventPayload) {
        let event = AnalyticsEvent {
            name: event,
            payload: payload.clone(),
        };
        if let Err(e) = self.write_event(&event) {
            log::warn!(
                "Dropping analytics event '{}' for {}: {e}",
                event.name,
                self.path.display()
            );
        }
    }
}

/// Keeps every event in memory, in order.
#[derive(Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingTracker {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, event: EventName, payload: &EventPayload) {
        if let Ok(mut events) = self.events.lock() {
            events.push(AnalyticsEvent {
                name: event,
                payload: payload.clone(),
            });
        }
    }
}
