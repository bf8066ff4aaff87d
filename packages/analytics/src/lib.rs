#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fire-and-forget analytics.
//!
//! The [`Tracker`] trait is handed to the selection state at construction.
//! Tracking never blocks the caller on a result and never fails visibly:
//! every sink swallows its own errors after logging them.

pub mod sinks;

use std::path::PathBuf;
use std::sync::Arc;

use strum_macros::{Display, EnumString};

pub use police_budget_analytics_models::{AnalyticsEvent, EventName, EventPayload};
pub use sinks::{JsonLinesTracker, LogTracker, NullTracker, RecordingTracker};

/// Environment variable selecting the tracker kind.
pub const ANALYTICS_ENV: &str = "POLICE_BUDGET_ANALYTICS";

/// Environment variable holding the output path of the `file` tracker.
pub const ANALYTICS_FILE_ENV: &str = "POLICE_BUDGET_ANALYTICS_FILE";

/// Default output path of the `file` tracker.
pub const DEFAULT_ANALYTICS_FILE: &str = "analytics.jsonl";

/// Errors that can occur while setting up a tracker.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// The output file could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized tracker configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },
}

/// An analytics sink.
///
/// Implementations must not panic and must not report failure to the
/// caller.
pub trait Tracker: Send + Sync {
    /// Records one event.
    fn track(&self, event: EventName, payload: &EventPayload);
}

/// Available tracker implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TrackerKind {
    /// Log events at debug level.
    Log,
    /// Append events to a JSON-lines file.
    File,
    /// Drop events.
    None,
}

/// Creates a tracker of the given kind.
///
/// `file` is only used by [`TrackerKind::File`] and defaults to
/// [`DEFAULT_ANALYTICS_FILE`].
///
/// # Errors
///
/// Returns [`AnalyticsError::Io`] if the `file` tracker cannot open its
/// output.
pub fn create_tracker(
    kind: TrackerKind,
    file: Option<PathBuf>,
) -> Result<Arc<dyn Tracker>, AnalyticsError> {
    let tracker: Arc<dyn Tracker> = match kind {
        TrackerKind::Log => Arc::new(LogTracker),
        TrackerKind::None => Arc::new(NullTracker),
        TrackerKind::File => {
            let path = file.unwrap_or_else(|| PathBuf::from(DEFAULT_ANALYTICS_FILE));
            log::info!("Writing analytics events to {}", path.display());
            Arc::new(JsonLinesTracker::open(path)?)
        }
    };
    Ok(tracker)
}

/// Parses a tracker kind name (`log`, `file`, `none`).
///
/// # Errors
///
/// Returns [`AnalyticsError::Config`] for an unknown name.
pub fn parse_kind(value: &str) -> Result<TrackerKind, AnalyticsError> {
    value
        .trim()
        .parse()
        .map_err(|_| AnalyticsError::Config {
            message: format!("Unknown analytics tracker: {value}. Use 'log', 'file', or 'none'."),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kinds_case_insensitively() {
        assert_eq!(parse_kind("log").unwrap(), TrackerKind::Log);
        assert_eq!(parse_kind(" FILE ").unwrap(), TrackerKind::File);
        assert_eq!(parse_kind("None").unwrap(), TrackerKind::None);
        assert!(matches!(
            parse_kind("woopra"),
            Err(AnalyticsError::Config { .. })
        ));
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in [TrackerKind::Log, TrackerKind::File, TrackerKind::None] {
            assert_eq!(parse_kind(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn create_file_tracker_in_bad_directory_fails() {
        let result = create_tracker(
            TrackerKind::File,
            Some(PathBuf::from("/nonexistent/dir/analytics.jsonl")),
        );
        assert!(matches!(result, Err(AnalyticsError::Io(_))));
    }

    #[test]
    fn create_null_tracker_accepts_events() {
        let tracker = create_tracker(TrackerKind::None, None).unwrap();
        tracker.track(EventName::ViewPage, &EventPayload::new());
    }
}
