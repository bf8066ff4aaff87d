//! Run-time configuration from command-line flags and the environment.
//!
//! Flags win over environment variables, which win over the defaults
//! (bundled dataset, `log` analytics).

use std::path::PathBuf;
use std::sync::Arc;

use police_budget_analytics::{
    ANALYTICS_ENV, ANALYTICS_FILE_ENV, AnalyticsError, Tracker, TrackerKind, create_tracker,
    parse_kind,
};
use police_budget_dataset::{Dataset, DatasetError};

/// Environment variable pointing at a dataset directory.
pub const DATA_DIR_ENV: &str = "POLICE_BUDGET_DATA_DIR";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `cities.json` and `alternatives.json`, or `None`
    /// for the bundled data.
    pub data_dir: Option<PathBuf>,
    /// Analytics sink.
    pub tracker_kind: TrackerKind,
    /// Output path of the `file` sink.
    pub analytics_file: Option<PathBuf>,
}

/// Configuration given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// `--data-dir`.
    pub data_dir: Option<PathBuf>,
    /// `--analytics`.
    pub analytics: Option<String>,
    /// `--analytics-file`.
    pub analytics_file: Option<PathBuf>,
}

impl Config {
    /// Resolves `flags` against the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Config`] for an unknown analytics kind.
    pub fn resolve(flags: Flags) -> Result<Self, AnalyticsError> {
        Self::resolve_with(flags, |key| std::env::var(key).ok())
    }

    /// Resolves `flags` against `env`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Config`] for an unknown analytics kind.
    pub fn resolve_with(
        flags: Flags,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AnalyticsError> {
        let data_dir = flags
            .data_dir
            .or_else(|| env(DATA_DIR_ENV).map(PathBuf::from));

        let tracker_kind = match flags.analytics.or_else(|| env(ANALYTICS_ENV)) {
            Some(kind) => parse_kind(&kind)?,
            None => TrackerKind::Log,
        };

        let analytics_file = flags
            .analytics_file
            .or_else(|| env(ANALYTICS_FILE_ENV).map(PathBuf::from));

        Ok(Self {
            data_dir,
            tracker_kind,
            analytics_file,
        })
    }

    /// Loads the configured dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the dataset directory cannot be read or
    /// holds invalid data.
    pub fn load_dataset(&self) -> Result<Dataset, DatasetError> {
        match &self.data_dir {
            Some(dir) => Dataset::from_dir(dir),
            None => Ok(Dataset::bundled()),
        }
    }

    /// Creates the configured analytics sink.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Io`] if the `file` sink cannot open its
    /// output.
    pub fn tracker(&self) -> Result<Arc<dyn Tracker>, AnalyticsError> {
        create_tracker(self.tracker_kind, self.analytics_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let config = Config::resolve_with(Flags::default(), env_from(&[])).unwrap();

        assert_eq!(
            config,
            Config {
                data_dir: None,
                tracker_kind: TrackerKind::Log,
                analytics_file: None,
            }
        );
    }

    #[test]
    fn env_fills_unset_flags() {
        let config = Config::resolve_with(
            Flags::default(),
            env_from(&[
                (DATA_DIR_ENV, "/srv/budget-data"),
                (ANALYTICS_ENV, "file"),
                (ANALYTICS_FILE_ENV, "/tmp/events.jsonl"),
            ]),
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/budget-data")));
        assert_eq!(config.tracker_kind, TrackerKind::File);
        assert_eq!(
            config.analytics_file,
            Some(PathBuf::from("/tmp/events.jsonl"))
        );
    }

    #[test]
    fn flags_win_over_env() {
        let flags = Flags {
            data_dir: Some(PathBuf::from("data")),
            analytics: Some("none".to_string()),
            analytics_file: None,
        };
        let config = Config::resolve_with(
            flags,
            env_from(&[(DATA_DIR_ENV, "/srv/budget-data"), (ANALYTICS_ENV, "file")]),
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("data")));
        assert_eq!(config.tracker_kind, TrackerKind::None);
    }

    #[test]
    fn unknown_analytics_kind_is_rejected() {
        let result = Config::resolve_with(Flags::default(), env_from(&[(ANALYTICS_ENV, "woopra")]));
        assert!(matches!(result, Err(AnalyticsError::Config { .. })));
    }

    #[test]
    fn default_config_loads_bundled_dataset() {
        let config = Config::resolve_with(Flags::default(), env_from(&[])).unwrap();
        let dataset = config.load_dataset().unwrap();
        assert_eq!(dataset.cities(), Dataset::bundled().cities());
    }
}
