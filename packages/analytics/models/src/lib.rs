#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analytics event names and payload types.
//!
//! Events are a name plus a flat map of string keys to string values. The
//! names and payload keys match what the web tracker expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Flat, string-keyed event payload.
pub type EventPayload = BTreeMap<String, String>;

/// Payload key for the page title of a `view page` event.
pub const KEY_TITLE: &str = "title";
/// Payload key for the newly selected city.
pub const KEY_CITY_NAME: &str = "cityName";
/// Payload key for the alternative paired with a city change.
pub const KEY_ALTERNATIVE: &str = "alternative";
/// Payload key for the newly selected alternative.
pub const KEY_ALT_NAME: &str = "altName";
/// Payload key for the city paired with an alternative change.
pub const KEY_CITY: &str = "city";

/// Names of the events the application emits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum EventName {
    /// A view was shown for the first time.
    #[serde(rename = "view page")]
    #[strum(serialize = "view page")]
    ViewPage,
    /// The user picked a city.
    #[serde(rename = "set city")]
    #[strum(serialize = "set city")]
    SetCity,
    /// The user picked an alternative.
    #[serde(rename = "set alternative")]
    #[strum(serialize = "set alternative")]
    SetAlternative,
}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event name.
    pub name: EventName,
    /// Event payload.
    pub payload: EventPayload,
}

impl AnalyticsEvent {
    /// Builds an event from a name and `(key, value)` pairs.
    #[must_use]
    pub fn new<K: Into<String>, V: Into<String>>(
        name: EventName,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            name,
            payload: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
