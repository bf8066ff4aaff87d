#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The currently selected city and alternative.
//!
//! [`SelectionState`] holds references straight into the [`Dataset`], so a
//! selection is always a real record rather than a name to look up again.
//! Every change recomputes the [`Comparison`] and reports the new pair to
//! the injected [`Tracker`].

use std::sync::Arc;

use police_budget_analytics::Tracker;
use police_budget_analytics_models::{
    AnalyticsEvent, EventName, KEY_ALT_NAME, KEY_ALTERNATIVE, KEY_CITY, KEY_CITY_NAME, KEY_TITLE,
};
use police_budget_dataset::Dataset;
use police_budget_dataset_models::{Alternative, City};
use police_budget_math::Comparison;
use rand::Rng;
use rand::seq::SliceRandom as _;

/// Errors that can occur while creating a selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// There is nothing to pick from.
    #[error("Dataset has no {what} to select from")]
    EmptyDataset {
        /// Which collection is empty.
        what: &'static str,
    },
}

/// The user's current (city, alternative) pair and its derived values.
pub struct SelectionState<'a> {
    dataset: &'a Dataset,
    city: &'a City,
    alternative: &'a Alternative,
    comparison: Comparison,
    tracker: Arc<dyn Tracker>,
}

impl<'a> SelectionState<'a> {
    /// Starts from an explicit pair.
    #[must_use]
    pub fn new(
        dataset: &'a Dataset,
        city: &'a City,
        alternative: &'a Alternative,
        tracker: Arc<dyn Tracker>,
    ) -> Self {
        Self {
            dataset,
            city,
            alternative,
            comparison: Comparison::new(city, alternative),
            tracker,
        }
    }

    /// Starts from a uniformly random city and an independently, uniformly
    /// random alternative.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptyDataset`] if the dataset has no
    /// cities or no alternatives.
    pub fn random<R: Rng + ?Sized>(
        dataset: &'a Dataset,
        tracker: Arc<dyn Tracker>,
        rng: &mut R,
    ) -> Result<Self, SelectionError> {
        let city = dataset
            .cities()
            .choose(rng)
            .ok_or(SelectionError::EmptyDataset { what: "cities" })?;
        let alternative = dataset
            .alternatives()
            .choose(rng)
            .ok_or(SelectionError::EmptyDataset {
                what: "alternatives",
            })?;

        log::debug!(
            "Random initial selection: {} / {}",
            city.name,
            alternative.name
        );

        Ok(Self::new(dataset, city, alternative, tracker))
    }

    /// The dataset selections are drawn from.
    #[must_use]
    pub const fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// The selected city.
    #[must_use]
    pub const fn city(&self) -> &'a City {
        self.city
    }

    /// The selected alternative.
    #[must_use]
    pub const fn alternative(&self) -> &'a Alternative {
        self.alternative
    }

    /// Derived display values for the current pair.
    #[must_use]
    pub const fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Reports that the view titled `title` was shown.
    pub fn view_page(&self, title: &str) {
        self.emit(EventName::ViewPage, [(KEY_TITLE, title)]);
    }

    /// Replaces the selected city.
    pub fn select_city(&mut self, city: &'a City) {
        self.city = city;
        self.refresh();
        self.emit(
            EventName::SetCity,
            [
                (KEY_CITY_NAME, city.name.as_str()),
                (KEY_ALTERNATIVE, self.alternative.name.as_str()),
            ],
        );
    }

    /// Replaces the selected alternative.
    pub fn select_alternative(&mut self, alternative: &'a Alternative) {
        self.alternative = alternative;
        self.refresh();
        self.emit(
            EventName::SetAlternative,
            [
                (KEY_ALT_NAME, alternative.name.as_str()),
                (KEY_CITY, self.city.name.as_str()),
            ],
        );
    }

    fn refresh(&mut self) {
        self.comparison = Comparison::new(self.city, self.alternative);
        log::trace!(
            "Recomputed comparison for {} / {}",
            self.city.name,
            self.alternative.name
        );
    }

    fn emit<const N: usize>(&self, event: EventName, pairs: [(&str, &str); N]) {
        let event = AnalyticsEvent::new(event, pairs);
        self.tracker.track(event.name, &event.payload);
    }
}
