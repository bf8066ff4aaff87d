//! Dataset registry: the city and alternative JSON baked into the binary.
//!
//! Both files live in `packages/dataset/data/` and are embedded at compile
//! time via [`include_str!`]. Updating a figure means editing the JSON and
//! rebuilding (or pointing the CLI at a directory with `--data-dir`).

use crate::Dataset;

/// Embedded city records.
const CITIES_JSON: &str = include_str!("../data/cities.json");

/// Embedded alternative records.
const ALTERNATIVES_JSON: &str = include_str!("../data/alternatives.json");

/// Number of bundled cities. Enforced by a test.
#[cfg(test)]
const EXPECTED_CITY_COUNT: usize = 8;

/// Number of bundled alternatives. Enforced by a test.
#[cfg(test)]
const EXPECTED_ALTERNATIVE_COUNT: usize = 6;

/// Parses the embedded dataset.
///
/// # Panics
///
/// Panics if the embedded JSON fails to parse or validate.
#[must_use]
pub fn bundled_dataset() -> Dataset {
    Dataset::from_json(CITIES_JSON, ALTERNATIVES_JSON)
        .unwrap_or_else(|e| panic!("Failed to load bundled dataset: {e}"))
}
