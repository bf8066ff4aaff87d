#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The read-only city and alternative dataset.
//!
//! A [`Dataset`] is loaded once at start-up, either from the JSON embedded
//! in the binary ([`Dataset::bundled`]) or from a directory holding
//! `cities.json` and `alternatives.json` ([`Dataset::from_dir`]). Records
//! are sorted by name and checked against the invariants the budget math
//! divides by.

pub mod registry;

use std::collections::BTreeSet;
use std::path::Path;

pub use police_budget_dataset_models::{Alternative, City, DataLink, DepartmentOverride};

/// File name of the city collection inside a dataset directory.
pub const CITIES_FILE: &str = "cities.json";

/// File name of the alternative collection inside a dataset directory.
pub const ALTERNATIVES_FILE: &str = "alternatives.json";

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error reading a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates a dataset invariant.
    #[error("Invalid dataset: {message}")]
    Invalid {
        /// Description of what went wrong.
        message: String,
    },
}

/// Immutable collection of cities and alternatives, each sorted by name.
#[derive(Debug, Clone)]
pub struct Dataset {
    cities: Vec<City>,
    alternatives: Vec<Alternative>,
}

impl Dataset {
    /// Builds a dataset from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Invalid`] if a general fund or unit cost is
    /// zero, a name is duplicated, or an override names an unknown
    /// alternative.
    pub fn new(
        mut cities: Vec<City>,
        mut alternatives: Vec<Alternative>,
    ) -> Result<Self, DatasetError> {
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        alternatives.sort_by(|a, b| a.name.cmp(&b.name));

        validate(&cities, &alternatives)?;

        log::debug!(
            "Loaded dataset with {} cities and {} alternatives",
            cities.len(),
            alternatives.len()
        );

        Ok(Self {
            cities,
            alternatives,
        })
    }

    /// Parses a dataset from the two JSON documents.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] if either document is malformed, or
    /// [`DatasetError::Invalid`] if the records break an invariant.
    pub fn from_json(cities_json: &str, alternatives_json: &str) -> Result<Self, DatasetError> {
        let cities: Vec<City> = serde_json::from_str(cities_json)?;
        let alternatives: Vec<Alternative> = serde_json::from_str(alternatives_json)?;
        Self::new(cities, alternatives)
    }

    /// Reads [`CITIES_FILE`] and [`ALTERNATIVES_FILE`] from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if either file cannot be read, plus
    /// the errors of [`Self::from_json`].
    pub fn from_dir(dir: &Path) -> Result<Self, DatasetError> {
        log::info!("Loading dataset from {}", dir.display());
        let cities_json = std::fs::read_to_string(dir.join(CITIES_FILE))?;
        let alternatives_json = std::fs::read_to_string(dir.join(ALTERNATIVES_FILE))?;
        Self::from_json(&cities_json, &alternatives_json)
    }

    /// Returns the dataset embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed or invalid. The data is a
    /// compile-time constant, so a failure here is a development error
    /// caught by this crate's tests.
    #[must_use]
    pub fn bundled() -> Self {
        registry::bundled_dataset()
    }

    /// All cities, sorted by name.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// All alternatives, sorted by name.
    #[must_use]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Finds a city by name, ignoring ASCII case.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Finds an alternative by name, ignoring ASCII case.
    #[must_use]
    pub fn alternative(&self, name: &str) -> Option<&Alternative> {
        self.alternatives
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Alternatives listed under "Other Data": every alternative that is
    /// not a salaried position.
    pub fn other_data(&self) -> impl Iterator<Item = &Alternative> {
        self.alternatives.iter().filter(|a| !a.salary)
    }
}

fn validate(cities: &[City], alternatives: &[Alternative]) -> Result<(), DatasetError> {
    let mut alt_names = BTreeSet::new();
    for alt in alternatives {
        if alt.unit_cost == 0 {
            return Err(invalid(format!(
                "alternative '{}' has a unit cost of 0",
                alt.name
            )));
        }
        if !alt_names.insert(alt.name.as_str()) {
            return Err(invalid(format!("duplicate alternative '{}'", alt.name)));
        }
    }

    let mut city_names = BTreeSet::new();
    for city in cities {
        if city.general_fund == 0 {
            return Err(invalid(format!(
                "city '{}' has a general fund of 0",
                city.name
            )));
        }
        if !city_names.insert(city.name.as_str()) {
            return Err(invalid(format!("duplicate city '{}'", city.name)));
        }
        for (alt_name, ovr) in &city.department_overrides {
            if !alt_names.contains(alt_name.as_str()) {
                return Err(invalid(format!(
                    "city '{}' overrides unknown alternative '{alt_name}'",
                    city.name
                )));
            }
            if ovr.unit_cost == Some(0) {
                return Err(invalid(format!(
                    "city '{}' overrides '{alt_name}' with a unit cost of 0",
                    city.name
                )));
            }
        }
    }

    Ok(())
}

fn invalid(message: String) -> DatasetError {
    DatasetError::Invalid { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITIES: &str = r#"[
        {"name":"Seattle","state":"WA","policeBudget":409000000,"generalFund":1490000000},
        {"name":"Denver","state":"CO","policeBudget":230000000,"generalFund":1400000000,
         "departmentOverrides":{"Social Workers":{"budget":208000}}}
    ]"#;

    const ALTERNATIVES: &str = r#"[
        {"name":"Social Workers","unitCost":50470,"salary":true},
        {"name":"Free School Lunches","unitCost":650,"salary":false}
    ]"#;

    #[test]
    fn sorts_records_by_name() {
        let dataset = Dataset::from_json(CITIES, ALTERNATIVES).unwrap();

        let cities: Vec<&str> = dataset.cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(cities, ["Denver", "Seattle"]);

        let alts: Vec<&str> = dataset
            .alternatives()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(alts, ["Free School Lunches", "Social Workers"]);
    }

    #[test]
    fn lookups_ignore_case() {
        let dataset = Dataset::from_json(CITIES, ALTERNATIVES).unwrap();

        assert_eq!(dataset.city("seattle").unwrap().state, "WA");
        assert_eq!(dataset.city(" DENVER ").unwrap().state, "CO");
        assert!(dataset.city("Boise").is_none());
        assert_eq!(
            dataset.alternative("social workers").unwrap().unit_cost,
            50470
        );
    }

    #[test]
    fn other_data_excludes_salaried() {
        let dataset = Dataset::from_json(CITIES, ALTERNATIVES).unwrap();

        let other: Vec<&str> = dataset.other_data().map(|a| a.name.as_str()).collect();
        assert_eq!(other, ["Free School Lunches"]);
    }

    #[test]
    fn rejects_zero_general_fund() {
        let cities = r#"[{"name":"Nowhere","state":"NA","policeBudget":1,"generalFund":0}]"#;
        let err = Dataset::from_json(cities, ALTERNATIVES).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid { .. }), "{err}");
    }

    #[test]
    fn rejects_zero_unit_cost() {
        let alts = r#"[{"name":"Free","unitCost":0,"salary":false}]"#;
        let err = Dataset::from_json(CITIES, alts).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid { .. }), "{err}");
    }

    #[test]
    fn rejects_zero_override_unit_cost() {
        let cities = r#"[{"name":"Denver","state":"CO","policeBudget":1,"generalFund":2,
            "departmentOverrides":{"Social Workers":{"unitCost":0}}}]"#;
        let err = Dataset::from_json(cities, ALTERNATIVES).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid { .. }), "{err}");
    }

    #[test]
    fn rejects_override_for_unknown_alternative() {
        let cities = r#"[{"name":"Denver","state":"CO","policeBudget":1,"generalFund":2,
            "departmentOverrides":{"Firefighters":{"budget":5}}}]"#;
        let err = Dataset::from_json(cities, ALTERNATIVES).unwrap_err();
        assert!(err.to_string().contains("Firefighters"), "{err}");
    }

    #[test]
    fn rejects_duplicate_city() {
        let cities = r#"[
            {"name":"Denver","state":"CO","policeBudget":1,"generalFund":2},
            {"name":"Denver","state":"CO","policeBudget":3,"generalFund":4}
        ]"#;
        let err = Dataset::from_json(cities, ALTERNATIVES).unwrap_err();
        assert!(err.to_string().contains("duplicate city"), "{err}");
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = Dataset::from_json("[{", ALTERNATIVES).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)), "{err}");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = Dataset::from_dir(Path::new("/nonexistent/police-budget-data")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)), "{err}");
    }

    #[test]
    fn loads_bundled_files_from_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let from_dir = Dataset::from_dir(&dir).unwrap();
        let bundled = Dataset::bundled();

        assert_eq!(from_dir.cities(), bundled.cities());
        assert_eq!(from_dir.alternatives(), bundled.alternatives());
    }
}
