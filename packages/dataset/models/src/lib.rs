#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record types for the bundled police budget dataset.
//!
//! A [`City`] carries its police budget, its general fund, and the sources
//! the figures came from. An [`Alternative`] is something the money could
//! pay for instead (teachers, housing units, school lunches). Cities may
//! carry a [`DepartmentOverride`] per alternative when the program already
//! exists locally with a known cost or budget.
//!
//! Field names follow the camelCase schema of the bundled JSON files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A link to a primary source backing a figure in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLink {
    /// Target URL.
    pub url: String,
    /// Text shown for the link.
    pub link_text: String,
}

/// Local figures for an alternative that already exists in a city.
///
/// Every field is optional. A field left out falls back to the
/// alternative's national default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentOverride {
    /// General-fund budget of the local department, in dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    /// Local cost per unit, in dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<u64>,
    /// Name of the local department or program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_name: Option<String>,
}

/// A city and its budget figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// City name (e.g., "Minneapolis").
    pub name: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Annual police budget, in dollars.
    pub police_budget: u64,
    /// Annual general fund, in dollars. Always greater than zero.
    pub general_fund: u64,
    /// Sources for the budget figures.
    #[serde(default)]
    pub links: Vec<DataLink>,
    /// Free-form notes about how the figures were derived.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Local overrides keyed by alternative name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub department_overrides: BTreeMap<String, DepartmentOverride>,
}

impl City {
    /// Returns the display label used in city pickers (`"Name, ST"`).
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }

    /// Returns this city's override for the named alternative, if any.
    #[must_use]
    pub fn override_for(&self, alternative_name: &str) -> Option<&DepartmentOverride> {
        self.department_overrides.get(alternative_name)
    }
}

/// Something a share of the police budget could fund instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    /// Display name (e.g., "Social Workers").
    pub name: String,
    /// National cost per unit, in dollars. Always greater than zero.
    pub unit_cost: u64,
    /// Whether a unit is a salaried position.
    pub salary: bool,
    /// Sources for the unit cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<DataLink>>,
    /// Notes about how the unit cost was derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_defaults_missing_collections() {
        let city: City = serde_json::from_str(
            r#"{"name":"Eugene","state":"OR","policeBudget":10,"generalFund":20}"#,
        )
        .unwrap();

        assert!(city.links.is_empty());
        assert!(city.notes.is_empty());
        assert!(city.department_overrides.is_empty());
        assert_eq!(city.label(), "Eugene, OR");
    }

    #[test]
    fn override_fields_are_independent() {
        let city: City = serde_json::from_str(
            r#"{
                "name": "Denver",
                "state": "CO",
                "policeBudget": 10,
                "generalFund": 20,
                "departmentOverrides": {
                    "Mental Health Counselors": { "deptName": "STAR Program" }
                }
            }"#,
        )
        .unwrap();

        let ovr = city.override_for("Mental Health Counselors").unwrap();
        assert_eq!(ovr.dept_name.as_deref(), Some("STAR Program"));
        assert_eq!(ovr.budget, None);
        assert_eq!(ovr.unit_cost, None);
        assert!(city.override_for("Social Workers").is_none());
    }

    #[test]
    fn alternative_optional_sections() {
        let alt: Alternative = serde_json::from_str(
            r#"{"name":"Social Workers","unitCost":50470,"salary":true}"#,
        )
        .unwrap();

        assert!(alt.links.is_none());
        assert!(alt.notes.is_none());
        assert!(alt.salary);
    }
}
