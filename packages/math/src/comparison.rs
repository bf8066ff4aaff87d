//! The derived values shown on the generator view for one pair.

use police_budget_dataset_models::{Alternative, City};
use serde::{Deserialize, Serialize};

use crate::{
    display_percent, display_units_affordable, effective_dept_budget, effective_dept_name,
    format_dollars, or_placeholder, percent_of, reported,
};

/// Label of the police side of the comparison.
pub const POLICE_LABEL: &str = "Police";

/// One side of the spending comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSection {
    /// Department name.
    pub name: String,
    /// General-fund budget, in dollars.
    pub budget: u64,
    /// Share of the general fund (`"39"`, `"< 1"`, or `"N/A"`).
    pub percent: String,
    /// Abbreviated budget (`"$193 million"`) or the no-funds message.
    pub dollars: String,
}

impl BudgetSection {
    fn new(name: &str, budget: u64, general_fund: u64) -> Self {
        Self {
            name: name.to_string(),
            budget,
            percent: or_placeholder(display_percent(budget, general_fund)),
            dollars: format_dollars(budget),
        }
    }
}

/// Integer percentages driving the bar chart. `None` when the share could
/// not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPercents {
    /// Police share of the general fund.
    pub police: Option<u64>,
    /// Alternative department's share of the general fund.
    pub department: Option<u64>,
}

/// Every derived display value for a (city, alternative) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// City name.
    pub city_name: String,
    /// City label (`"Name, ST"`).
    pub city_label: String,
    /// Alternative name.
    pub alternative: String,
    /// Units half the police budget pays for, comma separated.
    pub units_affordable: String,
    /// The police side.
    pub police: BudgetSection,
    /// The alternative's department side.
    pub department: BudgetSection,
    /// Chart percentages.
    pub chart: ChartPercents,
}

impl Comparison {
    /// Computes the comparison for `city` and `alternative`.
    ///
    /// Values that cannot be computed are logged and shown as
    /// [`crate::PLACEHOLDER`].
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a value cannot be computed.
    #[must_use]
    pub fn new(city: &City, alternative: &Alternative) -> Self {
        let dept_budget = effective_dept_budget(alternative, city);

        Self {
            city_name: city.name.clone(),
            city_label: city.label(),
            alternative: alternative.name.clone(),
            units_affordable: display_units_affordable(city, alternative),
            police: BudgetSection::new(POLICE_LABEL, city.police_budget, city.general_fund),
            department: BudgetSection::new(
                effective_dept_name(alternative, city),
                dept_budget,
                city.general_fund,
            ),
            chart: ChartPercents {
                police: reported(percent_of(city.police_budget, city.general_fund)),
                department: reported(percent_of(dept_budget, city.general_fund)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use police_budget_dataset::Dataset;

    use super::*;
    use crate::format::NO_GENERAL_FUNDS;
    use crate::test_fixtures::{alternative, city};
    use crate::PLACEHOLDER;

    #[test]
    fn minneapolis_social_workers() {
        let dataset = Dataset::bundled();
        let city = dataset.city("Minneapolis").unwrap();
        let alt = dataset.alternative("Social Workers").unwrap();

        let cmp = Comparison::new(city, alt);

        assert_eq!(cmp.city_label, "Minneapolis, MN");
        assert_eq!(cmp.units_affordable, "1,912");
        assert_eq!(cmp.police.name, POLICE_LABEL);
        assert_eq!(cmp.police.percent, "39");
        assert_eq!(cmp.police.dollars, "$193 million");
        assert_eq!(cmp.department.name, "Social Workers");
        assert_eq!(cmp.department.budget, 0);
        assert_eq!(cmp.department.percent, "0");
        assert_eq!(cmp.department.dollars, NO_GENERAL_FUNDS);
        assert_eq!(cmp.chart.police, Some(39));
        assert_eq!(cmp.chart.department, Some(0));
    }

    #[test]
    fn denver_star_program() {
        let dataset = Dataset::bundled();
        let city = dataset.city("Denver").unwrap();
        let alt = dataset.alternative("Mental Health Counselors").unwrap();

        let cmp = Comparison::new(city, alt);

        assert_eq!(cmp.department.name, "STAR Program");
        assert_eq!(cmp.department.budget, 208_000);
        assert_eq!(cmp.department.percent, "< 1");
        assert_eq!(cmp.department.dollars, "$208 thousand");
        assert_eq!(cmp.chart.department, Some(0));
    }

    #[test]
    fn new_york_teachers_use_local_cost() {
        let dataset = Dataset::bundled();
        let city = dataset.city("New York").unwrap();
        let alt = dataset.alternative("Public School Teachers").unwrap();

        let cmp = Comparison::new(city, alt);

        assert_eq!(cmp.units_affordable, "32,099");
        assert_eq!(cmp.police.dollars, "$5.6 billion");
        assert_eq!(cmp.department.name, "Department of Education");
        assert_eq!(cmp.department.dollars, "$34.0 billion");
        assert_eq!(cmp.department.percent, "39");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Budget computation failed")]
    fn bad_data_panics_in_debug_builds() {
        let city = city(1_000, 0);
        let alt = alternative("Broken", 0);

        let _ = Comparison::new(&city, &alt);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn bad_data_degrades_to_placeholders() {
        let city = city(1_000, 0);
        let alt = alternative("Broken", 0);

        let cmp = Comparison::new(&city, &alt);

        assert_eq!(cmp.units_affordable, PLACEHOLDER);
        assert_eq!(cmp.police.percent, PLACEHOLDER);
        assert_eq!(cmp.department.percent, PLACEHOLDER);
        assert_eq!(cmp.chart.police, None);
        assert_eq!(cmp.chart.department, None);
    }

    #[test]
    fn every_bundled_pair_computes() {
        let dataset = Dataset::bundled();
        for city in dataset.cities() {
            for alt in dataset.alternatives() {
                let cmp = Comparison::new(city, alt);
                assert_ne!(cmp.units_affordable, PLACEHOLDER, "{} / {}", city.name, alt.name);
                assert_ne!(cmp.police.percent, PLACEHOLDER, "{} / {}", city.name, alt.name);
                assert_ne!(cmp.department.percent, PLACEHOLDER, "{} / {}", city.name, alt.name);
            }
        }
    }
}
