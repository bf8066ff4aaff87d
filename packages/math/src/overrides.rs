//! Per-city department override resolution.
//!
//! A city may already run a version of an alternative (Eugene's CAHOOTS,
//! Denver's STAR program) with its own budget, unit cost, or name. Each
//! field is resolved on its own: the city's override wins when it sets the
//! field, otherwise the alternative's national default applies.

use police_budget_dataset::Dataset;
use police_budget_dataset_models::{Alternative, City};

/// Cost of one unit of `alternative` in `city`.
#[must_use]
pub fn effective_unit_cost(alternative: &Alternative, city: &City) -> u64 {
    city.override_for(&alternative.name)
        .and_then(|o| o.unit_cost)
        .unwrap_or(alternative.unit_cost)
}

/// General-fund budget of the department providing `alternative` in
/// `city`. Zero when the city has no such department on record.
#[must_use]
pub fn effective_dept_budget(alternative: &Alternative, city: &City) -> u64 {
    city.override_for(&alternative.name)
        .and_then(|o| o.budget)
        .unwrap_or(0)
}

/// [`effective_dept_budget`] for a city given by name. Unknown cities have
/// no department budget.
#[must_use]
pub fn effective_dept_budget_by_name(
    alternative: &Alternative,
    city_name: &str,
    dataset: &Dataset,
) -> u64 {
    dataset
        .city(city_name)
        .map_or(0, |city| effective_dept_budget(alternative, city))
}

/// Name of the department providing `alternative` in `city`.
#[must_use]
pub fn effective_dept_name<'a>(alternative: &'a Alternative, city: &'a City) -> &'a str {
    city.override_for(&alternative.name)
        .and_then(|o| o.dept_name.as_deref())
        .unwrap_or(&alternative.name)
}
