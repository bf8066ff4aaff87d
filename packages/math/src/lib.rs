#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Budget comparison arithmetic.
//!
//! Pure functions that turn a ([`City`], [`Alternative`]) pair into the
//! numbers shown on the generator view: shares of the general fund, how
//! many units half the police budget would buy, and abbreviated dollar
//! amounts. [`Comparison`] bundles all of them for one pair.
//!
//! All amounts are whole dollars. Rounding is round-half-up and is done in
//! exact integer arithmetic, so 0.5% rounds to 1 and 99.5% rounds to 100.
//!
//! [`City`]: police_budget_dataset_models::City
//! [`Alternative`]: police_budget_dataset_models::Alternative

pub mod comparison;
pub mod format;
pub mod overrides;

use police_budget_dataset_models::{Alternative, City};

pub use comparison::{BudgetSection, ChartPercents, Comparison};
pub use format::{format_dollars, format_magnitude, format_with_commas};
pub use overrides::{
    effective_dept_budget, effective_dept_budget_by_name, effective_dept_name,
    effective_unit_cost,
};

/// Shown in place of a value that could not be computed.
pub const PLACEHOLDER: &str = "N/A";

/// Shown instead of a percentage that rounds to zero but is not zero.
pub const LESS_THAN_ONE: &str = "< 1";

/// Errors raised by the budget arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    /// A divisor was zero. The dataset invariants rule this out, so it
    /// indicates bad data.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what went wrong.
        message: String,
    },
}

/// Returns `round(100 * part / whole)`.
///
/// # Errors
///
/// Returns [`BudgetError::InvalidInput`] if `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> Result<u64, BudgetError> {
    rounded_ratio(u128::from(part) * 100, u128::from(whole)).ok_or_else(|| {
        BudgetError::InvalidInput {
            message: format!("cannot take a percentage of {part} out of 0"),
        }
    })
}

/// Formats the share of `whole` taken by `part` for display.
///
/// Returns `"< 1"` when a nonzero `part` rounds to 0%, `"0"` when `part`
/// is zero, and the rounded integer otherwise.
///
/// # Errors
///
/// Returns [`BudgetError::InvalidInput`] if `whole` is zero.
pub fn display_percent(part: u64, whole: u64) -> Result<String, BudgetError> {
    let percent = percent_of(part, whole)?;
    if percent == 0 && part > 0 {
        Ok(LESS_THAN_ONE.to_string())
    } else {
        Ok(percent.to_string())
    }
}

/// Number of units of `alternative` that half of `city`'s police budget
/// pays for, rounded to the nearest unit.
///
/// # Errors
///
/// Returns [`BudgetError::InvalidInput`] if the effective unit cost is
/// zero.
pub fn units_affordable(city: &City, alternative: &Alternative) -> Result<u64, BudgetError> {
    let unit_cost = effective_unit_cost(alternative, city);
    rounded_ratio(
        u128::from(city.police_budget),
        u128::from(unit_cost) * 2,
    )
    .ok_or_else(|| BudgetError::InvalidInput {
        message: format!(
            "'{}' has a unit cost of 0 in {}",
            alternative.name, city.name
        ),
    })
}

/// [`units_affordable`] with thousands separators, or [`PLACEHOLDER`] if
/// the count cannot be computed.
///
/// # Panics
///
/// Panics in debug builds if the count cannot be computed.
#[must_use]
pub fn display_units_affordable(city: &City, alternative: &Alternative) -> String {
    or_placeholder(units_affordable(city, alternative).map(format_with_commas))
}

/// Unwraps a display value, logging and substituting [`PLACEHOLDER`] on
/// error.
///
/// # Panics
///
/// Panics on error in debug builds. Validated data never fails here.
#[must_use]
pub fn or_placeholder(result: Result<String, BudgetError>) -> String {
    reported(result).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Logs a failed computation and drops it, or panics with it in debug
/// builds.
pub(crate) fn reported<T>(result: Result<T, BudgetError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Budget computation failed: {e}");
            if cfg!(debug_assertions) {
                panic!("Budget computation failed: {e}");
            }
            None
        }
    }
}

/// `numerator / denominator` rounded half-up, or `None` for a zero
/// denominator. Saturates at [`u64::MAX`].
fn rounded_ratio(numerator: u128, denominator: u128) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    let rounded = (numerator * 2 + denominator) / (denominator * 2);
    Some(u64::try_from(rounded).unwrap_or(u64::MAX))
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use std::collections::BTreeMap;

    use police_budget_dataset_models::{Alternative, City, DepartmentOverride};

    pub fn city(police_budget: u64, general_fund: u64) -> City {
        City {
            name: "Springfield".to_string(),
            state: "IL".to_string(),
            police_budget,
            general_fund,
            links: vec![],
            notes: vec![],
            department_overrides: BTreeMap::new(),
        }
    }

    pub fn alternative(name: &str, unit_cost: u64) -> Alternative {
        Alternative {
            name: name.to_string(),
            unit_cost,
            salary: true,
            links: None,
            notes: None,
        }
    }

    pub fn with_override(mut city: City, alt_name: &str, ovr: DepartmentOverride) -> City {
        city.department_overrides.insert(alt_name.to_string(), ovr);
        city
    }
}
