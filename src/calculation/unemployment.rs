//! Unemployment-insurance benefit calculation.
//!
//! Eligibility requires a minimum number of months worked. The benefit
//! parcel is derived from the mean of the recent salaries through three
//! bands: a percentage of the mean, a fixed base plus a marginal rate, or
//! a flat ceiling. The number of parcels grows with tenure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborTables;
use crate::models::UnemploymentInput;

/// The result of an unemployment-insurance calculation.
///
/// Ineligibility is a valid terminal state, not an error; when `eligible`
/// is false the reason explains why and the monetary fields are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentResult {
    /// Whether the worker qualifies for the benefit.
    pub eligible: bool,
    /// The value of each benefit parcel.
    pub parcel_value: Decimal,
    /// The number of parcels granted.
    pub parcel_count: u32,
    /// The reason the worker does not qualify, when ineligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ineligibility_reason: Option<String>,
}

impl UnemploymentResult {
    fn ineligible(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            parcel_value: Decimal::ZERO,
            parcel_count: 0,
            ineligibility_reason: Some(reason.into()),
        }
    }
}

/// Calculates unemployment-insurance eligibility and benefit.
///
/// # Arguments
///
/// * `input` - The recent salaries and months worked
/// * `tables` - The statutory table set for the tax year
///
/// # Returns
///
/// An [`UnemploymentResult`]. Two ineligible terminal states exist:
/// months worked below the statutory minimum, and an empty salary
/// sequence (there is no mean to price the parcel from). Both carry a
/// human-readable reason.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::calculate_unemployment_insurance;
/// use clt_engine::config::LaborTables;
/// use clt_engine::models::UnemploymentInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = LaborTables::brazil_2023();
/// let result = calculate_unemployment_insurance(
///     &UnemploymentInput {
///         salaries: vec![Decimal::from_str("1500").unwrap()],
///         months_worked: 12,
///     },
///     &tables,
/// );
///
/// assert!(result.eligible);
/// assert_eq!(result.parcel_value, Decimal::from_str("1200").unwrap());
/// assert_eq!(result.parcel_count, 4);
/// ```
pub fn calculate_unemployment_insurance(
    input: &UnemploymentInput,
    tables: &LaborTables,
) -> UnemploymentResult {
    let table = tables.unemployment();

    if input.months_worked < table.minimum_months {
        return UnemploymentResult::ineligible(format!(
            "Fewer than {} months worked in the qualifying period.",
            table.minimum_months
        ));
    }

    if input.salaries.is_empty() {
        return UnemploymentResult::ineligible(
            "No valid salaries were provided to compute the mean salary.",
        );
    }

    let sum: Decimal = input.salaries.iter().copied().sum();
    let mean = sum / Decimal::from(input.salaries.len() as u64);

    let parcel_value = if mean <= table.lower_threshold {
        mean * table.lower_rate_percent / Decimal::ONE_HUNDRED
    } else if mean <= table.upper_threshold {
        table.middle_band_base
            + (mean - table.lower_threshold) * table.middle_band_rate_percent
                / Decimal::ONE_HUNDRED
    } else {
        table.ceiling
    };

    UnemploymentResult {
        eligible: true,
        parcel_value,
        parcel_count: table.parcels_for(input.months_worked),
        ineligibility_reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tables() -> LaborTables {
        LaborTables::brazil_2023()
    }

    fn input(salaries: &[&str], months: u32) -> UnemploymentInput {
        UnemploymentInput {
            salaries: salaries.iter().map(|s| dec(s)).collect(),
            months_worked: months,
        }
    }

    #[test]
    fn test_under_twelve_months_is_ineligible() {
        let result = calculate_unemployment_insurance(&input(&["2500"], 11), &tables());

        assert!(!result.eligible);
        assert_eq!(result.parcel_value, Decimal::ZERO);
        assert_eq!(result.parcel_count, 0);
        assert!(
            result
                .ineligibility_reason
                .as_deref()
                .unwrap()
                .contains("12 months")
        );
    }

    #[test]
    fn test_empty_salary_history_is_ineligible() {
        let result = calculate_unemployment_insurance(&input(&[], 14), &tables());

        assert!(!result.eligible);
        assert_eq!(result.parcel_value, Decimal::ZERO);
        assert!(
            result
                .ineligibility_reason
                .as_deref()
                .unwrap()
                .contains("No valid salaries")
        );
    }

    #[test]
    fn test_lower_band_pays_eighty_percent_of_mean() {
        let result = calculate_unemployment_insurance(&input(&["1500", "1500"], 12), &tables());

        assert!(result.eligible);
        assert_eq!(result.parcel_value, dec("1200"));
        assert_eq!(result.parcel_count, 4);
        assert!(result.ineligibility_reason.is_none());
    }

    #[test]
    fn test_middle_band_adds_marginal_half() {
        let result =
            calculate_unemployment_insurance(&input(&["2500", "2500", "2600"], 12), &tables());

        assert!(result.eligible);
        let mean = (dec("2500") + dec("2500") + dec("2600")) / dec("3");
        let expected = dec("1574.69") + (mean - dec("1968.36")) * dec("50") / dec("100");
        assert_eq!(result.parcel_value, expected);
        assert_eq!(result.parcel_count, 4);
    }

    #[test]
    fn test_mean_at_lower_threshold_uses_lower_band() {
        let result = calculate_unemployment_insurance(&input(&["1968.36"], 12), &tables());

        // 1968.36 x 80%
        assert_eq!(result.parcel_value, dec("1574.688"));
    }

    #[test]
    fn test_mean_above_upper_threshold_is_capped() {
        let result =
            calculate_unemployment_insurance(&input(&["4000", "4200", "3900"], 12), &tables());

        assert_eq!(result.parcel_value, dec("2230.97"));
    }

    #[test]
    fn test_parcel_count_bands() {
        let tables = tables();
        let salaries = &["2000"];

        let four = calculate_unemployment_insurance(&input(salaries, 23), &tables);
        let five = calculate_unemployment_insurance(&input(salaries, 24), &tables);
        let six = calculate_unemployment_insurance(&input(salaries, 48), &tables);

        assert_eq!(four.parcel_count, 4);
        assert_eq!(five.parcel_count, 5);
        assert_eq!(six.parcel_count, 6);
    }

    #[test]
    fn test_ineligible_result_omits_reason_from_json_when_eligible() {
        let result = calculate_unemployment_insurance(&input(&["2000"], 12), &tables());
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("ineligibility_reason"));
    }
}
