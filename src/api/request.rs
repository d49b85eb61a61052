//! Request types for the labor calculation engine API.
//!
//! Composite calculators take the calculation input structures from
//! [`crate::models`] directly as request bodies; this module defines the
//! request types for the scalar calculators plus the raw
//! unemployment-insurance request, whose salary list arrives as
//! comma-separated text and is parsed and filtered here before it reaches
//! the calculation core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Request body for the `/calculate/fgts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgtsRequest {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
}

/// Request body for the `/calculate/thirteenth-salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthSalaryRequest {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
}

/// Request body for the `/calculate/thirteenth-proportional` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthProportionalRequest {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// Months worked in the current year (0-12).
    pub months_worked: u32,
}

/// Request body for the `/calculate/social-security` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialSecurityRequest {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
}

/// Request body for the `/calculate/income-tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxRequest {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// The number of dependents for tax purposes. Defaults to 0.
    #[serde(default)]
    pub dependents: u32,
}

/// Request body for the `/calculate/unemployment-insurance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnemploymentRequest {
    /// The recent salaries as comma-separated text (e.g. "2500, 2500, 2600").
    pub salaries: String,
    /// Months worked in the qualifying period.
    pub months_worked: u32,
}

/// Parses a comma-separated salary list into an ordered numeric sequence.
///
/// Entries that are not parseable as decimals, or that are not positive,
/// are silently discarded; the calculation core only ever sees valid
/// salaries.
///
/// # Examples
///
/// ```
/// use clt_engine::api::parse_salary_list;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salaries = parse_salary_list("2500, abc, 2600,, -10");
/// assert_eq!(salaries, vec![
///     Decimal::from_str("2500").unwrap(),
///     Decimal::from_str("2600").unwrap(),
/// ]);
/// ```
pub fn parse_salary_list(raw: &str) -> Vec<Decimal> {
    raw.split(',')
        .filter_map(|entry| Decimal::from_str(entry.trim()).ok())
        .filter(|salary| *salary > Decimal::ZERO)
        .collect()
}
