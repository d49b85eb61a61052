//! Severance request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DismissalType;

/// Inputs for the severance calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceInput {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// Total months worked under the contract.
    pub months_worked: u32,
    /// Whether the prior notice is indemnified instead of worked.
    /// Defaults to false.
    #[serde(default)]
    pub indemnified_notice: bool,
    /// The number of fully accrued, untaken vacation periods.
    /// Defaults to 0.
    #[serde(default)]
    pub expired_vacation_periods: u32,
    /// Unpaid days of the final month. Defaults to 0.
    #[serde(default)]
    pub unpaid_days: u32,
    /// The way the contract ended. Defaults to dismissal without cause.
    #[serde(default)]
    pub dismissal_type: DismissalType,
}
