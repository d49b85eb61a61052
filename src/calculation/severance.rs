//! Severance calculation.
//!
//! Severance bundles the amounts owed when a contract ends: the unpaid
//! final-month balance, the prorated thirteenth salary, expired and
//! proportional vacation with the constitutional third, the indemnified
//! prior notice and, on dismissal without cause, the FGTS penalty.
//!
//! The prorated components use only the months accrued in the current
//! annual cycle (`months_worked % 12`): full-year entitlements are settled
//! separately as expired vacation periods and previously paid thirteenth
//! salaries, so only the partial current-year fraction is owed at
//! termination.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborTables;
use crate::models::{DismissalType, SeveranceInput};

use super::calculate_thirteenth_proportional;

/// The itemized result of a severance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Pay for the unpaid days of the final month.
    pub salary_balance: Decimal,
    /// Thirteenth salary prorated over the current annual cycle.
    pub proportional_thirteenth: Decimal,
    /// Fully accrued, untaken vacation periods with the constitutional
    /// third.
    pub expired_vacation: Decimal,
    /// Vacation prorated over the current annual cycle, with the
    /// constitutional third.
    pub proportional_vacation: Decimal,
    /// One gross salary when the prior notice is indemnified.
    pub indemnified_notice: Decimal,
    /// The FGTS penalty, owed only on dismissal without cause.
    pub fgts_penalty: Decimal,
    /// The sum of all components.
    pub total: Decimal,
}

/// Calculates the severance package for a terminated contract.
///
/// # Arguments
///
/// * `input` - The severance inputs (salary, tenure, dismissal type, ...)
/// * `tables` - The statutory table set for the tax year
///
/// # Returns
///
/// A [`SeveranceResult`] with each component and the total. A non-positive
/// salary yields an all-zero result.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::calculate_severance;
/// use clt_engine::config::LaborTables;
/// use clt_engine::models::{DismissalType, SeveranceInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = LaborTables::brazil_2023();
/// let result = calculate_severance(
///     &SeveranceInput {
///         gross_salary: Decimal::from_str("3000").unwrap(),
///         months_worked: 7,
///         indemnified_notice: true,
///         expired_vacation_periods: 0,
///         unpaid_days: 0,
///         dismissal_type: DismissalType::WithoutCause,
///     },
///     &tables,
/// );
///
/// assert_eq!(result.proportional_thirteenth, Decimal::from_str("1750").unwrap());
/// assert_eq!(result.fgts_penalty, Decimal::from_str("672").unwrap());
/// ```
pub fn calculate_severance(input: &SeveranceInput, tables: &LaborTables) -> SeveranceResult {
    if input.gross_salary <= Decimal::ZERO {
        return SeveranceResult {
            salary_balance: Decimal::ZERO,
            proportional_thirteenth: Decimal::ZERO,
            expired_vacation: Decimal::ZERO,
            proportional_vacation: Decimal::ZERO,
            indemnified_notice: Decimal::ZERO,
            fgts_penalty: Decimal::ZERO,
            total: Decimal::ZERO,
        };
    }

    let gross = input.gross_salary;
    let rates = tables.rates();
    let cycle_months = input.months_worked % 12;

    let salary_balance = gross / Decimal::new(30, 0) * Decimal::from(input.unpaid_days);

    let proportional_thirteenth = calculate_thirteenth_proportional(gross, cycle_months);

    let expired_vacation = Decimal::from(input.expired_vacation_periods)
        * (gross + gross / rates.vacation_bonus_divisor);

    let proportional_vacation_base = gross * Decimal::from(cycle_months) / Decimal::new(12, 0);
    let proportional_vacation =
        proportional_vacation_base + proportional_vacation_base / rates.vacation_bonus_divisor;

    let indemnified_notice = if input.indemnified_notice {
        gross
    } else {
        Decimal::ZERO
    };

    let fgts_penalty = if input.dismissal_type == DismissalType::WithoutCause {
        let deposit_balance = gross * rates.fgts_deposit_percent / Decimal::ONE_HUNDRED
            * Decimal::from(input.months_worked);
        deposit_balance * rates.fgts_penalty_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let total = salary_balance
        + proportional_thirteenth
        + expired_vacation
        + proportional_vacation
        + indemnified_notice
        + fgts_penalty;

    SeveranceResult {
        salary_balance,
        proportional_thirteenth,
        expired_vacation,
        proportional_vacation,
        indemnified_notice,
        fgts_penalty,
        total,
    }
}
