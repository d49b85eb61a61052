//! Vacation-pay calculation.
//!
//! Vacation pay is the gross salary, optionally increased by the
//! constitutional one-third bonus and by the value of vacation days sold
//! back to the employer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborTables;
use crate::models::VacationInput;

/// The itemized result of a vacation-pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPayResult {
    /// The vacation base, equal to the gross salary.
    pub base: Decimal,
    /// The constitutional one-third bonus, zero when not requested.
    pub constitutional_third: Decimal,
    /// The value of the days sold back to the employer.
    pub sold_days_value: Decimal,
    /// The sum of all components.
    pub total: Decimal,
}

/// Calculates vacation pay.
///
/// # Arguments
///
/// * `input` - The vacation inputs (salary, days sold, bonus flag)
/// * `tables` - The statutory table set for the tax year
///
/// # Returns
///
/// A [`VacationPayResult`] with each component and the total. A
/// non-positive salary yields an all-zero result.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::calculate_vacation_pay;
/// use clt_engine::config::LaborTables;
/// use clt_engine::models::VacationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = LaborTables::brazil_2023();
/// let result = calculate_vacation_pay(
///     &VacationInput {
///         gross_salary: Decimal::from_str("3000").unwrap(),
///         days_sold: 0,
///         constitutional_third: true,
///     },
///     &tables,
/// );
///
/// assert_eq!(result.total, Decimal::from_str("4000").unwrap());
/// ```
pub fn calculate_vacation_pay(input: &VacationInput, tables: &LaborTables) -> VacationPayResult {
    if input.gross_salary <= Decimal::ZERO {
        return VacationPayResult {
            base: Decimal::ZERO,
            constitutional_third: Decimal::ZERO,
            sold_days_value: Decimal::ZERO,
            total: Decimal::ZERO,
        };
    }

    let base = input.gross_salary;
    let constitutional_third = if input.constitutional_third {
        base / tables.rates().vacation_bonus_divisor
    } else {
        Decimal::ZERO
    };
    let sold_days_value = base / Decimal::new(30, 0) * Decimal::from(input.days_sold);
    let total = base + constitutional_third + sold_days_value;

    VacationPayResult {
        base,
        constitutional_third,
        sold_days_value,
        total,
    }
}
