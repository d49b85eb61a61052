//! Overtime-pay calculation.
//!
//! The normal hourly rate is derived from the gross salary and the
//! contracted monthly hours; overtime hours are paid at that rate plus a
//! percentage surcharge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OvertimeInput;

/// The result of an overtime-pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePayResult {
    /// The derived normal hourly rate.
    pub normal_hourly_rate: Decimal,
    /// The hourly rate with the overtime surcharge applied.
    pub overtime_hourly_rate: Decimal,
    /// The total overtime pay.
    pub total: Decimal,
}

/// Calculates overtime pay.
///
/// # Arguments
///
/// * `input` - The overtime inputs (salary, hours, surcharge, contracted
///   days and hours)
///
/// # Returns
///
/// An [`OvertimePayResult`] with the derived rates and the total. A
/// non-positive salary or non-positive contracted monthly hours yields an
/// all-zero result.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::calculate_overtime_pay;
/// use clt_engine::models::OvertimeInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_overtime_pay(&OvertimeInput {
///     gross_salary: Decimal::from_str("2400").unwrap(),
///     overtime_hours: Decimal::from_str("10").unwrap(),
///     additional_percent: Decimal::from_str("50").unwrap(),
///     days_per_month: Decimal::from_str("30").unwrap(),
///     hours_per_day: Decimal::from_str("8").unwrap(),
/// });
///
/// // 2400 / 240 = 10/h, surcharged to 15/h, 10 hours
/// assert_eq!(result.total, Decimal::from_str("150").unwrap());
/// ```
pub fn calculate_overtime_pay(input: &OvertimeInput) -> OvertimePayResult {
    let monthly_hours = input.days_per_month * input.hours_per_day;

    if input.gross_salary <= Decimal::ZERO || monthly_hours <= Decimal::ZERO {
        return OvertimePayResult {
            normal_hourly_rate: Decimal::ZERO,
            overtime_hourly_rate: Decimal::ZERO,
            total: Decimal::ZERO,
        };
    }

    let normal_hourly_rate = input.gross_salary / monthly_hours;
    let overtime_hourly_rate =
        normal_hourly_rate * (Decimal::ONE + input.additional_percent / Decimal::ONE_HUNDRED);
    let total = overtime_hourly_rate * input.overtime_hours;

    OvertimePayResult {
        normal_hourly_rate,
        overtime_hourly_rate,
        total,
    }
}
