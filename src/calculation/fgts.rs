//! FGTS deposit calculation.

use rust_decimal::Decimal;

use crate::config::LaborTables;

/// Calculates the monthly employer FGTS deposit for a gross salary.
///
/// The deposit is a fixed percentage of the gross salary (8% under the
/// 2023 tables). A non-positive salary yields zero.
pub fn calculate_fgts_deposit(gross_salary: Decimal, tables: &LaborTables) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    gross_salary * tables.rates().fgts_deposit_percent / Decimal::ONE_HUNDRED
}
