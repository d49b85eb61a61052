//! Income-tax (IRRF) withholding calculation.
//!
//! Withholding is computed on a taxable base: the gross salary minus the
//! social-security contribution and a fixed deduction per dependent. The
//! base selects a single bracket (the first whose upper limit is at or
//! above the base) and the tax is the base times that bracket's rate minus
//! the bracket's fixed deduction, floored at zero.

use rust_decimal::Decimal;

use crate::config::LaborTables;

use super::calculate_social_security;

/// Calculates the monthly income-tax withholding for a gross salary.
///
/// # Arguments
///
/// * `gross_salary` - The monthly gross salary
/// * `dependents` - The number of dependents for tax purposes
/// * `tables` - The statutory table set for the tax year
///
/// # Returns
///
/// The withholding amount, never negative. A non-positive salary or a
/// non-positive taxable base yields zero.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::calculate_income_tax;
/// use clt_engine::config::LaborTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = LaborTables::brazil_2023();
///
/// // Base falls below the first bracket limit: exempt
/// let tax = calculate_income_tax(Decimal::from_str("2000").unwrap(), 0, &tables);
/// assert_eq!(tax, Decimal::ZERO);
///
/// // Withholding shrinks as dependents increase
/// let without = calculate_income_tax(Decimal::from_str("3000").unwrap(), 0, &tables);
/// let with = calculate_income_tax(Decimal::from_str("3000").unwrap(), 2, &tables);
/// assert!(with < without);
/// ```
pub fn calculate_income_tax(gross_salary: Decimal, dependents: u32, tables: &LaborTables) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let contribution = calculate_social_security(gross_salary, tables.contribution());
    let dependent_deduction = tables.income_tax().dependent_deduction * Decimal::from(dependents);
    let base = gross_salary - contribution - dependent_deduction;

    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let bracket = tables.income_tax().bracket_for(base);
    let tax = base * bracket.rate_percent / Decimal::ONE_HUNDRED - bracket.deduction;

    tax.max(Decimal::ZERO)
}
