//! Domestic-worker net-salary calculation.
//!
//! Domestic workers use the same contribution and withholding tables as
//! other employees; the extra wrinkle is the transit-voucher deduction,
//! capped at a fixed percentage of the gross salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborTables;
use crate::models::DomesticWorkerInput;

use super::{calculate_income_tax, calculate_social_security};

/// The itemized result of a domestic-worker net-salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticNetSalaryResult {
    /// The gross salary the deductions were computed from.
    pub gross_salary: Decimal,
    /// The social-security contribution.
    pub social_security: Decimal,
    /// The income-tax withholding (computed without dependents).
    pub income_tax: Decimal,
    /// The transit-voucher deduction after the statutory cap.
    pub transit_voucher_deduction: Decimal,
    /// Other deductions passed through unchanged.
    pub other_deductions: Decimal,
    /// The net salary after all deductions.
    pub net_salary: Decimal,
}

/// Calculates the net salary of a domestic worker.
///
/// The transit-voucher deduction is the advanced voucher value, capped at
/// the statutory percentage of the gross salary (6% under the 2023
/// tables); no deduction applies when no voucher was advanced.
///
/// # Arguments
///
/// * `input` - The domestic-worker inputs
/// * `tables` - The statutory table set for the tax year
pub fn calculate_domestic_net_salary(
    input: &DomesticWorkerInput,
    tables: &LaborTables,
) -> DomesticNetSalaryResult {
    let social_security = calculate_social_security(input.gross_salary, tables.contribution());
    let income_tax = calculate_income_tax(input.gross_salary, 0, tables);

    let transit_voucher_deduction = if input.transit_voucher > Decimal::ZERO {
        let cap =
            input.gross_salary * tables.rates().transit_voucher_cap_percent / Decimal::ONE_HUNDRED;
        input.transit_voucher.min(cap)
    } else {
        Decimal::ZERO
    };

    let net_salary = input.gross_salary
        - social_security
        - income_tax
        - transit_voucher_deduction
        - input.other_deductions;

    DomesticNetSalaryResult {
        gross_salary: input.gross_salary,
        social_security,
        income_tax,
        transit_voucher_deduction,
        other_deductions: input.other_deductions,
        net_salary,
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

    fn input(gross: &str, voucher: &str) -> DomesticWorkerInput {
        DomesticWorkerInput {
            gross_salary: dec(gross),
            days_per_month: dec("30"),
            transit_voucher: dec(voucher),
            other_deductions: Decimal::ZERO,
        }
    }

    #[test]
    fn test_voucher_below_cap_deducted_in_full() {
        // Cap is 6% of 1500 = 90.
        let result = calculate_domestic_net_salary(&input("1500", "50"), &tables());
        assert_eq!(result.transit_voucher_deduction, dec("50"));
    }

    #[test]
    fn test_voucher_above_cap_is_capped() {
        let result = calculate_domestic_net_salary(&input("1500", "200"), &tables());
        assert_eq!(result.transit_voucher_deduction, dec("90"));
    }

    #[test]
    fn test_no_voucher_no_deduction() {
        let result = calculate_domestic_net_salary(&input("1500", "0"), &tables());
        assert_eq!(result.transit_voucher_deduction, Decimal::ZERO);
    }

    #[test]
    fn test_net_chain_exact() {
        let mut input = input("1500", "200");
        input.other_deductions = dec("35");

        let result = calculate_domestic_net_salary(&input, &tables());

        // Contribution: 99 + (1500 - 1320) x 9% = 115.20; exempt from
        // income tax.
        assert_eq!(result.social_security, dec("115.20"));
        assert_eq!(result.income_tax, Decimal::ZERO);
        assert_eq!(
            result.net_salary,
            dec("1500") - dec("115.20") - dec("90") - dec("35")
        );
    }

    #[test]
    fn test_income_tax_ignores_dependents() {
        // The domestic-worker computation always withholds without
        // dependent deductions.
        let result = calculate_domestic_net_salary(&input("3000", "0"), &tables());
        assert_eq!(result.income_tax, dec("46.8704025"));
    }
}
