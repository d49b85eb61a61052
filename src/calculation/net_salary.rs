//! Net-salary calculation.
//!
//! Net salary is the gross salary minus the social-security contribution,
//! the income-tax withholding and any other deductions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborTables;
use crate::models::NetSalaryInput;

use super::{calculate_income_tax, calculate_social_security};

/// The itemized result of a net-salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryResult {
    /// The gross salary the deductions were computed from.
    pub gross_salary: Decimal,
    /// The social-security contribution.
    pub social_security: Decimal,
    /// The income-tax withholding.
    pub income_tax: Decimal,
    /// Other deductions passed through unchanged.
    pub other_deductions: Decimal,
    /// The net salary after all deductions.
    pub net_salary: Decimal,
}

/// Calculates the net salary for a gross salary.
///
/// # Arguments
///
/// * `input` - The net-salary inputs (salary, dependents, other deductions)
/// * `tables` - The statutory table set for the tax year
///
/// # Returns
///
/// A [`NetSalaryResult`] where `net_salary` equals the gross salary minus
/// every listed deduction, with no intermediate rounding.
pub fn calculate_net_salary(input: &NetSalaryInput, tables: &LaborTables) -> NetSalaryResult {
    let social_security = calculate_social_security(input.gross_salary, tables.contribution());
    let income_tax = calculate_income_tax(input.gross_salary, input.dependents, tables);
    let net_salary = input.gross_salary - social_security - income_tax - input.other_deductions;

    NetSalaryResult {
        gross_salary: input.gross_salary,
        social_security,
        income_tax,
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

    #[test]
    fn test_deductions_chain_exactly() {
        let result = calculate_net_salary(
            &NetSalaryInput {
                gross_salary: dec("3000"),
                dependents: 0,
                other_deductions: dec("120.55"),
            },
            &tables(),
        );

        assert_eq!(result.social_security, dec("263.0613"));
        assert_eq!(result.income_tax, dec("46.8704025"));
        assert_eq!(
            result.net_salary,
            result.gross_salary
                - result.social_security
                - result.income_tax
                - result.other_deductions
        );
        assert_eq!(result.net_salary, dec("2569.5182975"));
    }

    #[test]
    fn test_exempt_salary_keeps_contribution_only() {
        let result = calculate_net_salary(
            &NetSalaryInput {
                gross_salary: dec("2000"),
                dependents: 0,
                other_deductions: Decimal::ZERO,
            },
            &tables(),
        );

        assert_eq!(result.income_tax, Decimal::ZERO);
        assert_eq!(result.net_salary, dec("2000") - dec("160.20"));
    }

    #[test]
    fn test_dependents_raise_net() {
        let tables = tables();
        let without = calculate_net_salary(
            &NetSalaryInput {
                gross_salary: dec("4000"),
                dependents: 0,
                other_deductions: Decimal::ZERO,
            },
            &tables,
        );
        let with = calculate_net_salary(
            &NetSalaryInput {
                gross_salary: dec("4000"),
                dependents: 2,
                other_deductions: Decimal::ZERO,
            },
            &tables,
        );

        assert!(with.net_salary > without.net_salary);
        assert_eq!(with.social_security, without.social_security);
    }

    #[test]
    fn test_zero_gross_yields_zero_deductions() {
        let result = calculate_net_salary(
            &NetSalaryInput {
                gross_salary: Decimal::ZERO,
                dependents: 0,
                other_deductions: Decimal::ZERO,
            },
            &tables(),
        );

        assert_eq!(result.social_security, Decimal::ZERO);
        assert_eq!(result.income_tax, Decimal::ZERO);
        assert_eq!(result.net_salary, Decimal::ZERO);
    }
}
