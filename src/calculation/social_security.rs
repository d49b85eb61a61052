//! Social-security (INSS) contribution calculation.
//!
//! The contribution is progressive and marginal: each bracket taxes only
//! the salary slice between the previous bracket's limit and its own, so
//! the mapping from salary to contribution is continuous and
//! non-decreasing. Salaries at or above the final bracket's limit owe a
//! fixed ceiling contribution instead of the marginal sum.

use rust_decimal::Decimal;

use crate::config::ContributionTable;

/// Calculates the monthly social-security contribution for a gross salary.
///
/// # Arguments
///
/// * `gross_salary` - The monthly gross salary
/// * `table` - The contribution bracket table for the tax year
///
/// # Returns
///
/// The contribution amount. A non-positive salary yields zero; a salary at
/// or above the final bracket's limit yields the table's fixed ceiling.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::calculate_social_security;
/// use clt_engine::config::LaborTables;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = LaborTables::brazil_2023();
///
/// // Entirely inside the first bracket: 1000 x 7.5%
/// let contribution = calculate_social_security(
///     Decimal::from_str("1000").unwrap(),
///     tables.contribution(),
/// );
/// assert_eq!(contribution, Decimal::from_str("75").unwrap());
///
/// // Above the final limit: capped
/// let capped = calculate_social_security(
///     Decimal::from_str("20000").unwrap(),
///     tables.contribution(),
/// );
/// assert_eq!(capped, Decimal::from_str("876.97").unwrap());
/// ```
pub fn calculate_social_security(gross_salary: Decimal, table: &ContributionTable) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // Contribution caps at a fixed value once the salary reaches the top
    // of the table.
    if let Some(last) = table.brackets.last() {
        if gross_salary >= last.upper_limit {
            return table.ceiling;
        }
    }

    let mut contribution = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in &table.brackets {
        if gross_salary <= previous_limit {
            break;
        }
        let taxed_slice = gross_salary.min(bracket.upper_limit) - previous_limit;
        contribution += taxed_slice * bracket.rate_percent / Decimal::ONE_HUNDRED;
        previous_limit = bracket.upper_limit;
    }

    contribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaborTables;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tables() -> LaborTables {
        LaborTables::brazil_2023()
    }

    #[test]
    fn test_zero_salary_yields_zero() {
        let tables = tables();
        assert_eq!(
            calculate_social_security(Decimal::ZERO, tables.contribution()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_salary_yields_zero() {
        let tables = tables();
        assert_eq!(
            calculate_social_security(dec("-500"), tables.contribution()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_salary_within_first_bracket() {
        let tables = tables();
        // 1000 x 7.5%
        assert_eq!(
            calculate_social_security(dec("1000"), tables.contribution()),
            dec("75")
        );
    }

    #[test]
    fn test_salary_at_first_bracket_limit() {
        let tables = tables();
        // 1320 x 7.5%
        assert_eq!(
            calculate_social_security(dec("1320.00"), tables.contribution()),
            dec("99")
        );
    }

    #[test]
    fn test_salary_spanning_two_brackets() {
        let tables = tables();
        // 99 + (2000 - 1320) x 9%
        assert_eq!(
            calculate_social_security(dec("2000"), tables.contribution()),
            dec("160.20")
        );
    }

    #[test]
    fn test_salary_spanning_three_brackets() {
        let tables = tables();
        // 99 + 1251.29 x 9% + (3000 - 2571.29) x 12%
        assert_eq!(
            calculate_social_security(dec("3000"), tables.contribution()),
            dec("263.0613")
        );
    }

    #[test]
    fn test_continuity_across_bracket_boundary() {
        let tables = tables();
        let at_limit = calculate_social_security(dec("1320.00"), tables.contribution());
        let just_above = calculate_social_security(dec("1320.01"), tables.contribution());

        // One extra cent taxed at the second bracket's 9% rate.
        assert_eq!(just_above - at_limit, dec("0.0009"));
    }

    #[test]
    fn test_salary_at_final_limit_yields_ceiling() {
        let tables = tables();
        assert_eq!(
            calculate_social_security(dec("7507.49"), tables.contribution()),
            dec("876.97")
        );
    }

    #[test]
    fn test_salary_above_final_limit_yields_ceiling() {
        let tables = tables();
        assert_eq!(
            calculate_social_security(dec("10000"), tables.contribution()),
            dec("876.97")
        );
        assert_eq!(
            calculate_social_security(dec("250000"), tables.contribution()),
            dec("876.97")
        );
    }

    #[test]
    fn test_non_decreasing_over_sample_points() {
        let tables = tables();
        let samples = [
            "0", "500", "1319.99", "1320.00", "1320.01", "2571.29", "3856.94", "5000", "7507.48",
            "7507.49", "12000",
        ];

        let mut previous = Decimal::ZERO;
        for sample in samples {
            let contribution = calculate_social_security(dec(sample), tables.contribution());
            assert!(
                contribution >= previous,
                "contribution decreased at salary {}",
                sample
            );
            previous = contribution;
        }
    }
}
