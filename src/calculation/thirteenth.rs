//! Thirteenth-salary calculation.

use rust_decimal::Decimal;

/// Calculates the full thirteenth salary, which equals one gross salary.
///
/// A non-positive salary yields zero.
pub fn calculate_thirteenth_full(gross_salary: Decimal) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    gross_salary
}

/// Calculates the thirteenth salary prorated by months worked.
///
/// Each month worked in the year earns one twelfth of the gross salary.
///
/// # Arguments
///
/// * `gross_salary` - The monthly gross salary
/// * `months_worked` - Months worked in the current year (0-12)
pub fn calculate_thirteenth_proportional(gross_salary: Decimal, months_worked: u32) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    gross_salary * Decimal::from(months_worked) / Decimal::new(12, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_equals_gross() {
        assert_eq!(calculate_thirteenth_full(dec("2750.40")), dec("2750.40"));
    }

    #[test]
    fn test_full_non_positive_yields_zero() {
        assert_eq!(calculate_thirteenth_full(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_thirteenth_full(dec("-1")), Decimal::ZERO);
    }

    #[test]
    fn test_proportional_seven_months() {
        // 3000 x 7 / 12
        assert_eq!(calculate_thirteenth_proportional(dec("3000"), 7), dec("1750"));
    }

    #[test]
    fn test_proportional_twelve_months_equals_full() {
        assert_eq!(calculate_thirteenth_proportional(dec("3000"), 12), dec("3000"));
    }

    #[test]
    fn test_proportional_zero_months_yields_zero() {
        assert_eq!(calculate_thirteenth_proportional(dec("3000"), 0), Decimal::ZERO);
    }

    #[test]
    fn test_proportional_non_positive_salary_yields_zero() {
        assert_eq!(calculate_thirteenth_proportional(dec("-3000"), 6), Decimal::ZERO);
    }
}
