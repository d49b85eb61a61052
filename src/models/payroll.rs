//! Input structures for the composite payroll calculations.
//!
//! Every optional knob is an explicit named field with a serde default, so
//! callers never rely on positional argument order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_days_per_month() -> Decimal {
    Decimal::new(30, 0)
}

fn default_hours_per_day() -> Decimal {
    Decimal::new(8, 0)
}

fn default_additional_percent() -> Decimal {
    Decimal::new(50, 0)
}

fn default_true() -> bool {
    true
}

/// Inputs for the vacation-pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationInput {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// Vacation days sold back to the employer (0-10).
    #[serde(default)]
    pub days_sold: u32,
    /// Whether to add the constitutional one-third bonus. Defaults to true.
    #[serde(default = "default_true")]
    pub constitutional_third: bool,
}

/// Inputs for the overtime-pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeInput {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// The number of overtime hours worked.
    pub overtime_hours: Decimal,
    /// The overtime surcharge in percent. Defaults to 50.
    #[serde(default = "default_additional_percent")]
    pub additional_percent: Decimal,
    /// Days worked per month. Defaults to 30.
    #[serde(default = "default_days_per_month")]
    pub days_per_month: Decimal,
    /// Contracted hours per day. Defaults to 8.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal,
}

/// Inputs for the net-salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSalaryInput {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// The number of dependents for income-tax purposes. Defaults to 0.
    #[serde(default)]
    pub dependents: u32,
    /// Other payroll deductions. Defaults to 0.
    #[serde(default)]
    pub other_deductions: Decimal,
}

/// Inputs for the domestic-worker net-salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomesticWorkerInput {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// Days worked per month. Defaults to 30.
    #[serde(default = "default_days_per_month")]
    pub days_per_month: Decimal,
    /// The monthly transit-voucher value advanced by the employer.
    /// Defaults to 0.
    #[serde(default)]
    pub transit_voucher: Decimal,
    /// Other payroll deductions. Defaults to 0.
    #[serde(default)]
    pub other_deductions: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_vacation_input_defaults() {
        let json = r#"{"gross_salary": "3000.00"}"#;
        let input: VacationInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.gross_salary, dec("3000.00"));
        assert_eq!(input.days_sold, 0);
        assert!(input.constitutional_third);
    }

    #[test]
    fn test_overtime_input_defaults() {
        let json = r#"{"gross_salary": "2400.00", "overtime_hours": "10"}"#;
        let input: OvertimeInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.additional_percent, dec("50"));
        assert_eq!(input.days_per_month, dec("30"));
        assert_eq!(input.hours_per_day, dec("8"));
    }

    #[test]
    fn test_overtime_input_overrides() {
        let json = r#"{
            "gross_salary": "2400.00",
            "overtime_hours": "10",
            "additional_percent": "100",
            "days_per_month": "25",
            "hours_per_day": "6"
        }"#;
        let input: OvertimeInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.additional_percent, dec("100"));
        assert_eq!(input.days_per_month, dec("25"));
        assert_eq!(input.hours_per_day, dec("6"));
    }

    #[test]
    fn test_net_salary_input_defaults() {
        let json = r#"{"gross_salary": "5000.00"}"#;
        let input: NetSalaryInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.dependents, 0);
        assert_eq!(input.other_deductions, Decimal::ZERO);
    }

    #[test]
    fn test_domestic_worker_input_defaults() {
        let json = r#"{"gross_salary": "1500.00"}"#;
        let input: DomesticWorkerInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.days_per_month, dec("30"));
        assert_eq!(input.transit_voucher, Decimal::ZERO);
        assert_eq!(input.other_deductions, Decimal::ZERO);
    }

    #[test]
    fn test_missing_gross_salary_rejected() {
        let result = serde_json::from_str::<NetSalaryInput>(r#"{"dependents": 2}"#);
        assert!(result.is_err());
    }
}
