//! Calculation logic for the labor calculation engine.
//!
//! This module contains all the calculation functions for statutory labor
//! entitlements, including the FGTS deposit, full and proportional
//! thirteenth salary, vacation pay with the constitutional third, overtime
//! pay, the progressive social-security contribution, progressive
//! income-tax withholding, net salary, domestic-worker net salary,
//! severance packages, unemployment-insurance benefits and work-shift
//! roster generation.

mod domestic;
mod fgts;
mod income_tax;
mod net_salary;
mod overtime;
mod roster;
mod severance;
mod social_security;
mod thirteenth;
mod unemployment;
mod vacation;

pub use domestic::{DomesticNetSalaryResult, calculate_domestic_net_salary};
pub use fgts::calculate_fgts_deposit;
pub use income_tax::calculate_income_tax;
pub use net_salary::{NetSalaryResult, calculate_net_salary};
pub use overtime::{OvertimePayResult, calculate_overtime_pay};
pub use roster::{day_status, generate_roster};
pub use severance::{SeveranceResult, calculate_severance};
pub use social_security::calculate_social_security;
pub use thirteenth::{calculate_thirteenth_full, calculate_thirteenth_proportional};
pub use unemployment::{UnemploymentResult, calculate_unemployment_insurance};
pub use vacation::{VacationPayResult, calculate_vacation_pay};
