//! Core data models for the labor calculation engine.
//!
//! This module contains the domain enums and calculation input structures
//! used throughout the engine.

mod dismissal;
mod payroll;
mod roster;
mod severance;
mod unemployment;

pub use dismissal::DismissalType;
pub use payroll::{DomesticWorkerInput, NetSalaryInput, OvertimeInput, VacationInput};
pub use roster::{DayStatus, RosterEntry, RosterRequest, ShiftPattern};
pub use severance::SeveranceInput;
pub use unemployment::UnemploymentInput;
