//! Unemployment-insurance request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for the unemployment-insurance calculation.
///
/// The salary sequence must contain only positive values; callers parse
/// and filter raw user input before building this structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnemploymentInput {
    /// The most recent monthly salaries, newest first or oldest first;
    /// only the mean is used.
    pub salaries: Vec<Decimal>,
    /// Months worked in the qualifying period.
    pub months_worked: u32,
}
