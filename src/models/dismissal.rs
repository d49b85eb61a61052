//! Dismissal type model.

use serde::{Deserialize, Serialize};

/// The way an employment contract ended.
///
/// The dismissal type determines which severance components are owed; in
/// particular, the FGTS penalty is due only on dismissal without cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalType {
    /// The employee resigned.
    Resignation,
    /// The employer dismissed the employee without cause.
    WithoutCause,
    /// The employer dismissed the employee with cause.
    WithCause,
}

impl Default for DismissalType {
    fn default() -> Self {
        DismissalType::WithoutCause
    }
}

impl std::fmt::Display for DismissalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DismissalType::Resignation => write!(f, "resignation"),
            DismissalType::WithoutCause => write!(f, "without cause"),
            DismissalType::WithCause => write!(f, "with cause"),
        }
    }
}
