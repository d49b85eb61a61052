//! Shift-roster models.
//!
//! This module defines the roster request, the supported schedule
//! patterns and the per-day roster entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A repeating work-shift pattern.
///
/// Calendar-aligned patterns (`5x2`, `6x1`) decide each day from its day
/// of week; cyclic patterns (`12x36`, `4x2`) decide each day from its
/// offset within the roster, independent of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftPattern {
    /// Five working days with the weekend off.
    #[serde(rename = "5x2")]
    FiveByTwo,
    /// Six working days with Sunday off.
    #[serde(rename = "6x1")]
    SixByOne,
    /// Twelve hours on, thirty-six off: working and off days alternate.
    #[serde(rename = "12x36")]
    TwelveByThirtySix,
    /// Four working days followed by two off days.
    #[serde(rename = "4x2")]
    FourByTwo,
}

impl std::fmt::Display for ShiftPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftPattern::FiveByTwo => write!(f, "5x2"),
            ShiftPattern::SixByOne => write!(f, "6x1"),
            ShiftPattern::TwelveByThirtySix => write!(f, "12x36"),
            ShiftPattern::FourByTwo => write!(f, "4x2"),
        }
    }
}

/// Whether a roster day is worked or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A working day.
    Working,
    /// A rest day.
    Off,
}

/// A single day of a generated roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The calendar date of this entry.
    pub date: NaiveDate,
    /// Whether the day is worked or off.
    pub status: DayStatus,
}

/// Inputs for the roster generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRequest {
    /// The schedule pattern to project.
    pub pattern: ShiftPattern,
    /// The first day of the roster.
    pub start_date: NaiveDate,
    /// The number of days to project, starting at `start_date`.
    pub total_days: u32,
}
