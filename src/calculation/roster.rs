//! Work-shift roster generation.
//!
//! Projects a schedule pattern over consecutive calendar days. Date
//! advancement is delegated to `chrono`, so month and year boundaries
//! roll over correctly.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{DayStatus, RosterEntry, RosterRequest, ShiftPattern};

/// Determines the status of a single roster day.
///
/// Calendar-aligned patterns look only at the day of week; cyclic
/// patterns look only at the 0-based offset from the roster start.
///
/// # Arguments
///
/// * `pattern` - The schedule pattern
/// * `date` - The calendar date of the day
/// * `offset` - The 0-based offset of the day from the roster start
pub fn day_status(pattern: ShiftPattern, date: NaiveDate, offset: u32) -> DayStatus {
    match pattern {
        ShiftPattern::FiveByTwo => match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayStatus::Off,
            _ => DayStatus::Working,
        },
        ShiftPattern::SixByOne => {
            if date.weekday() == Weekday::Sun {
                DayStatus::Off
            } else {
                DayStatus::Working
            }
        }
        ShiftPattern::TwelveByThirtySix => {
            if offset % 2 == 0 {
                DayStatus::Working
            } else {
                DayStatus::Off
            }
        }
        ShiftPattern::FourByTwo => {
            if offset % 6 < 4 {
                DayStatus::Working
            } else {
                DayStatus::Off
            }
        }
    }
}

/// Generates a work-shift roster.
///
/// # Arguments
///
/// * `request` - The pattern, start date and number of days to project
///
/// # Returns
///
/// Exactly `total_days` entries with strictly consecutive calendar dates
/// starting at `start_date`. Generation is pure: identical inputs always
/// produce identical rosters.
///
/// # Examples
///
/// ```
/// use clt_engine::calculation::generate_roster;
/// use clt_engine::models::{DayStatus, RosterRequest, ShiftPattern};
/// use chrono::NaiveDate;
///
/// let roster = generate_roster(&RosterRequest {
///     pattern: ShiftPattern::FourByTwo,
///     start_date: NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
///     total_days: 5,
/// });
///
/// assert_eq!(roster.len(), 5);
/// assert_eq!(roster[0].status, DayStatus::Working);
/// assert_eq!(roster[4].status, DayStatus::Off);
/// // The projection crosses the year boundary.
/// assert_eq!(roster[4].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
/// ```
pub fn generate_roster(request: &RosterRequest) -> Vec<RosterEntry> {
    let mut entries = Vec::with_capacity(request.total_days as usize);
    let mut date = request.start_date;

    for offset in 0..request.total_days {
        entries.push(RosterEntry {
            date,
            status: day_status(request.pattern, date, offset),
        });
        date += Duration::days(1);
    }

    entries
}
