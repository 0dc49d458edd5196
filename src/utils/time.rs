//! # Calendar Stamps
//!
//! Wall-clock snapshots formatted for message logs, high-score tables and
//! save file names.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar field granularity, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeType {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// A broken-down local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeData {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Formats the stamp down to the `lowest` field.
    ///
    /// With separators the layout is `YYYY-MM-DD hh:mm:ss`; without them it is
    /// `YYYY-MM-DD_hh-mm-ss`, which is safe to use in file names.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::{TimeData, TimeType};
    ///
    /// let t = TimeData::new(2024, 3, 7, 9, 5, 1);
    /// assert_eq!(t.time_str(TimeType::Second, true), "2024-03-07 09:05:01");
    /// assert_eq!(t.time_str(TimeType::Second, false), "2024-03-07_09-05-01");
    /// assert_eq!(t.time_str(TimeType::Day, true), "2024-03-07");
    /// ```
    pub fn time_str(&self, lowest: TimeType, add_separators: bool) -> String {
        let mut ret = self.year.to_string();

        if lowest >= TimeType::Month {
            ret.push_str(&format!("-{:02}", self.month));
        }

        if lowest >= TimeType::Day {
            ret.push_str(&format!("-{:02}", self.day));
        }

        let (date_time_sep, time_sep) = if add_separators { (' ', ':') } else { ('_', '-') };

        if lowest >= TimeType::Hour {
            ret.push_str(&format!("{}{:02}", date_time_sep, self.hour));
        }

        if lowest >= TimeType::Minute {
            ret.push_str(&format!("{}{:02}", time_sep, self.minute));
        }

        if lowest >= TimeType::Second {
            ret.push_str(&format!("{}{:02}", time_sep, self.second));
        }

        ret
    }
}

impl fmt::Display for TimeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time_str(TimeType::Second, true))
    }
}

impl From<NaiveDateTime> for TimeData {
    fn from(t: NaiveDateTime) -> Self {
        Self::new(t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second())
    }
}

/// The current local wall-clock time.
pub fn current_time() -> TimeData {
    Local::now().naive_local().into()
}
