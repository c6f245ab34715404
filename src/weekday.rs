use std::fmt;

use crate::div_rem::RemFloor;

/// A day of the week. Weeks start on Monday, as in ISO 8601.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

// Indexed by the Monday-zero offset. Both conversion directions go through this table.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

const ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// 1970-01-01 was a Thursday.
const EPOCH_WEEKDAY_OFFSET: i32 = 3;

impl Weekday {
    /// Returns `None` unless `offset` is in `0..=6`.
    pub fn from_monday_zero_offset(offset: u8) -> Option<Weekday> {
        WEEKDAYS.get(offset as usize).copied()
    }

    pub fn to_monday_zero_offset(self) -> u8 {
        // Declaration order matches WEEKDAYS.
        self as u8
    }

    /// Three-letter English abbreviation, e.g. `Mon`.
    pub fn abbreviation(self) -> &'static str {
        ABBREVIATIONS[self.to_monday_zero_offset() as usize]
    }

    pub(crate) fn from_days_since_epoch(days: i32) -> Weekday {
        let offset = (days + EPOCH_WEEKDAY_OFFSET).rem_floor(7);
        WEEKDAYS[offset as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
