use std::fmt;
use std::ops::Sub;
use std::str::FromStr;
use std::time::SystemTime;

use num_integer::Integer;
use thiserror::Error;

use crate::gregorian::util::{days_in_month, is_leap_year};
use crate::gregorian_normalized_date::GregorianNormalizedDate;
use crate::{ISOWeekDate, Weekday};

const MIN_YEAR: i32 = -9999;
const MAX_YEAR: i32 = 9999;
// -9999-01-01 and 9999-12-31 as days since 1970-01-01.
const MIN_DAY: i32 = -4_371_587;
const MAX_DAY: i32 = 2_932_896;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GregorianDateError {
    #[error("year {year} is out of range ({}..={})", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange { year: i32 },
    #[error("month {month} is out of range (1..=12)")]
    InvalidMonth { month: u8 },
    #[error("day {day} is out of range for {year:04}-{month:02} (1..={days_in_month})")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        days_in_month: u8,
    },
    #[error("expected a date of the form YYYY-MM-DD, got {input:?}")]
    Malformed { input: String },
}

/// A date in the proleptic Gregorian calendar, from -9999-01-01 to 9999-12-31.
///
/// Stored as a number of days since 1970-01-01, which makes comparison and day arithmetic plain
/// integer operations. Year, month and day are derived on demand.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct GregorianDate {
    days: i32,
}

impl GregorianDate {
    pub const MIN: GregorianDate = GregorianDate { days: MIN_DAY };
    pub const MAX: GregorianDate = GregorianDate { days: MAX_DAY };

    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, GregorianDateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GregorianDateError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(GregorianDateError::InvalidMonth { month });
        }
        let days_in_month = days_in_month(year, month);
        if !(1..=days_in_month).contains(&day) {
            return Err(GregorianDateError::InvalidDay {
                year,
                month,
                day,
                days_in_month,
            });
        }
        let days = GregorianNormalizedDate::from_date(year, month, day).to_day();
        Ok(GregorianDate { days })
    }

    /// Returns `None` if the result would fall outside [`GregorianDate::MIN`] and
    /// [`GregorianDate::MAX`].
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        let days = i32::try_from(days).ok()?;
        if (MIN_DAY..=MAX_DAY).contains(&days) {
            Some(GregorianDate { days })
        } else {
            None
        }
    }

    /// Number of days since 1970-01-01. Negative for earlier dates.
    pub fn days_since_epoch(self) -> i64 {
        self.days as i64
    }

    /// The current date in UTC.
    pub fn today() -> Self {
        let (seconds, _) = system_time_to_unix_seconds(SystemTime::now());
        let days = Integer::div_floor(&seconds, &SECONDS_PER_DAY);
        GregorianDate::from_days_since_epoch(days)
            .expect("the system clock should be within the supported date range")
    }

    pub fn year(self) -> i32 {
        self.to_date().0
    }

    pub fn month(self) -> u8 {
        self.to_date().1
    }

    pub fn day(self) -> u8 {
        self.to_date().2
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_days_since_epoch(self.days)
    }

    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year())
    }

    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let days = self.days_since_epoch().checked_add(days)?;
        GregorianDate::from_days_since_epoch(days)
    }

    /// Panics if the result is outside the supported range. See
    /// [`GregorianDate::checked_add_days`] for a non-panicking alternative.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days).expect("date arithmetic overflow")
    }

    pub fn to_iso_week_date(self) -> ISOWeekDate {
        ISOWeekDate::from_gregorian_date(self)
    }

    pub(crate) fn to_date(self) -> (i32, u8, u8) {
        GregorianNormalizedDate::from_day(self.days).to_date()
    }

    pub(crate) fn days(self) -> i32 {
        self.days
    }
}

/// The signed number of days from `rhs` to `self`.
impl Sub for GregorianDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.days_since_epoch() - rhs.days_since_epoch()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_date();
        if year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", year, month, day)
        }
    }
}

impl FromStr for GregorianDate {
    type Err = GregorianDateError;

    /// Parses the extended ISO 8601 calendar date form, `YYYY-MM-DD` or `-YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GregorianDateError::Malformed {
            input: s.to_string(),
        };
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = rest.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(year), Some(month), Some(day), None) => (year, month, day),
            _ => return Err(malformed()),
        };
        let digits =
            |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(year, 4) || !digits(month, 2) || !digits(day, 2) {
            return Err(malformed());
        }
        // All-digit strings of these lengths always fit.
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u8 = month.parse().map_err(|_| malformed())?;
        let day: u8 = day.parse().map_err(|_| malformed())?;
        GregorianDate::new(if negative { -year } else { year }, month, day)
    }
}

/// Return the number of seconds and nanoseconds since the Unix epoch, ignoring leap seconds.
fn system_time_to_unix_seconds(value: SystemTime) -> (i64, u32) {
    match value.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => (duration.as_secs() as i64, duration.subsec_nanos()),
        Err(err) => {
            // Before the epoch. Round towards negative infinity so that the sub-second part stays
            // positive.
            let duration = err.duration();
            let mut seconds = -(duration.as_secs() as i64);
            let mut nanos = duration.subsec_nanos();
            if nanos != 0 {
                seconds -= 1;
                nanos = 1_000_000_000 - nanos;
            }
            (seconds, nanos)
        }
    }
}
