use std::fmt;
use std::ops::{Add, Sub};

use num_integer::Integer;
use thiserror::Error;

use crate::div_rem::RemFloor;
use crate::gregorian_normalized_date::GregorianNormalizedDate;
use crate::{GregorianDate, Weekday};

const MIN_ISO_YEAR: i32 = -9999;
const MAX_ISO_YEAR: i32 = 9999;
const MAX_ISO_WEEK: u8 = 53;
const MAX_DAY_OFFSET: u8 = 6;
const DAYS_PER_WEEK: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRangeField {
    Year,
    Week,
    DayOffset,
}

impl fmt::Display for OutOfRangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutOfRangeField::Year => "ISO year",
            OutOfRangeField::Week => "ISO week",
            OutOfRangeField::DayOffset => "day offset",
        })
    }
}

/// A component passed to [`ISOWeekDate::new`] was outside its valid range.
///
/// `min` and `max` describe the range that applied to `value`. For a week number this is the
/// number of weeks in `year` when the year has only 52 of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} {value} is out of range for ISO year {year} (valid range {min}..={max})")]
pub struct OutOfRange {
    pub field: OutOfRangeField,
    pub value: i32,
    pub year: i32,
    pub min: i32,
    pub max: i32,
}

/// A date in the ISO 8601 week-date calendar.
///
/// Weeks start on Monday, and week 1 of a year is the week containing that year's first
/// Thursday. The ISO year of a date can therefore differ from its Gregorian year during the
/// first and last few days of a Gregorian year: 2024-12-30 is `2025-W01-0`, and 2021-01-03 is
/// `2020-W53-6`.
///
/// Values are ordered by `(iso_year, iso_week, day_offset)`, which coincides with the
/// chronological order of the corresponding Gregorian dates. The supported range is
/// `-9999-W01-0` to `9999-W52-4`, which maps exactly onto [`GregorianDate::MIN`] and
/// [`GregorianDate::MAX`].
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct ISOWeekDate {
    // Field order defines the derived ordering.
    iso_year: i32,
    iso_week: u8,
    day_offset: u8,
}

impl ISOWeekDate {
    /// -9999-01-01, a Monday.
    pub const MIN: ISOWeekDate = ISOWeekDate {
        iso_year: MIN_ISO_YEAR,
        iso_week: 1,
        day_offset: 0,
    };
    /// 9999-12-31, a Friday.
    pub const MAX: ISOWeekDate = ISOWeekDate {
        iso_year: MAX_ISO_YEAR,
        iso_week: 52,
        day_offset: 4,
    };

    /// Create a week date from its components. `day_offset` counts from Monday (0) to
    /// Sunday (6).
    ///
    /// Fails if `week` is not in `1..=53`, if `day_offset` is not in `0..=6`, or if `week` is 53
    /// and `year` only has 52 weeks.
    pub fn new(year: i32, week: i32, day_offset: i32) -> Result<Self, OutOfRange> {
        let out_of_range = |field, value, min, max| {
            log::debug!("rejecting ISO week date {year}-W{week}-{day_offset}: {field} {value}");
            OutOfRange {
                field,
                value,
                year,
                min,
                max,
            }
        };

        if !(MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&year) {
            return Err(out_of_range(
                OutOfRangeField::Year,
                year,
                MIN_ISO_YEAR,
                MAX_ISO_YEAR,
            ));
        }
        if !(1..=MAX_ISO_WEEK as i32).contains(&week) {
            return Err(out_of_range(
                OutOfRangeField::Week,
                week,
                1,
                MAX_ISO_WEEK as i32,
            ));
        }
        if !(0..=MAX_DAY_OFFSET as i32).contains(&day_offset) {
            return Err(out_of_range(
                OutOfRangeField::DayOffset,
                day_offset,
                0,
                MAX_DAY_OFFSET as i32,
            ));
        }
        let weeks_in_year = weeks_in_iso_year(year) as i32;
        if week > weeks_in_year {
            return Err(out_of_range(OutOfRangeField::Week, week, 1, weeks_in_year));
        }

        let date = ISOWeekDate {
            iso_year: year,
            iso_week: week as u8,
            day_offset: day_offset as u8,
        };
        // Only the last few days of week 52 in 9999 fall past the end of the Gregorian range.
        if date > ISOWeekDate::MAX {
            return Err(out_of_range(
                OutOfRangeField::DayOffset,
                day_offset,
                0,
                ISOWeekDate::MAX.day_offset as i32,
            ));
        }
        Ok(date)
    }

    pub fn from_weekday(year: i32, week: i32, weekday: Weekday) -> Result<Self, OutOfRange> {
        ISOWeekDate::new(year, week, weekday.to_monday_zero_offset() as i32)
    }

    /// Never fails: every Gregorian date has exactly one ISO week date.
    pub fn from_gregorian_date(date: GregorianDate) -> Self {
        let (iso_year, iso_week, day_offset) = iso_week_date_from_day(date.days());
        let result = ISOWeekDate {
            iso_year,
            iso_week,
            day_offset,
        };
        log::trace!("{date} is {result}");
        result
    }

    pub fn to_gregorian_date(self) -> GregorianDate {
        let day = iso_week_start(self.iso_year)
            + (self.iso_week as i32 - 1) * DAYS_PER_WEEK
            + self.day_offset as i32;
        let date = GregorianDate::from_days_since_epoch(day as i64)
            .expect("ISO week dates are validated to lie within the Gregorian range");
        log::trace!("{self} is {date}");
        date
    }

    /// The ISO week-numbering year. May differ from the Gregorian year of the same date.
    pub fn iso_year(self) -> i32 {
        self.iso_year
    }

    /// The week of the year, from 1 to 52 or 53.
    pub fn iso_week(self) -> u8 {
        self.iso_week
    }

    /// Days since Monday, from 0 to 6.
    pub fn day_offset(self) -> u8 {
        self.day_offset
    }

    pub fn weekday(self) -> Weekday {
        match Weekday::from_monday_zero_offset(self.day_offset) {
            Some(weekday) => weekday,
            None => unreachable!("day offset {} is validated on construction", self.day_offset),
        }
    }

    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.to_gregorian_date()
            .checked_add_days(days)
            .map(ISOWeekDate::from_gregorian_date)
    }

    pub fn checked_add_weeks(self, weeks: i64) -> Option<Self> {
        self.checked_add_days(weeks.checked_mul(DAYS_PER_WEEK as i64)?)
    }

    /// Add (or, if negative, subtract) a number of days.
    ///
    /// Panics if the result falls outside [`ISOWeekDate::MIN`] and [`ISOWeekDate::MAX`].
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days).expect("ISO week date arithmetic overflow")
    }

    /// Same as `add_days(7 * weeks)`.
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.checked_add_weeks(weeks).expect("ISO week date arithmetic overflow")
    }

    /// The signed number of days from `self` to `other`.
    pub fn days_until(self, other: ISOWeekDate) -> i64 {
        other.to_gregorian_date() - self.to_gregorian_date()
    }
}

/// Number of ISO weeks, 52 or 53, in the given ISO week-numbering year.
///
/// December 31 belongs either to the last week of its own year or to week 1 of the next one.
/// In the first case its week number is the answer, in the second the year has 52 weeks.
pub fn weeks_in_iso_year(year: i32) -> u8 {
    // A 400-year cycle is a whole number of weeks, so the week layout repeats with it. Reducing
    // the year into a single cycle keeps the day arithmetic small for any i32.
    let year = 2000 + year.rem_floor(400);
    let dec_31 = GregorianNormalizedDate::from_date(year, 12, 31).to_day();
    let (iso_year, iso_week, _) = iso_week_date_from_day(dec_31);
    if iso_year == year {
        iso_week
    } else {
        52
    }
}

/// Day number (since 1970-01-01) of the Monday that starts week 1 of `iso_year`.
fn iso_week_start(iso_year: i32) -> i32 {
    // January 4 is always in week 1, because week 1 holds the year's first Thursday.
    let jan_4 = GregorianNormalizedDate::from_date(iso_year, 1, 4).to_day();
    jan_4 - Weekday::from_days_since_epoch(jan_4).to_monday_zero_offset() as i32
}

/// Split a day number into `(iso_year, iso_week, day_offset)`.
fn iso_week_date_from_day(day: i32) -> (i32, u8, u8) {
    let day_offset = Weekday::from_days_since_epoch(day).to_monday_zero_offset();
    // A week belongs to the year its Thursday falls in.
    let thursday = day + 3 - day_offset as i32;
    let (iso_year, _, _) = GregorianNormalizedDate::from_day(thursday).to_date();
    let iso_week = Integer::div_floor(&(day - iso_week_start(iso_year)), &DAYS_PER_WEEK) + 1;
    (iso_year, iso_week as u8, day_offset)
}

impl From<GregorianDate> for ISOWeekDate {
    fn from(date: GregorianDate) -> Self {
        ISOWeekDate::from_gregorian_date(date)
    }
}

impl From<ISOWeekDate> for GregorianDate {
    fn from(date: ISOWeekDate) -> Self {
        date.to_gregorian_date()
    }
}

impl Add<i64> for ISOWeekDate {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for ISOWeekDate {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        let days = days.checked_neg().expect("ISO week date arithmetic overflow");
        self.add_days(days)
    }
}

impl Sub for ISOWeekDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        rhs.days_until(self)
    }
}

/// Formats as e.g. `2025-W01-0 (Mon)`.
impl fmt::Display for ISOWeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-W{:02}-{} ({})",
            self.iso_year,
            self.iso_week,
            self.day_offset,
            self.weekday()
        )
    }
}
