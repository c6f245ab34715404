// The gregorian calendar repeats itself every 400 years. Each cycle has 97 leap years and 303
// normal years, so 97*366 + 303*365 = 146097 days, which is also a whole number of weeks.
//
// Having the leap day somewhere in the middle of a year makes the arithmetic awkward, so we
// shift the start of the year to March 1. The leap day then becomes the last day of the year,
// and the leap year the last year of each quadrennium, century and cycle. That lets the extra
// days fall out as an "overflow" of a clamped division instead of needing special cases. The
// zero point is 2000-03-01, right after the leap day that ends the previous cycle:
//
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29
//
// and the cycle ends with
//
// - 2399-03-01 to 2400-02-29

use crate::div_rem::ClampedDivRem;
use num_integer::Integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GregorianNormalizedDate {
    // Number of 400-year cycles since 2000-03-01.
    cycle: i32,
    // Centuries since the start of the cycle (0-3).
    century: u8,
    // Quadrennia since the start of the century (0-24).
    quadrennium: u8,
    // Years since the start of the quadrennium (0-3).
    year: u8,
    // Days since March 1 (0-365).
    day: u16,
}

const GREGORIAN_CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const GREGORIAN_CENTURY_DAYS: u16 = 24 * 366 + 76 * 365;
#[allow(clippy::identity_op)]
const GREGORIAN_QUADRENNIUM_DAYS: u16 = 3 * 365 + 1 * 366;
const GREGORIAN_YEAR_DAYS: u16 = 365;
const GREGORIAN_CYCLE_YEARS: u16 = 400;
const GREGORIAN_CENTURY_YEARS: u16 = 100;
const GREGORIAN_QUADRENNIUM_YEARS: u16 = 4;

// 11017 days from 1970-01-01 to 2000-03-01.
const GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS: u16 = 11017;
// Index 0 = March.
const GREGORIAN_MONTH_STARTS: [u16; 13] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, 65535];
// Day offset of January 1 in a March-based year.
const JANUARY_FIRST: u16 = 306;

fn month_from_day_offset(day: u16) -> u8 {
    let mut month = (day / 30) as u8;
    if day < GREGORIAN_MONTH_STARTS[month as usize] {
        month -= 1;
    }
    month
}

impl GregorianNormalizedDate {
    /// Convert a number of days since 1970-01-01.
    pub(crate) fn from_day(day: i32) -> Self {
        let day = day - GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS as i32;
        let (cycle, days_into_cycle) = day.div_mod_floor(&(GREGORIAN_CYCLE_DAYS as i32));
        let days_into_cycle = days_into_cycle as u32;

        // The fourth century of a cycle has one more leap year than the first three, so its
        // extra day must stay in that century rather than start a fifth one.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_DAYS as u32, 3_u8);
        let days_into_century = days_into_century as u16;

        // The last quadrennium of a normal century lacks its leap day, which only makes it
        // shorter, so a plain division is enough here.
        let (quadrennium, days_into_quadrennium) =
            days_into_century.div_rem(&GREGORIAN_QUADRENNIUM_DAYS);

        let (year, day) = days_into_quadrennium.clamped_div_rem(GREGORIAN_YEAR_DAYS, 3_u8);

        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium: quadrennium as u8,
            year,
            day,
        }
    }

    /// Number of days since 1970-01-01.
    pub(crate) fn to_day(self) -> i32 {
        self.cycle * GREGORIAN_CYCLE_DAYS as i32
            + self.century as i32 * GREGORIAN_CENTURY_DAYS as i32
            + self.quadrennium as i32 * GREGORIAN_QUADRENNIUM_DAYS as i32
            + self.year as i32 * GREGORIAN_YEAR_DAYS as i32
            + self.day as i32
            + GREGORIAN_NORMALIZED_DATE_OFFSET_DAYS as i32
    }

    /// The caller is responsible for passing a valid date.
    pub(crate) fn from_date(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        debug_assert!((1..=31).contains(&day));

        // Shift to a March-based year, so January and February belong to the previous one.
        let (year, month) = if month < 3 {
            (year - 1, month + 9)
        } else {
            (year, month - 3)
        };
        let (cycle, years_into_cycle) = (year - 2000).div_mod_floor(&(GREGORIAN_CYCLE_YEARS as i32));
        let years_into_cycle = years_into_cycle as u16;
        let (century, years_into_century) =
            years_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_YEARS, 3_u8);
        let (quadrennium, years_into_quadrennium) =
            years_into_century.clamped_div_rem(GREGORIAN_QUADRENNIUM_YEARS, 24_u8);

        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium as u8,
            day: GREGORIAN_MONTH_STARTS[month as usize] + (day - 1) as u16,
        }
    }

    /// Returns `(year, month, day)` with January as month 1.
    pub(crate) fn to_date(self) -> (i32, u8, u8) {
        let year = 2000
            + 400 * self.cycle
            + 100 * self.century as i32
            + 4 * self.quadrennium as i32
            + self.year as i32;

        let month = month_from_day_offset(self.day);
        let day = (self.day - GREGORIAN_MONTH_STARTS[month as usize]) as u8 + 1;

        if self.day >= JANUARY_FIRST {
            (year + 1, month - 9, day)
        } else {
            (year, month + 3, day)
        }
    }
}
