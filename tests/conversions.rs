//! Conversion properties between Gregorian and ISO week dates, checked exhaustively over wide
//! ranges through the public API.

use weekdate::{weeks_in_iso_year, GregorianDate, ISOWeekDate, OutOfRangeField, Weekday};

fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

fn gregorian_range(first: GregorianDate, last: GregorianDate) -> impl Iterator<Item = GregorianDate> {
    (first.days_since_epoch()..=last.days_since_epoch())
        .map(|days| GregorianDate::from_days_since_epoch(days).unwrap())
}

fn iso_year_dates(year: i32) -> impl Iterator<Item = ISOWeekDate> {
    let weeks = weeks_in_iso_year(year) as i32;
    (1..=weeks).flat_map(move |week| {
        (0..7).map(move |day_offset| ISOWeekDate::new(year, week, day_offset).unwrap())
    })
}

#[test]
fn gregorian_round_trip() {
    for date in gregorian_range(gregorian(1900, 1, 1), gregorian(2100, 12, 31)) {
        let week_date = ISOWeekDate::from_gregorian_date(date);
        assert_eq!(week_date.to_gregorian_date(), date, "via {week_date}");
        assert_eq!(week_date.weekday(), date.weekday());
    }
}

#[test]
fn iso_week_date_round_trip() {
    for year in 1890..=2110 {
        for week_date in iso_year_dates(year) {
            let date = week_date.to_gregorian_date();
            assert_eq!(ISOWeekDate::from_gregorian_date(date), week_date, "via {date}");
        }
    }
}

#[test]
fn iso_years_are_contiguous() {
    let mut previous_year_end: Option<GregorianDate> = None;
    for year in 1990..=2040 {
        let dates: Vec<GregorianDate> = iso_year_dates(year)
            .map(|week_date| week_date.to_gregorian_date())
            .collect();
        assert_eq!(dates.len(), weeks_in_iso_year(year) as usize * 7);
        assert_eq!(dates[0].weekday(), Weekday::Monday);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], 1, "gap or duplicate in ISO year {year}");
        }
        if let Some(end) = previous_year_end {
            assert_eq!(dates[0] - end, 1, "ISO year {year} does not follow the previous one");
        }
        previous_year_end = dates.last().copied();
    }
}

#[test]
fn order_matches_chronological_order() {
    let dates: Vec<GregorianDate> =
        gregorian_range(gregorian(1999, 6, 1), gregorian(2031, 6, 1)).collect();
    let week_dates: Vec<ISOWeekDate> = dates.iter().copied().map(ISOWeekDate::from).collect();

    // Strictly increasing along consecutive days implies agreement for every pair.
    for pair in week_dates.windows(2) {
        assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
    }
    for (i, j) in [(0, 1), (10, 400), (365, 366), (3000, 17), (5000, 5000)] {
        assert_eq!(dates[i].cmp(&dates[j]), week_dates[i].cmp(&week_dates[j]));
    }
}

#[test]
fn validation_boundaries() {
    for year in 1600..=2400 {
        let week_53 = ISOWeekDate::new(year, 53, 0);
        if weeks_in_iso_year(year) == 52 {
            let err = week_53.unwrap_err();
            assert_eq!(err.field, OutOfRangeField::Week);
            assert_eq!(err.max, 52);
        } else {
            assert!(week_53.is_ok(), "{year} should have a week 53");
        }
        assert!(ISOWeekDate::new(year, 0, 0).is_err());
        assert!(ISOWeekDate::new(year, 54, 0).is_err());
        assert!(ISOWeekDate::new(year, 1, 7).is_err());
        assert!(ISOWeekDate::new(year, 1, -1).is_err());
    }
}

#[test]
fn weeks_in_iso_year_matches_closed_form() {
    // A year has 53 weeks when December 31 is a Thursday, or a Friday in a leap year.
    for year in -9999..=9999 {
        let dec_31 = gregorian(year, 12, 31);
        let long_year = match dec_31.weekday() {
            Weekday::Thursday => true,
            Weekday::Friday => dec_31.is_leap_year(),
            _ => false,
        };
        let expected = if long_year { 53 } else { 52 };
        assert_eq!(weeks_in_iso_year(year), expected, "year {year}");
    }
}

#[test]
fn known_dates() {
    assert_eq!(
        ISOWeekDate::new(2025, 1, 0).unwrap().to_gregorian_date(),
        gregorian(2024, 12, 30)
    );
    assert_eq!(weeks_in_iso_year(2025), 52);
    assert_eq!(weeks_in_iso_year(2020), 53);
    assert_eq!(
        ISOWeekDate::from_gregorian_date(gregorian(2020, 12, 31)).to_string(),
        "2020-W53-3 (Thu)"
    );
    assert_eq!(
        ISOWeekDate::from_gregorian_date(gregorian(2025, 1, 1)).to_string(),
        "2025-W01-2 (Wed)"
    );
    assert_eq!(
        ISOWeekDate::new(2025, 1, 0).unwrap().add_weeks(1),
        ISOWeekDate::new(2025, 2, 0).unwrap()
    );
}

#[test]
fn extremes_round_trip() {
    assert_eq!(ISOWeekDate::from(GregorianDate::MIN), ISOWeekDate::MIN);
    assert_eq!(ISOWeekDate::from(GregorianDate::MAX), ISOWeekDate::MAX);
    for date in gregorian_range(GregorianDate::MIN, GregorianDate::MIN.add_days(400)) {
        assert_eq!(GregorianDate::from(ISOWeekDate::from(date)), date);
    }
    for date in gregorian_range(GregorianDate::MAX.add_days(-400), GregorianDate::MAX) {
        assert_eq!(GregorianDate::from(ISOWeekDate::from(date)), date);
    }
}

#[test]
fn add_days_agrees_with_gregorian_arithmetic() {
    let start = gregorian(2019, 12, 25);
    let week_date = ISOWeekDate::from(start);
    for days in -800..=800 {
        assert_eq!(
            week_date.add_days(days),
            ISOWeekDate::from(start.add_days(days))
        );
    }
    for weeks in -120..=120 {
        assert_eq!(week_date.add_weeks(weeks), week_date.add_days(7 * weeks));
    }
}
