//! Print ISO week dates.
//!
//! With no arguments, prints a few sample conversions and today's date. Otherwise each argument
//! is read as a `YYYY-MM-DD` date and printed with its ISO week date. Set
//! `RUST_LOG=weekdate=trace` to see the conversions as they happen.

use std::process::ExitCode;

use weekdate::{weeks_in_iso_year, GregorianDate, ISOWeekDate};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_samples();
        return ExitCode::SUCCESS;
    }

    for arg in &args {
        match arg.parse::<GregorianDate>() {
            Ok(date) => println!("{date} -> {}", ISOWeekDate::from(date)),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn print_samples() {
    let today = GregorianDate::today();
    let week_date = today.to_iso_week_date();
    println!("today:              {today} -> {week_date}");
    println!("next week:          {}", week_date.add_weeks(1));
    println!("back to Gregorian:  {}", week_date.to_gregorian_date());

    for (year, week, day_offset) in [(2025, 1, 0), (2020, 53, 6), (2026, 42, 3)] {
        match ISOWeekDate::new(year, week, day_offset) {
            Ok(date) => println!("{date} -> {}", date.to_gregorian_date()),
            Err(err) => println!("{year}-W{week:02}-{day_offset}: {err}"),
        }
    }

    for year in [2020, 2025, 2026] {
        println!("{year} has {} ISO weeks", weeks_in_iso_year(year));
    }
}
