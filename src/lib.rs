pub use gregorian::{GregorianDate, GregorianDateError};
pub use iso_week_date::{weeks_in_iso_year, ISOWeekDate, OutOfRange, OutOfRangeField};
pub use weekday::Weekday;

mod div_rem;
mod gregorian;
mod gregorian_normalized_date;
mod iso_week_date;
mod weekday;
