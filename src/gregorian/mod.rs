pub use date::{GregorianDate, GregorianDateError};

mod date;
mod util;
