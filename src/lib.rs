//! # pdf-date
//! Conversion between PDF date strings and [`chrono`] datetimes.
//!
//! PDF metadata stores timestamps such as `/CreationDate` and `/ModDate`
//! as `D:YYYYMMDDHHmmSSOHH'mm'`, where every component after the year is
//! optional. This crate parses such strings into a [`PdfDateTime`] and
//! formats offset-carrying datetimes back into the same form.
//!
//! ## Examples
//! Parsing a date string:
//! ```
//! # use chrono::Datelike;
//! # fn main() -> pdf_date::errors::PdfDateResult<()> {
//! let created = pdf_date::parse("D:19981223195208-08'00'")?;
//!
//! assert_eq!(1998, created.naive_local().year());
//! assert_eq!(Some(-8 * 3600), created.offset().map(|o| o.local_minus_utc()));
//! # Ok(())
//! # }
//! ```
//! Formatting a datetime:
//! ```
//! # use chrono::{FixedOffset, TimeZone};
//! let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
//! let modified = offset.with_ymd_and_hms(2020, 2, 20, 0, 14, 5).unwrap();
//! let raw = pdf_date::format(&modified);
//!
//! assert_eq!("D: 20200220001405+05'30'", raw);
//! assert_eq!(Some(modified), pdf_date::parse(&raw).unwrap().fixed());
//! ```
//!
//! ## Logging
//! Rejected input is reported through [`tracing`] at the `debug` level.
//! No subscriber is installed by this crate.

pub mod datetime;
pub mod errors;
mod util;

pub use self::datetime::{PdfDateTime, PdfTimestamp, format, parse};

/// The prelude for convenient imports of the parsing and formatting API.
#[cfg(feature = "prelude")]
pub mod prelude {
    pub use crate::datetime::offset::{PdfOffset, Sign};
    pub use crate::datetime::{PdfDateTime, PdfTimestamp, format, parse};
    pub use crate::errors::{DateField, PdfDateError, PdfDateResult};
}
