//! PDF date strings and their datetime representations.
//!
//! # Format
//! PDF documents store dates (such as `/CreationDate` and `/ModDate`)
//! in a form derived from [**ISO/IEC 8824**](https://www.iso.org/standard/68350.html):
//!
//! ```text
//! D:YYYYMMDDHHmmSSOHH'mm'
//! ```
//!
//! Everything after the year is optional.
//! Absent components default to the earliest valid value, and an absent
//! offset leaves the datetime [local](PdfDateTime::Local).
//! For example:
//! - `D:1998` → `1998-01-01 00:00:00` (unknown offset)
//! - `D:199812` → `1998-12-01 00:00:00` (unknown offset)
//! - `D:19981223195208Z` → `1998-12-23 19:52:08 +00:00`
//! - `D:199812231952-08'00'` → `1998-12-23 19:52:00 -08:00`
//! - `D:1998+` → `1998-01-01 00:00:00 +00:00`
//!
//! # Validation
//! Components are range-checked individually (e.g., a day within `1-31`);
//! calendar validity as a whole (e.g., February 30th) is left to [`chrono`]
//! and reported as [`PdfDateError::InvalidDateTime`].

mod formatter;
pub mod offset;
mod parser;

use crate::datetime::offset::PdfOffset;
use crate::errors::{PdfDateError, PdfDateResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Display;
use std::str::FromStr;

pub use self::formatter::format;

/// Parses a PDF date string into a [`PdfDateTime`].
///
/// A leading `D:` is optional, and surrounding whitespace after it is ignored.
///
/// # Errors
/// - [`PdfDateError::NotPdfFormat`]: There is no leading 4-digit year.
/// - [`PdfDateError::InvalidFormat`]: A component is out of range.
/// - [`PdfDateError::InvalidDateTime`]: The components do not form a real datetime.
///
/// # Examples
/// - Parsing a date with a UTC offset:
/// ```
/// # use chrono::{Datelike, Timelike};
/// # fn main() -> pdf_date::errors::PdfDateResult<()> {
/// let datetime = pdf_date::parse("D:199812231952-08'00'")?;
/// let local = datetime.naive_local();
///
/// assert_eq!((1998, 12, 23), (local.year(), local.month(), local.day()));
/// assert_eq!((19, 52, 0), (local.hour(), local.minute(), local.second()));
/// assert_eq!(Some(-8 * 3600), datetime.offset().map(|o| o.local_minus_utc()));
/// # Ok(())
/// # }
/// ```
/// - Parsing a date without an offset:
/// ```
/// # fn main() -> pdf_date::errors::PdfDateResult<()> {
/// let datetime = pdf_date::parse("D:1998")?;
///
/// assert!(datetime.is_local());
/// assert_eq!("1998-01-01 00:00:00", datetime.naive_local().to_string());
/// # Ok(())
/// # }
/// ```
pub fn parse(raw: &str) -> PdfDateResult<PdfDateTime> {
    let datetime = PdfTimestamp::parse(raw)?.to_datetime()?;
    tracing::trace!(input = raw, ?datetime, "Parsed PDF date");
    Ok(datetime)
}

/// The validated components of a PDF date string.
///
/// This is the intermediate form between the raw text and a [`PdfDateTime`];
/// each component has been range-checked on its own, but not yet as a
/// whole calendar datetime (see [`Self::to_datetime`]).
///
/// # Examples
/// - Retrieving the components:
/// ```
/// # use pdf_date::datetime::PdfTimestamp;
/// # fn main() -> pdf_date::errors::PdfDateResult<()> {
/// let timestamp = PdfTimestamp::parse("D:19981223195208")?;
///
/// assert_eq!((1998, 12, 23), (timestamp.year(), timestamp.month(), timestamp.day()));
/// assert_eq!((19, 52, 8), (timestamp.hour(), timestamp.minute(), timestamp.second()));
/// assert_eq!(None, timestamp.offset());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PdfTimestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    offset: Option<PdfOffset>,
}

impl PdfTimestamp {
    /// Parses and range-checks the components of a PDF date string.
    ///
    /// # See Also
    /// - [`parse`](crate::parse) to parse directly into a [`PdfDateTime`].
    pub fn parse(raw: &str) -> PdfDateResult<Self> {
        parser::parse_timestamp(raw)
    }

    /// The year (`0000-9999`).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month (`1-12`).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day (`1-31`).
    ///
    /// # Note
    /// The day does not account for the number of days in a specific month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The number of hours (`0-23`).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The number of minutes (`0-59`).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The number of seconds (`0-59`).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// The UTC offset, or [`None`] if the string did not specify one.
    pub fn offset(&self) -> Option<PdfOffset> {
        self.offset
    }

    /// Combines the components into a calendar datetime.
    ///
    /// # Errors
    /// [`PdfDateError::InvalidDateTime`] if the components do not
    /// form a real date, such as `1999-02-30`.
    pub fn to_datetime(&self) -> PdfDateResult<PdfDateTime> {
        let local = NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())
            .and_then(|date| {
                date.and_hms_opt(self.hour.into(), self.minute.into(), self.second.into())
            })
            .ok_or_else(|| self.invalid())?;

        match self.offset {
            None => Ok(PdfDateTime::Local(local)),
            Some(offset) => offset
                .to_fixed_offset()
                .from_local_datetime(&local)
                .single()
                .map(PdfDateTime::Offset)
                .ok_or_else(|| self.invalid()),
        }
    }

    fn invalid(&self) -> PdfDateError {
        let composed = format!(
            "{:0>4}-{:0>2}-{:0>2}T{:0>2}:{:0>2}:{:0>2}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        );
        tracing::debug!(datetime = %composed, "PDF date is not a valid calendar datetime");
        PdfDateError::InvalidDateTime(composed)
    }
}

impl FromStr for PdfTimestamp {
    type Err = PdfDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A datetime parsed from (or formattable as) a PDF date string.
///
/// # Equality
/// Comparison of two [`Offset`](Self::Offset) values follows [`chrono`],
/// which compares the instants they denote rather than their offsets.
///
/// # Examples
/// - Inspecting the offset:
/// ```
/// # use pdf_date::datetime::PdfDateTime;
/// # fn main() -> pdf_date::errors::PdfDateResult<()> {
/// let utc: PdfDateTime = "D:20230125101135Z".parse()?;
/// let local: PdfDateTime = "D:20230125101135".parse()?;
///
/// assert!(utc.is_utc());
/// assert!(utc.is_offset());
/// assert!(local.is_local());
/// assert_eq!(None, local.offset());
/// assert_eq!(utc.naive_local(), local.naive_local());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PdfDateTime {
    /// The date string carried no UTC offset.
    Local(NaiveDateTime),
    /// The date string carried a UTC offset (`Z`, `+HH'mm'`, `-HH'mm'`).
    Offset(DateTime<FixedOffset>),
}

impl PdfDateTime {
    /// Parses a PDF date string.
    ///
    /// # See Also
    /// - [`parse`](crate::parse) for details.
    pub fn parse(raw: &str) -> PdfDateResult<Self> {
        parse(raw)
    }

    /// The calendar date and wall-clock time, without any offset applied.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Local(local) => *local,
            Self::Offset(datetime) => datetime.naive_local(),
        }
    }

    /// The UTC offset, or [`None`] if [local](Self::Local).
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Local(_) => None,
            Self::Offset(datetime) => Some(*datetime.offset()),
        }
    }

    /// The datetime anchored to its UTC offset, or [`None`] if [local](Self::Local).
    ///
    /// # See Also
    /// - [`format`](crate::format) to turn the result back into a PDF date string.
    pub fn fixed(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Local(_) => None,
            Self::Offset(datetime) => Some(*datetime),
        }
    }

    /// Returns `true` if there is no specified UTC offset.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// Returns `true` if there is a UTC offset, including a zero offset.
    pub fn is_offset(&self) -> bool {
        matches!(self, Self::Offset(_))
    }

    /// Returns `true` if the UTC offset is zero.
    pub fn is_utc(&self) -> bool {
        self.offset()
            .is_some_and(|offset| offset.local_minus_utc() == 0)
    }
}

impl From<NaiveDateTime> for PdfDateTime {
    fn from(local: NaiveDateTime) -> Self {
        Self::Local(local)
    }
}

impl From<DateTime<FixedOffset>> for PdfDateTime {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::Offset(datetime)
    }
}

impl FromStr for PdfDateTime {
    type Err = PdfDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Display for PdfDateTime {
    /// Writes the PDF date string, as produced by [`format`](crate::format).
    ///
    /// A [local](Self::Local) datetime is written without an offset suffix.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(local) => formatter::write_pdf_date(f, local, None),
            Self::Offset(datetime) => formatter::write_pdf_date(
                f,
                &datetime.naive_local(),
                Some(*datetime.offset()),
            ),
        }
    }
}
