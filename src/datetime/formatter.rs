//! Formatting of datetimes as PDF date strings.

use crate::datetime::PdfDateTime;
use crate::datetime::offset::PdfOffset;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};
use std::fmt::Write;

/// Written before every formatted date, including the trailing space.
const PREFIX: &str = "D: ";

/// Formats a datetime as a PDF date string (`D: YYYYMMDDHHmmSS` + offset).
///
/// An offset of exactly zero is written as `Z`, any other offset as `±HH'mm'`.
/// Sub-second precision and sub-minute offset remainders are not represented,
/// so an offset of `-30` seconds is written as `-00'00'`.
///
/// # Examples
/// - Formatting a datetime with a UTC offset:
/// ```
/// # use chrono::{FixedOffset, TimeZone};
/// let offset = FixedOffset::west_opt(8 * 3600).unwrap();
/// let datetime = offset.with_ymd_and_hms(1998, 12, 23, 19, 52, 8).unwrap();
///
/// assert_eq!("D: 19981223195208-08'00'", pdf_date::format(&datetime));
/// ```
/// - Formatting a UTC datetime:
/// ```
/// # use chrono::{FixedOffset, TimeZone};
/// let datetime = FixedOffset::east_opt(0)
///     .unwrap()
///     .with_ymd_and_hms(2024, 2, 29, 0, 5, 0)
///     .unwrap();
///
/// assert_eq!("D: 20240229000500Z", pdf_date::format(&datetime));
/// ```
pub fn format(datetime: &DateTime<FixedOffset>) -> String {
    PdfDateTime::Offset(*datetime).to_string()
}

pub(super) fn write_pdf_date(
    f: &mut impl Write,
    local: &NaiveDateTime,
    offset: Option<FixedOffset>,
) -> std::fmt::Result {
    write!(
        f,
        "{PREFIX}{:04}{:0>2}{:0>2}{:0>2}{:0>2}{:0>2}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
    )?;

    match offset {
        Some(offset) if offset.local_minus_utc() == 0 => f.write_char('Z'),
        // Truncated to whole minutes, keeping the sign of the exact offset
        Some(offset) => PdfOffset::from(offset).write_signed(f),
        None => Ok(()),
    }
}
