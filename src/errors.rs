//! Error-related types for PDF date [parsing](crate::parse).

use std::fmt::Display;

/// Alias for `Result<T, PdfDateError>`.
pub type PdfDateResult<T> = Result<T, PdfDateError>;

/// Possible errors when parsing a PDF date string.
///
/// All variants are terminal; the input is malformed and
/// re-parsing the same text yields the same error.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfDateError {
    /// The input does not start with a 4-digit year
    /// (after an optional `D:` prefix and surrounding whitespace).
    #[error("Not a PDF date string (expected at least a 4-digit year): {0:?}")]
    NotPdfFormat(String),

    /// A component present in the input lies outside its permitted range.
    ///
    /// # Example
    /// `D:19981323` has a month of `13`.
    #[error("Invalid PDF date: {field} `{value}` is outside {}..={}", .field.min(), .field.max())]
    InvalidFormat {
        /// The offending component.
        field: DateField,
        /// The parsed value of the component.
        value: u8,
    },

    /// Every component is individually in range,
    /// but together they do not form a real calendar datetime.
    ///
    /// The composed `YYYY-MM-DDTHH:MM:SS` string is retained.
    ///
    /// # Example
    /// `D:19990230` (February 30th).
    #[error("Invalid PDF date: `{0}` is not a valid calendar datetime")]
    InvalidDateTime(String),
}

/// A positional component of a PDF date string.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateField {
    /// `MM` (`1-12`)
    Month,
    /// `DD` (`1-31`)
    Day,
    /// `HH` (`0-23`)
    Hour,
    /// `mm` (`0-59`)
    Minute,
    /// `SS` (`0-59`)
    Second,
    /// The `HH'` group of a UTC offset (`0-23`).
    OffsetHour,
    /// The `mm'` group of a UTC offset (`0-59`).
    OffsetMinute,
}

impl DateField {
    /// The smallest permitted value.
    pub fn min(&self) -> u8 {
        match self {
            Self::Month | Self::Day => 1,
            _ => 0,
        }
    }

    /// The largest permitted value.
    pub fn max(&self) -> u8 {
        match self {
            Self::Month => 12,
            Self::Day => 31,
            Self::Hour | Self::OffsetHour => 23,
            Self::Minute | Self::Second | Self::OffsetMinute => 59,
        }
    }

    /// Returns `value` if it lies within [`Self::min`] and [`Self::max`].
    pub(crate) fn check(self, value: u8) -> PdfDateResult<u8> {
        if (self.min()..=self.max()).contains(&value) {
            Ok(value)
        } else {
            tracing::debug!(field = %self, value, "PDF date component out of range");
            Err(PdfDateError::InvalidFormat { field: self, value })
        }
    }
}

impl Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::OffsetHour => "offset hour",
            Self::OffsetMinute => "offset minute",
        })
    }
}
