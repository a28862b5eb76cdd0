//! UTC offsets of PDF date strings (`Z`, `+HH'mm'`, `-HH'mm'`).

use chrono::FixedOffset;
use std::fmt::{Display, Write};

/// The direction of a [`PdfOffset`] relative to UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Local time is ahead of UTC (`+`).
    Plus,
    /// Local time is behind UTC (`-`).
    Minus,
}

impl Sign {
    fn as_char(&self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// A fixed UTC offset as written in a PDF date string.
///
/// A trailing `Z` and a bare sign (`+` or `-` without digits)
/// both denote a zero offset, which is distinct from an
/// absent (unknown) offset.
///
/// # Examples
/// - Retrieving the offset of a parsed timestamp:
/// ```
/// # use pdf_date::datetime::PdfTimestamp;
/// # fn main() -> pdf_date::errors::PdfDateResult<()> {
/// let timestamp = PdfTimestamp::parse("D:199812231952-08'30'")?;
/// let offset = timestamp.offset().unwrap();
///
/// assert_eq!("-08'30'", offset.to_string());
/// assert_eq!(-510, offset.offset()); // UTC offset in minutes
/// assert_eq!((8, 30), (offset.hours(), offset.minutes()));
/// assert!(!offset.is_utc());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PdfOffset {
    sign: Sign,
    hours: u8,
    minutes: u8,
}

impl PdfOffset {
    /// The zero offset (`Z`).
    pub const UTC: PdfOffset = PdfOffset {
        sign: Sign::Plus,
        hours: 0,
        minutes: 0,
    };

    pub(crate) fn new(sign: Sign, hours: u8, minutes: u8) -> Self {
        debug_assert!(
            hours <= 23 && minutes <= 59,
            "offset out of range: {hours:0>2}'{minutes:0>2}'",
        );
        Self {
            sign,
            hours,
            minutes,
        }
    }

    /// The direction of the offset.
    ///
    /// A zero offset written as `-` retains [`Sign::Minus`].
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The absolute number of offset hours (`0-23`).
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// The absolute number of offset minutes (`0-59`).
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The total UTC offset in minutes with the sign applied
    /// (e.g., `-08'30'` → `-510`).
    pub fn offset(&self) -> i16 {
        let minutes = self.hours as i16 * 60 + self.minutes as i16;

        match self.sign {
            Sign::Plus => minutes,
            Sign::Minus => -minutes,
        }
    }

    /// Returns `true` if the offset is zero, regardless of [`Self::sign`].
    pub fn is_utc(&self) -> bool {
        self.offset() == 0
    }

    /// Converts to a [`chrono::FixedOffset`].
    pub fn to_fixed_offset(&self) -> FixedOffset {
        // At most 23:59, always within chrono's (-24h, +24h) bound
        FixedOffset::east_opt(self.offset() as i32 * 60)
            .expect("pdf-date: offset components are range-checked")
    }
}

impl PdfOffset {
    /// Writes `±HH'mm'`, even for a zero offset.
    pub(crate) fn write_signed(&self, f: &mut impl Write) -> std::fmt::Result {
        write!(
            f,
            "{}{:0>2}'{:0>2}'",
            self.sign.as_char(),
            self.hours,
            self.minutes,
        )
    }
}

impl From<PdfOffset> for FixedOffset {
    fn from(offset: PdfOffset) -> Self {
        offset.to_fixed_offset()
    }
}

impl From<FixedOffset> for PdfOffset {
    /// Sub-minute remainders of the offset are dropped.
    fn from(offset: FixedOffset) -> Self {
        let seconds = offset.local_minus_utc();
        let sign = if seconds < 0 { Sign::Minus } else { Sign::Plus };
        let seconds = seconds.unsigned_abs();

        Self::new(sign, (seconds / 3600) as u8, ((seconds / 60) % 60) as u8)
    }
}

impl Display for PdfOffset {
    /// Writes `Z` for a zero offset and `±HH'mm'` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_utc() {
            return write!(f, "Z");
        }
        self.write_signed(f)
    }
}
