//! Position-based parsing of PDF date strings into a [`PdfTimestamp`].
//!
//! The digit fields and the trailing UTC offset are matched independently:
//! the fields come from the leading digit run, while the offset is
//! recognized at the very end of the input, so an offset may follow
//! a truncated run such as `D:1998-08'00'`.

use crate::datetime::PdfTimestamp;
use crate::datetime::offset::{PdfOffset, Sign};
use crate::errors::{DateField, PdfDateError, PdfDateResult};
use crate::util::str::{StrExt, decimal};

const PREFIX: &str = "D:";
const YEAR_LEN: usize = 4;
const GROUP_LEN: usize = 2;

/// Components following the year in reading order,
/// keyed by their start within the digit run.
///
/// A component is read only if the run covers `start + 2`,
/// giving the cut-off lengths `6`, `8`, `10`, `12`, and `14`.
const CASCADE: [(usize, DateField); 5] = [
    (4, DateField::Month),
    (6, DateField::Day),
    (8, DateField::Hour),
    (10, DateField::Minute),
    (12, DateField::Second),
];

/// `month`, `day`, `hour`, `minute`, `second` when absent from the input.
const DEFAULTS: [u8; 5] = [1, 1, 0, 0, 0];

pub(super) fn parse_timestamp(raw: &str) -> PdfDateResult<PdfTimestamp> {
    // Digits are scanned after `D:` and surrounding whitespace are removed,
    // so `D: 1998` (as formatted) and ` 1998` both yield the year
    let body = raw.strip_prefix(PREFIX).unwrap_or(raw).trim();
    let digits = body.leading_ascii_digits().as_bytes();

    if digits.len() < YEAR_LEN {
        tracing::debug!(input = raw, "PDF date is missing a 4-digit year");
        return Err(PdfDateError::NotPdfFormat(raw.to_owned()));
    }

    let year = decimal(&digits[..YEAR_LEN]);
    let [month, day, hour, minute, second] = parse_fields(digits)?;
    let offset = parse_offset(raw)?;

    Ok(PdfTimestamp {
        year,
        month,
        day,
        hour,
        minute,
        second,
        offset,
    })
}

fn parse_fields(digits: &[u8]) -> PdfDateResult<[u8; 5]> {
    let mut fields = DEFAULTS;

    for (slot, &(start, field)) in fields.iter_mut().zip(&CASCADE) {
        // A shorter run leaves this and every following field defaulted
        let Some(group) = digits.get(start..start + GROUP_LEN) else {
            break;
        };
        *slot = field.check(decimal(group) as u8)?;
    }

    Ok(fields)
}

/// Recognizes `(Z|+|-)(HH')?(mm')?` anchored at the end of `raw`.
///
/// The earliest start position wins, so two groups are tried before one,
/// and one before none.
fn parse_offset(raw: &str) -> PdfDateResult<Option<PdfOffset>> {
    let bytes = raw.as_bytes();

    for group_count in (0..=2).rev() {
        let Some(start) = bytes.len().checked_sub(1 + group_count * (GROUP_LEN + 1)) else {
            continue;
        };
        let (designator, groups) = (bytes[start], &bytes[start + 1..]);

        if !groups.chunks(GROUP_LEN + 1).all(is_offset_group) {
            continue;
        }

        let sign = match designator {
            // Digits following `Z` are disregarded
            b'Z' => return Ok(Some(PdfOffset::UTC)),
            b'+' => Sign::Plus,
            b'-' => Sign::Minus,
            _ => continue,
        };

        let mut values = groups
            .chunks(GROUP_LEN + 1)
            .map(|group| decimal(&group[..GROUP_LEN]) as u8);
        let hours = match values.next() {
            Some(hours) => DateField::OffsetHour.check(hours)?,
            None => 0,
        };
        let minutes = match values.next() {
            Some(minutes) => DateField::OffsetMinute.check(minutes)?,
            None => 0,
        };

        return Ok(Some(PdfOffset::new(sign, hours, minutes)));
    }

    Ok(None)
}

/// `HH'` or `mm'`
fn is_offset_group(group: &[u8]) -> bool {
    matches!(group, [a, b, b'\''] if a.is_ascii_digit() && b.is_ascii_digit())
}
