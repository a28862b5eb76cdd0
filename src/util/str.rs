pub(crate) trait StrExt {
    /// The longest prefix consisting only of ASCII digits (`0-9`).
    fn leading_ascii_digits(&self) -> &str;
}

impl StrExt for str {
    fn leading_ascii_digits(&self) -> &str {
        let end = self
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(self.len());

        &self[..end]
    }
}

/// Reads a run of ASCII digits as a decimal number.
///
/// Callers only pass runs of at most 4 digits, which always fit.
pub(crate) fn decimal(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0, |num, digit| num * 10 + (digit - b'0') as u16)
}
