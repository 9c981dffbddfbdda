//! Text utilities for value normalisation and line arithmetic.

/// Returns the 1-based line number of the byte at `offset`.
///
/// Counts the newline characters preceding `offset`; a match at the very
/// start of the content is on line 1.
#[must_use]
pub fn line_number_at(content: &str, offset: usize) -> u32 {
    let newlines = content[..offset].bytes().filter(|&b| b == b'\n').count();
    u32::try_from(newlines + 1).unwrap_or(u32::MAX)
}

/// Normalises a raw matched value into its cleaned form.
///
/// HTML entities are decoded, every run of whitespace (including embedded
/// newlines and carriage returns) collapses to a single space, and leading
/// and trailing whitespace is removed.
#[must_use]
pub fn clean_value(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
