//! Splitting a catalogue line into raw fields.
//!
//! Fields are separated by `,`. A `"` toggles quoted mode, and commas inside quotes do
//! not split. Quote characters are kept in the field text because the validators check
//! them. Every field is trimmed of surrounding whitespace.
//!
//! Declinations end in `"` (the arcsecond marker), so a well-formed line normally
//! finishes with quoted mode switched on. That is only an error when the unmatched quote
//! has text after it; a trailing lone `"` cannot have swallowed anything. A field added
//! after the declination therefore lands inside that open quote and is reported as an
//! unterminated quote, not as a field-count mismatch.

use crate::error::{CatalogueError, CatalogueResult};

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

/// Splits `line` into exactly `arity` trimmed fields.
///
/// # Errors
/// [`CatalogueError::MalformedLine`] if the field count differs from `arity` or a quote
/// is left open with text after it.
///
/// ```
/// use messier_catalog::tokenizer::tokenize;
///
/// let fields = tokenize(r#"M1, "NGC 1952", "Crab Nebula, Taurus A", x"#, 4).unwrap();
/// assert_eq!(fields[2], r#""Crab Nebula, Taurus A""#);
/// assert!(tokenize("a, b, c", 4).is_err());
/// ```
pub fn tokenize(line: &str, arity: usize) -> CatalogueResult<Vec<&str>> {
    let mut fields = Vec::with_capacity(arity);
    let mut in_quotes = false;
    let mut opened_at = 0;
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
            if in_quotes {
                opened_at = i;
            }
        } else if ch == DELIMITER && !in_quotes {
            fields.push(line[start..i].trim());
            start = i + ch.len_utf8();
        }
    }
    fields.push(line[start..].trim());

    if in_quotes && !line[opened_at + QUOTE.len_utf8()..].trim().is_empty() {
        return Err(CatalogueError::malformed_line(format!(
            "unterminated quote at byte {opened_at}"
        )));
    }

    if fields.len() != arity {
        return Err(CatalogueError::malformed_line(format!(
            "expected {arity} fields, got {}",
            fields.len()
        )));
    }

    Ok(fields)
}
