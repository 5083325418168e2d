//! Validators for the individual fields of a catalogue line.
//!
//! Each validator takes the trimmed raw field text and returns the typed value or
//! [`CatalogueError::InvalidField`]. Each field type also renders back to its canonical
//! text, so the text of a parsed line survives a round trip:
//!
//! | Field | Canonical text |
//! |-------|----------------|
//! | primary id | `M1` |
//! | secondary id | `"NGC 1952"`, `"IC 4665"` or `"-"` |
//! | common names | `"A"`, `"A or B"`, `"A, B, or C"` or `"-"` |
//! | distance | `33.0` or `4.9-8.1` |
//! | magnitude | `8.4` |
//! | right ascension | `5h 34m 31.9400s` |
//! | declination | `-16° 10' 36.0000"` |
//!
//! Numbers render the shortest way that reads back to the same `f64`, always with a
//! decimal point (`33.0`, not `33`) and never in exponent form (`0.00001`, not `1e-5`).
//!
//! Category and region are free text, but text read back from a line cannot hold the
//! delimiter, a quote, a line break, or surrounding whitespace. [`free_text`] checks
//! values that did not come from a line.

use crate::error::{CatalogueError, CatalogueResult, Field};
use crate::tokenizer::{DELIMITER, QUOTE};
use messier_core::angle::{parse_dms, parse_hms, DmsFmt, HmsFmt};
use messier_core::Angle;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const PRIMARY_ID_PATTERN: &str = r"^M[1-9][0-9]*$";
pub const SECONDARY_ID_PATTERN: &str = r#"^"((?:NGC|IC) [1-9][0-9]*|-)"$"#;
pub const DISTANCE_PATTERN: &str = r"^(\d+(?:\.\d+)?)(?:-(\d+(?:\.\d+)?))?$";
const NAME_SEPARATOR_PATTERN: &str = r", or | or |,";

/// Written for an absent secondary id or an empty name list.
pub const PLACEHOLDER: &str = "-";

/// Fractional digits of the seconds component in rendered positions.
pub const POSITION_FRAC_DIGITS: u8 = 4;

static PRIMARY_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PRIMARY_ID_PATTERN).expect("primary id pattern is a valid regex"));

static SECONDARY_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(SECONDARY_ID_PATTERN).expect("secondary id pattern is a valid regex")
});

static DISTANCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DISTANCE_PATTERN).expect("distance pattern is a valid regex"));

static NAME_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(NAME_SEPARATOR_PATTERN).expect("name separator pattern is a valid regex")
});

/// Designation in the New General Catalogue or Index Catalogue, if the object has one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondaryId {
    /// e.g. `NGC 1952`, stored without quotes.
    Designated(String),
    Unlisted,
}

impl SecondaryId {
    /// The designation without quotes, or `-`.
    pub fn as_str(&self) -> &str {
        match self {
            SecondaryId::Designated(id) => id,
            SecondaryId::Unlisted => PLACEHOLDER,
        }
    }
}

impl fmt::Display for SecondaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

/// Distance from Earth in kilo-light-years: one value or an inclusive span.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceRange {
    low: f64,
    high: Option<f64>,
}

impl DistanceRange {
    pub fn point(value: f64) -> Self {
        Self {
            low: value,
            high: None,
        }
    }

    /// # Errors
    /// [`CatalogueError::InvalidField`] unless `low <= high` (so also for NaN bounds).
    pub fn span(low: f64, high: f64) -> CatalogueResult<Self> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(CatalogueError::invalid_field(
                Field::Distance,
                "low <= high",
                &format!("{}-{}", render_float(low), render_float(high)),
            ));
        }
        Ok(Self {
            low,
            high: Some(high),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high.unwrap_or(self.low)
    }

    pub fn mean(&self) -> f64 {
        match self.high {
            Some(high) => (self.low + high) / 2.0,
            None => self.low,
        }
    }

    pub fn is_span(&self) -> bool {
        self.high.is_some()
    }
}

impl fmt::Display for DistanceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "{}-{}", render_float(self.low), render_float(high)),
            None => f.write_str(&render_float(self.low)),
        }
    }
}

pub fn primary_id(raw: &str) -> CatalogueResult<String> {
    if PRIMARY_ID_REGEX.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(CatalogueError::invalid_field(
            Field::PrimaryId,
            PRIMARY_ID_PATTERN,
            raw,
        ))
    }
}

pub fn secondary_id(raw: &str) -> CatalogueResult<SecondaryId> {
    let caps = SECONDARY_ID_REGEX.captures(raw).ok_or_else(|| {
        CatalogueError::invalid_field(Field::SecondaryId, SECONDARY_ID_PATTERN, raw)
    })?;
    Ok(match &caps[1] {
        PLACEHOLDER => SecondaryId::Unlisted,
        id => SecondaryId::Designated(id.to_string()),
    })
}

/// Parses a quoted name list.
///
/// Two names are joined by ` or `; three or more by `, ` with `, or ` before the last.
/// The list must already be in that form: `"A,B"` or `"A or B or C"` is rejected, as
/// is any empty name. `"-"` is the empty list.
pub fn common_names(raw: &str) -> CatalogueResult<Vec<String>> {
    let invalid = |pattern: &str| CatalogueError::invalid_field(Field::CommonNames, pattern, raw);

    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| invalid("a double-quoted name list"))?;

    if inner.contains('"') {
        return Err(invalid("no quotes inside the name list"));
    }
    if inner == PLACEHOLDER {
        return Ok(Vec::new());
    }

    let names: Vec<String> = NAME_SEPARATOR_REGEX
        .split(inner)
        .map(|name| name.trim().to_string())
        .collect();

    if names.iter().any(String::is_empty) {
        return Err(invalid("non-empty names"));
    }
    if join_names(&names) != inner {
        return Err(invalid("names joined as 'A or B' or 'A, B, or C'"));
    }

    Ok(names)
}

/// Joins names the way they appear inside the quotes, without the quotes.
pub fn join_names(names: &[String]) -> String {
    match names {
        [] => PLACEHOLDER.to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Renders a name list with its surrounding quotes.
pub fn render_names(names: &[String]) -> String {
    format!("\"{}\"", join_names(names))
}

pub fn distance(raw: &str) -> CatalogueResult<DistanceRange> {
    let caps = DISTANCE_REGEX
        .captures(raw)
        .ok_or_else(|| CatalogueError::invalid_field(Field::Distance, DISTANCE_PATTERN, raw))?;

    let low = number(&caps[1], Field::Distance, raw)?;
    let range = match caps.get(2) {
        Some(high) => {
            let high = number(high.as_str(), Field::Distance, raw)?;
            DistanceRange::span(low, high)
                .map_err(|_| CatalogueError::invalid_field(Field::Distance, "low <= high", raw))?
        }
        None => DistanceRange::point(low),
    };
    // a long enough digit string parses to infinity
    if !range.high().is_finite() {
        return Err(CatalogueError::invalid_field(
            Field::Distance,
            "a finite distance",
            raw,
        ));
    }
    Ok(range)
}

/// Apparent magnitude: a finite decimal number greater than zero.
pub fn magnitude(raw: &str) -> CatalogueResult<f64> {
    let value = number(raw, Field::Magnitude, raw)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogueError::invalid_field(
            Field::Magnitude,
            "a finite number > 0",
            raw,
        ));
    }
    Ok(value)
}

/// Checks a category or region value that will be written between delimiters.
pub fn free_text(field: Field, value: &str) -> CatalogueResult<()> {
    let breaks_line = value.contains([DELIMITER, QUOTE, '\n', '\r']);
    if breaks_line || value.trim() != value {
        return Err(CatalogueError::invalid_field(
            field,
            "trimmed text without ',', '\"' or line breaks",
            value,
        ));
    }
    Ok(())
}

pub fn right_ascension(raw: &str) -> CatalogueResult<Angle> {
    parse_hms(raw).map_err(|e| CatalogueError::from_angle(Field::RightAscension, e))
}

pub fn declination(raw: &str) -> CatalogueResult<Angle> {
    parse_dms(raw).map_err(|e| CatalogueError::from_angle(Field::Declination, e))
}

pub fn render_right_ascension(ra: Angle) -> String {
    HmsFmt {
        frac_digits: POSITION_FRAC_DIGITS,
    }
    .fmt(ra)
}

pub fn render_declination(dec: Angle) -> String {
    DmsFmt {
        frac_digits: POSITION_FRAC_DIGITS,
    }
    .fmt(dec)
}

/// Shortest text that reads back to `value`, always with a decimal point.
///
/// `Display` for `f64` never switches to exponent notation; `Debug` does.
pub fn render_float(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn number(text: &str, field: Field, raw: &str) -> CatalogueResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CatalogueError::invalid_field(field, "a decimal number", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_primary_id() {
        assert_eq!(primary_id("M1").unwrap(), "M1");
        assert_eq!(primary_id("M110").unwrap(), "M110");
        for bad in ["M2a", "M0", "M01", "m1", "NGC 1952", "M", ""] {
            let err = primary_id(bad).unwrap_err();
            assert_eq!(err.field(), Some(Field::PrimaryId), "{bad}");
        }
    }

    #[test]
    fn test_secondary_id() {
        assert_eq!(
            secondary_id("\"NGC 1952\"").unwrap(),
            SecondaryId::Designated("NGC 1952".into())
        );
        assert_eq!(
            secondary_id("\"IC 4665\"").unwrap(),
            SecondaryId::Designated("IC 4665".into())
        );
        assert_eq!(secondary_id("\"-\"").unwrap(), SecondaryId::Unlisted);
        for bad in ["NGC 1952", "\"NGC1952\"", "\"NGC 0\"", "\"UGC 12\"", "\"\""] {
            assert!(secondary_id(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_secondary_id_renders_with_quotes() {
        let id = SecondaryId::Designated("NGC 7089".into());
        assert_eq!(id.to_string(), "\"NGC 7089\"");
        assert_eq!(id.as_str(), "NGC 7089");
        assert_eq!(SecondaryId::Unlisted.to_string(), "\"-\"");
    }

    #[test]
    fn test_common_names_forms() {
        assert_eq!(common_names("\"Crab Nebula\"").unwrap(), names(&["Crab Nebula"]));
        assert_eq!(
            common_names("\"Crocodile Eye or Cat's Eye Galaxy\"").unwrap(),
            names(&["Crocodile Eye", "Cat's Eye Galaxy"])
        );
        assert_eq!(
            common_names("\"Wild Duck Cluster, Scutum Star Cloud, or Lyra\"").unwrap(),
            names(&["Wild Duck Cluster", "Scutum Star Cloud", "Lyra"])
        );
        assert!(common_names("\"-\"").unwrap().is_empty());
    }

    #[test]
    fn test_common_names_rejects_non_canonical() {
        for bad in [
            "\"Crocodile Eye or Cat's Eye Galaxy or \"",
            "\"A,B\"",
            "\"A, B\"",
            "\"A or B or C\"",
            "\"A, or B\"",
            "\"\"",
            "\"Crab \"Nebula\"",
            "Crab Nebula",
            "\"",
        ] {
            let err = common_names(bad).unwrap_err();
            assert_eq!(err.field(), Some(Field::CommonNames), "{bad}");
        }
    }

    #[test]
    fn test_render_names() {
        assert_eq!(render_names(&[]), "\"-\"");
        assert_eq!(render_names(&names(&["A"])), "\"A\"");
        assert_eq!(render_names(&names(&["A", "B"])), "\"A or B\"");
        assert_eq!(render_names(&names(&["A", "B", "C"])), "\"A, B, or C\"");
        assert_eq!(
            render_names(&names(&["A", "B", "C", "D"])),
            "\"A, B, C, or D\""
        );
    }

    #[test]
    fn test_distance() {
        let d = distance("33.0").unwrap();
        assert!(!d.is_span());
        assert_eq!((d.low(), d.high(), d.mean()), (33.0, 33.0, 33.0));

        let d = distance("4.9-8.1").unwrap();
        assert!(d.is_span());
        assert_eq!((d.low(), d.high()), (4.9, 8.1));
        assert!((d.mean() - 6.5).abs() < 1e-12);

        let d = distance("14700").unwrap();
        assert_eq!(d.to_string(), "14700.0");
    }

    #[test]
    fn test_distance_rejects() {
        let huge = "9".repeat(400);
        let huge_span = format!("1.0-{huge}");
        for bad in [
            "4.9-8.1-5.2",
            "33.0*5",
            "-3.0",
            "8.1-4.9",
            "",
            "1e3",
            "4.9 - 8.1",
            huge.as_str(),
            huge_span.as_str(),
        ] {
            let err = distance(bad).unwrap_err();
            assert_eq!(err.field(), Some(Field::Distance), "{bad}");
        }
    }

    #[test]
    fn test_free_text() {
        assert!(free_text(Field::Category, "Supernova remnant").is_ok());
        assert!(free_text(Field::Region, "").is_ok());
        for bad in ["Nebula, diffuse", "\"Taurus\"", " Taurus", "Taurus\n", "a\rb"] {
            let err = free_text(Field::Region, bad).unwrap_err();
            assert_eq!(err.field(), Some(Field::Region), "{bad:?}");
        }
    }

    #[test]
    fn test_distance_span_constructor() {
        assert!(DistanceRange::span(5.0, 6.0).is_ok());
        assert!(DistanceRange::span(5.0, 5.0).is_ok());
        assert!(DistanceRange::span(6.0, 5.0).is_err());
        assert!(DistanceRange::span(f64::NAN, 5.0).is_err());
        assert!(DistanceRange::span(5.0, f64::NAN).is_err());
        assert_eq!(DistanceRange::span(5.0, 6.0).unwrap().to_string(), "5.0-6.0");
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude("8.4").unwrap(), 8.4);
        assert_eq!(magnitude("6").unwrap(), 6.0);
        for bad in ["0", "0.0", "-1.2", "bright", "NaN", "inf", ""] {
            let err = magnitude(bad).unwrap_err();
            assert_eq!(err.field(), Some(Field::Magnitude), "{bad}");
        }
    }

    #[test]
    fn test_positions() {
        let ra = right_ascension("5h 34m 31.9400s").unwrap();
        assert_eq!(render_right_ascension(ra), "5h 34m 31.9400s");

        let dec = declination("-16° 10' 36.0000\"").unwrap();
        assert_eq!(render_declination(dec), "-16° 10' 36.0000\"");

        let err = right_ascension("-21h 33m 27.0200s").unwrap_err();
        assert_eq!(err.field(), Some(Field::RightAscension));

        let err = declination("0° 49'apodimasdasdsd 23.7000\"").unwrap_err();
        assert_eq!(err.field(), Some(Field::Declination));
    }

    #[test]
    fn test_render_float() {
        assert_eq!(render_float(33.0), "33.0");
        assert_eq!(render_float(8.4), "8.4");
        assert_eq!(render_float(14700.0), "14700.0");
        assert_eq!(render_float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_render_float_extremes_read_back() {
        assert_eq!(render_float(0.00001), "0.00001");
        assert_eq!(render_float(1e20), "100000000000000000000.0");
        assert_eq!(render_float(1.5e-7), "0.00000015");

        for value in [0.00001, 1.5e-7, 1e20, 123456789.125] {
            let text = render_float(value);
            assert_eq!(distance(&text).unwrap().low(), value, "{text}");
            assert_eq!(magnitude(&text).unwrap(), value, "{text}");
        }
    }
}
