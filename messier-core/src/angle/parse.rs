//! Parsing of the catalogue's sexagesimal notation.
//!
//! Catalogue lines carry positions in exactly one shape each:
//!
//! ```text
//! Right ascension:  5h 34m 31.9400s      (hours 0-23, minutes and seconds 0-59)
//! Declination:      -16° 10' 36.0000"    (degrees -90..=90, sign on degrees only)
//! ```
//!
//! Components are separated by a single space and carry their unit marker. Unlike a
//! general-purpose angle reader there is no auto-detection and no alternate spelling:
//! anything else is [`AngleError::Malformed`].
//!
//! The sign of a declination is taken from the degree component and applies to the
//! whole value, so `-16° 10' 36"` is `-(16 + 10/60 + 36/3600)` degrees and `-0° 30' 0"`
//! is `-0.5` degrees.
//!
//! ```
//! use messier_core::angle::{parse_dms, parse_hms};
//!
//! let ra = parse_hms("18h 20m 26.0000s").unwrap();
//! assert!((ra.hours() - (18.0 + 20.0 / 60.0 + 26.0 / 3600.0)).abs() < 1e-12);
//!
//! let dec = parse_dms("-16° 10' 36.0000\"").unwrap();
//! assert!((dec.degrees() + (16.0 + 10.0 / 60.0 + 36.0 / 3600.0)).abs() < 1e-12);
//!
//! assert!(parse_hms("18:20:26").is_err());
//! ```

use super::Angle;
use crate::constants::{DEC_LIMIT_DEG, HOURS_PER_CIRCLE, MINUTES_PER_UNIT, SECONDS_PER_UNIT};
use crate::errors::{AngleComponent, AngleError, AngleResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regular expression accepted by [`parse_hms`].
pub const HMS_PATTERN: &str = r"^(\d{1,2})h (\d{1,2})m (\d{1,2}(?:\.\d+)?)s$";

/// Regular expression accepted by [`parse_dms`].
pub const DMS_PATTERN: &str = r#"^(-?)(\d{1,2})° (\d{1,2})' (\d{1,2}(?:\.\d+)?)"$"#;

const HMS_EXPECTED: &str = "<hours>h <minutes>m <seconds>s";
const DMS_EXPECTED: &str = "<degrees>° <arcminutes>' <arcseconds>\"";

static HMS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(HMS_PATTERN).expect("HMS pattern is a valid regex"));

static DMS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DMS_PATTERN).expect("DMS pattern is a valid regex"));

/// Parses right ascension written as `<h>h <m>m <s>s`.
///
/// # Errors
/// [`AngleError::Malformed`] if the shape is wrong, [`AngleError::OutOfRange`] if
/// hours ≥ 24 or minutes/seconds ≥ 60.
pub fn parse_hms(s: &str) -> AngleResult<Angle> {
    let s = s.trim();
    let caps = HMS_REGEX
        .captures(s)
        .ok_or_else(|| AngleError::malformed("HMS", s, HMS_EXPECTED))?;

    let hours = component(&caps, 1, "HMS", s, HMS_EXPECTED)?;
    let minutes = component(&caps, 2, "HMS", s, HMS_EXPECTED)?;
    let seconds = component(&caps, 3, "HMS", s, HMS_EXPECTED)?;

    if hours >= HOURS_PER_CIRCLE {
        return Err(AngleError::out_of_range(
            AngleComponent::Hours,
            hours,
            s,
            "< 24",
        ));
    }
    check_sixtieths(minutes, seconds, s)?;

    Ok(Angle::from_hours(
        hours + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT,
    ))
}

/// Parses declination written as `<d>° <m>' <s>"`, with an optional leading `-`.
///
/// # Errors
/// [`AngleError::Malformed`] if the shape is wrong, [`AngleError::OutOfRange`] if
/// minutes/arcseconds ≥ 60 or the magnitude of the value exceeds 90°.
pub fn parse_dms(s: &str) -> AngleResult<Angle> {
    let s = s.trim();
    let caps = DMS_REGEX
        .captures(s)
        .ok_or_else(|| AngleError::malformed("DMS", s, DMS_EXPECTED))?;

    let sign = if &caps[1] == "-" { -1.0 } else { 1.0 };
    let degrees = component(&caps, 2, "DMS", s, DMS_EXPECTED)?;
    let minutes = component(&caps, 3, "DMS", s, DMS_EXPECTED)?;
    let seconds = component(&caps, 4, "DMS", s, DMS_EXPECTED)?;

    if degrees > DEC_LIMIT_DEG {
        return Err(AngleError::out_of_range(
            AngleComponent::Degrees,
            degrees,
            s,
            "<= 90",
        ));
    }
    check_sixtieths(minutes, seconds, s)?;

    let total = degrees + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT;
    if total > DEC_LIMIT_DEG {
        return Err(AngleError::out_of_range(
            AngleComponent::Total,
            total,
            s,
            "<= 90",
        ));
    }

    Ok(Angle::from_degrees(sign * total))
}

fn component(
    caps: &Captures<'_>,
    index: usize,
    notation: &'static str,
    input: &str,
    expected: &'static str,
) -> AngleResult<f64> {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| AngleError::malformed(notation, input, expected))
}

fn check_sixtieths(minutes: f64, seconds: f64, input: &str) -> AngleResult<()> {
    if minutes >= MINUTES_PER_UNIT {
        return Err(AngleError::out_of_range(
            AngleComponent::Minutes,
            minutes,
            input,
            "< 60",
        ));
    }
    if seconds >= MINUTES_PER_UNIT {
        return Err(AngleError::out_of_range(
            AngleComponent::Seconds,
            seconds,
            input,
            "< 60",
        ));
    }
    Ok(())
}
