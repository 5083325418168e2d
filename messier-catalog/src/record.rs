//! A single validated catalogue entry.
//!
//! A [`Record`] is built either by parsing a full line ([`Record::parse`], or
//! `str::parse`) or from already-typed values ([`RecordParts`]). It is immutable after
//! construction, and its [`Display`](std::fmt::Display) output is the canonical line,
//! which [`Record::parse`] reads back to an equal record.
//!
//! ```
//! use messier_catalog::Record;
//!
//! let line = r#"M2, "NGC 7089", "-", Globular cluster, 33.0, Aquarius, 6.3, 21h 33m 27.0200s, -0° 49' 23.7000""#;
//! let m2: Record = line.parse().unwrap();
//! assert_eq!(m2.primary_id(), "M2");
//! assert!(m2.common_names().is_empty());
//! assert_eq!(m2.to_string(), line);
//! ```

use crate::error::{CatalogueError, CatalogueResult, Field};
use crate::fields::{self, DistanceRange, SecondaryId};
use crate::tokenizer::tokenize;
use messier_core::math::angular_separation;
use messier_core::Angle;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of fields on a catalogue line.
pub const FIELD_COUNT: usize = Field::ALL.len();

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    primary_id: String,
    secondary_id: SecondaryId,
    common_names: Vec<String>,
    category: String,
    distance: DistanceRange,
    region: String,
    magnitude: f64,
    right_ascension: Angle,
    declination: Angle,
}

/// Typed values for building a [`Record`] without going through line text.
///
/// [`Record::from_parts`] applies the same checks as parsing, so a record built this way
/// renders to a line that parses back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordParts {
    pub primary_id: String,
    pub secondary_id: SecondaryId,
    pub common_names: Vec<String>,
    pub category: String,
    pub distance: DistanceRange,
    pub region: String,
    pub magnitude: f64,
    pub right_ascension: Angle,
    pub declination: Angle,
}

impl Record {
    /// Parses one catalogue line.
    ///
    /// # Errors
    /// [`CatalogueError::MalformedLine`] if the line does not split into nine fields,
    /// otherwise [`CatalogueError::InvalidField`] for the first field, in line order,
    /// that fails validation.
    pub fn parse(line: &str) -> CatalogueResult<Self> {
        let raw: [&str; FIELD_COUNT] = tokenize(line, FIELD_COUNT)?
            .try_into()
            .map_err(|v: Vec<&str>| {
                CatalogueError::malformed_line(format!(
                    "expected {FIELD_COUNT} fields, got {}",
                    v.len()
                ))
            })?;
        let [
            primary_id,
            secondary_id,
            common_names,
            category,
            distance,
            region,
            magnitude,
            right_ascension,
            declination,
        ] = raw;

        Ok(Self {
            primary_id: fields::primary_id(primary_id)?,
            secondary_id: fields::secondary_id(secondary_id)?,
            common_names: fields::common_names(common_names)?,
            category: category.to_string(),
            distance: fields::distance(distance)?,
            region: region.to_string(),
            magnitude: fields::magnitude(magnitude)?,
            right_ascension: fields::right_ascension(right_ascension)?,
            declination: fields::declination(declination)?,
        })
    }

    /// Builds a record from typed values.
    ///
    /// # Errors
    /// [`CatalogueError::InvalidField`] if a value could not have come from a valid
    /// line: a bad primary id or NGC/IC designation, a common name that would not read
    /// back as the same list, a category or region holding a delimiter or quote, a
    /// negative or non-finite distance, a non-positive magnitude, or a position outside
    /// the sky.
    pub fn from_parts(parts: RecordParts) -> CatalogueResult<Self> {
        fields::primary_id(&parts.primary_id)?;
        if let SecondaryId::Designated(id) = &parts.secondary_id {
            fields::secondary_id(&format!("\"{id}\""))?;
        }

        let names_text = fields::render_names(&parts.common_names);
        let reads_back = parts.common_names.iter().all(|n| !n.contains(['\n', '\r']))
            && fields::common_names(&names_text).ok().as_ref() == Some(&parts.common_names);
        if !reads_back {
            return Err(CatalogueError::invalid_field(
                Field::CommonNames,
                "names that read back as the same list",
                &names_text,
            ));
        }

        fields::free_text(Field::Category, &parts.category)?;
        fields::free_text(Field::Region, &parts.region)?;

        let low = parts.distance.low();
        if low.is_nan() || low < 0.0 || !parts.distance.high().is_finite() {
            return Err(CatalogueError::invalid_field(
                Field::Distance,
                "a finite distance >= 0",
                &parts.distance.to_string(),
            ));
        }
        fields::magnitude(&fields::render_float(parts.magnitude))?;

        let ra_hours = parts.right_ascension.hours();
        if !(0.0..24.0).contains(&ra_hours) {
            return Err(CatalogueError::invalid_field(
                Field::RightAscension,
                "0h <= right ascension < 24h",
                &fields::render_float(ra_hours),
            ));
        }
        let dec_degrees = parts.declination.degrees();
        if !(-90.0..=90.0).contains(&dec_degrees) {
            return Err(CatalogueError::invalid_field(
                Field::Declination,
                "-90° <= declination <= 90°",
                &fields::render_float(dec_degrees),
            ));
        }

        Ok(Self {
            primary_id: parts.primary_id,
            secondary_id: parts.secondary_id,
            common_names: parts.common_names,
            category: parts.category,
            distance: parts.distance,
            region: parts.region,
            magnitude: parts.magnitude,
            right_ascension: parts.right_ascension,
            declination: parts.declination,
        })
    }

    /// The canonical catalogue line; same as `to_string()`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn primary_id(&self) -> &str {
        &self.primary_id
    }

    pub fn secondary_id(&self) -> &SecondaryId {
        &self.secondary_id
    }

    pub fn common_names(&self) -> &[String] {
        &self.common_names
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn distance(&self) -> DistanceRange {
        self.distance
    }

    pub fn lowest_distance(&self) -> f64 {
        self.distance.low()
    }

    pub fn highest_distance(&self) -> f64 {
        self.distance.high()
    }

    pub fn mean_distance(&self) -> f64 {
        self.distance.mean()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    /// Common names inside their quotes, e.g. `"Crab Nebula"` or `"-"`.
    pub fn common_names_text(&self) -> String {
        fields::render_names(&self.common_names)
    }

    pub fn right_ascension_text(&self) -> String {
        fields::render_right_ascension(self.right_ascension)
    }

    pub fn declination_text(&self) -> String {
        fields::render_declination(self.declination)
    }

    /// Great-circle separation between this record's position and `other`'s.
    ///
    /// Zero when both records sit at the same position, including a record compared
    /// with itself.
    pub fn angular_distance(&self, other: &Record) -> Angle {
        angular_separation(
            self.right_ascension,
            self.declination,
            other.right_ascension,
            other.declination,
        )
    }

    /// Orders by apparent magnitude, brightest (lowest) first.
    pub fn cmp_brightness(&self, other: &Record) -> Ordering {
        self.magnitude.total_cmp(&other.magnitude)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}, {}, {}, {}",
            self.primary_id,
            self.secondary_id,
            self.common_names_text(),
            self.category,
            self.distance,
            self.region,
            fields::render_float(self.magnitude),
            self.right_ascension_text(),
            self.declination_text(),
        )
    }
}

impl FromStr for Record {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<RecordParts> for Record {
    type Error = CatalogueError;

    fn try_from(parts: RecordParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M1: &str = r#"M1, "NGC 1952", "Crab Nebula", Supernova remnant, 4.9-8.1, Taurus, 8.4, 5h 34m 31.9400s, 22° 0' 52.2000""#;
    const M2: &str = r#"M2, "NGC 7089", "-", Globular cluster, 33.0, Aquarius, 6.3, 21h 33m 27.0200s, 0° 49' 23.7000""#;

    fn m1_parts() -> RecordParts {
        RecordParts {
            primary_id: "M1".into(),
            secondary_id: SecondaryId::Designated("NGC 1952".into()),
            common_names: vec!["Crab Nebula".into()],
            category: "Supernova remnant".into(),
            distance: DistanceRange::span(4.9, 8.1).unwrap(),
            region: "Taurus".into(),
            magnitude: 8.4,
            right_ascension: Angle::from_hours(5.0 + 34.0 / 60.0 + 31.94 / 3600.0),
            declination: Angle::from_degrees(22.0 + 52.2 / 3600.0),
        }
    }

    #[test]
    fn test_parse_fields() {
        let r = Record::parse(M1).unwrap();
        assert_eq!(r.primary_id(), "M1");
        assert_eq!(r.secondary_id().as_str(), "NGC 1952");
        assert_eq!(r.common_names(), ["Crab Nebula".to_string()]);
        assert_eq!(r.category(), "Supernova remnant");
        assert_eq!(r.lowest_distance(), 4.9);
        assert_eq!(r.highest_distance(), 8.1);
        assert!((r.mean_distance() - 6.5).abs() < 1e-12);
        assert_eq!(r.region(), "Taurus");
        assert_eq!(r.magnitude(), 8.4);
        assert!((r.declination().degrees() - (22.0 + 52.2 / 3600.0)).abs() < 1e-10);
    }

    #[test]
    fn test_round_trip_text() {
        for line in [M1, M2] {
            let r = Record::parse(line).unwrap();
            assert_eq!(r.to_text(), line);
            assert_eq!(Record::parse(&r.to_text()).unwrap(), r);
        }
    }

    #[test]
    fn test_point_distance() {
        let r: Record = M2.parse().unwrap();
        assert!(!r.distance().is_span());
        assert_eq!(r.lowest_distance(), 33.0);
        assert_eq!(r.highest_distance(), 33.0);
        assert_eq!(r.mean_distance(), 33.0);
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let line = r#"M2a, "NGC 7089", "-", Globular cluster, bad, Aquarius, 6.3, 21h 33m 27.0200s, 0° 49' 23.7000""#;
        let err = Record::parse(line).unwrap_err();
        assert_eq!(err.field(), Some(Field::PrimaryId));
    }

    #[test]
    fn test_free_text_fields_unchecked() {
        let line = r#"M2, "NGC 7089", "-", , 33.0, , 6.3, 21h 33m 27.0200s, 0° 49' 23.7000""#;
        let r = Record::parse(line).unwrap();
        assert_eq!(r.category(), "");
        assert_eq!(r.region(), "");
    }

    #[test]
    fn test_from_parts_matches_parse() {
        let built = Record::from_parts(m1_parts()).unwrap();
        let parsed = Record::parse(M1).unwrap();
        assert_eq!(built.to_text(), M1);
        assert_eq!(built.primary_id(), parsed.primary_id());
        assert!(built.angular_distance(&parsed).arcminutes() < 1e-6);
    }

    #[test]
    fn test_from_parts_rejects_invalid_values() {
        let mut parts = m1_parts();
        parts.primary_id = "M0".into();
        assert_eq!(
            Record::from_parts(parts).unwrap_err().field(),
            Some(Field::PrimaryId)
        );

        let mut parts = m1_parts();
        parts.secondary_id = SecondaryId::Designated("UGC 5".into());
        assert_eq!(
            Record::try_from(parts).unwrap_err().field(),
            Some(Field::SecondaryId)
        );

        let mut parts = m1_parts();
        parts.common_names = vec!["".into()];
        assert_eq!(
            Record::from_parts(parts).unwrap_err().field(),
            Some(Field::CommonNames)
        );

        let mut parts = m1_parts();
        parts.magnitude = 0.0;
        assert_eq!(
            Record::from_parts(parts).unwrap_err().field(),
            Some(Field::Magnitude)
        );

        let mut parts = m1_parts();
        parts.magnitude = f64::NAN;
        assert_eq!(
            Record::from_parts(parts).unwrap_err().field(),
            Some(Field::Magnitude)
        );

        let mut parts = m1_parts();
        parts.declination = Angle::from_degrees(91.0);
        assert_eq!(
            Record::from_parts(parts).unwrap_err().field(),
            Some(Field::Declination)
        );

        let mut parts = m1_parts();
        parts.right_ascension = Angle::from_hours(-1.0);
        assert_eq!(
            Record::from_parts(parts).unwrap_err().field(),
            Some(Field::RightAscension)
        );
    }

    #[test]
    fn test_from_parts_rejects_text_that_would_not_read_back() {
        let cases: [(fn(&mut RecordParts), Field); 9] = [
            (|p| p.category = "Nebula, diffuse".into(), Field::Category),
            (|p| p.category = "\"Crab\"".into(), Field::Category),
            (|p| p.region = " Taurus".into(), Field::Region),
            (|p| p.region = "Taurus\nM2".into(), Field::Region),
            (|p| p.common_names = vec!["Crab or Taurus A".into()], Field::CommonNames),
            (|p| p.common_names = vec!["Crab, Taurus A".into()], Field::CommonNames),
            (|p| p.common_names = vec!["-".into()], Field::CommonNames),
            (|p| p.common_names = vec![" Crab".into()], Field::CommonNames),
            (
                |p| p.distance = DistanceRange::point(f64::NAN),
                Field::Distance,
            ),
        ];

        for (edit, field) in cases {
            let mut parts = m1_parts();
            edit(&mut parts);
            let err = Record::from_parts(parts.clone()).unwrap_err();
            assert_eq!(err.field(), Some(field), "{parts:?}");
        }
    }

    #[test]
    fn test_from_parts_renders_a_line_that_reads_back() {
        let mut parts = m1_parts();
        parts.common_names = vec!["Crab Nebula".into(), "Taurus A".into(), "3C 144".into()];
        parts.distance = DistanceRange::point(0.00001);
        parts.magnitude = 0.00001;
        parts.right_ascension = Angle::from_hours(24.0 - 1e-10);

        let built = Record::from_parts(parts).unwrap();
        let text = built.to_text();
        assert!(text.contains(", 0.00001, Taurus, 0.00001, 0h 0m 0.0000s, "), "{text}");

        let reparsed = Record::parse(&text).unwrap();
        assert_eq!(reparsed.common_names(), built.common_names());
        assert_eq!(reparsed.to_text(), text);
    }

    #[test]
    fn test_round_trip_at_end_of_right_ascension() {
        let line = M2.replace("21h 33m 27.0200s", "23h 59m 59.99999s");
        let r = Record::parse(&line).unwrap();
        let text = r.to_text();
        assert!(text.contains(", 0h 0m 0.0000s, "), "{text}");
        assert_eq!(Record::parse(&text).unwrap().to_text(), text);
    }

    #[test]
    fn test_round_trip_tiny_values() {
        let line = M1
            .replace("4.9-8.1", "0.00001")
            .replace("8.4", "0.00001");
        let r = Record::parse(&line).unwrap();
        assert_eq!(r.to_text(), line);
        assert_eq!(Record::parse(&r.to_text()).unwrap(), r);
    }

    #[test]
    fn test_angular_distance_to_self_is_zero() {
        let r = Record::parse(M1).unwrap();
        assert_eq!(r.angular_distance(&r).radians(), 0.0);
    }

    #[test]
    fn test_cmp_brightness() {
        let m1 = Record::parse(M1).unwrap();
        let m2 = Record::parse(M2).unwrap();
        assert_eq!(m2.cmp_brightness(&m1), Ordering::Less);
        assert_eq!(m1.cmp_brightness(&m1), Ordering::Equal);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let r = Record::parse(M1).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
