//! Error taxonomy for catalogue parsing and queries.
//!
//! | Variant | Raised by | Recoverable? |
//! |---------|-----------|--------------|
//! | [`MalformedLine`](CatalogueError::MalformedLine) | tokenizer: wrong field count, unterminated quote | No |
//! | [`InvalidField`](CatalogueError::InvalidField) | field validators | No |
//! | [`NotFound`](CatalogueError::NotFound) | lookups and removals | Yes |
//! | [`EmptyCatalogue`](CatalogueError::EmptyCatalogue) | extremal queries | Yes |
//! | [`AtLine`](CatalogueError::AtLine) | strict ingest, wrapping one of the above | No |
//! | [`Io`](CatalogueError::Io) | file reading | No |
//!
//! "Recoverable" means the catalogue is intact and the caller can treat the outcome as
//! "no such object". A parse failure only ever affects the record being built.

use messier_core::AngleError;
use std::fmt;
use thiserror::Error;

/// The nine fields of a catalogue line, in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PrimaryId,
    SecondaryId,
    CommonNames,
    Category,
    Distance,
    Region,
    Magnitude,
    RightAscension,
    Declination,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::PrimaryId,
        Field::SecondaryId,
        Field::CommonNames,
        Field::Category,
        Field::Distance,
        Field::Region,
        Field::Magnitude,
        Field::RightAscension,
        Field::Declination,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::PrimaryId => "primary id",
            Field::SecondaryId => "secondary id",
            Field::CommonNames => "common names",
            Field::Category => "category",
            Field::Distance => "distance",
            Field::Region => "region",
            Field::Magnitude => "apparent magnitude",
            Field::RightAscension => "right ascension",
            Field::Declination => "declination",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Malformed line: {message}")]
    MalformedLine { message: String },

    #[error("Invalid {field}: expected {pattern}, got '{received}'")]
    InvalidField {
        field: Field,
        pattern: String,
        received: String,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Empty catalogue: {operation} needs at least one record")]
    EmptyCatalogue { operation: &'static str },

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<CatalogueError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;

impl CatalogueError {
    pub fn malformed_line(message: impl Into<String>) -> Self {
        Self::MalformedLine {
            message: message.into(),
        }
    }

    pub fn invalid_field(field: Field, pattern: impl Into<String>, received: &str) -> Self {
        Self::InvalidField {
            field,
            pattern: pattern.into(),
            received: received.to_string(),
        }
    }

    /// Maps an angle parse failure onto the field it came from.
    pub fn from_angle(field: Field, error: AngleError) -> Self {
        Self::InvalidField {
            field,
            pattern: error.expected(),
            received: error.input().to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyCatalogue { operation }
    }

    pub fn at_line(line: usize, error: CatalogueError) -> Self {
        Self::AtLine {
            line,
            source: Box::new(error),
        }
    }

    /// The field that failed validation, looking through [`AtLine`](Self::AtLine).
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            Self::AtLine { source, .. } => source.field(),
            _ => None,
        }
    }

    /// Returns `true` for lookup outcomes that leave the catalogue untouched.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::EmptyCatalogue { .. } => true,
            Self::AtLine { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}
