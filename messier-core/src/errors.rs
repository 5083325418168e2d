//! Error types for angle parsing.
//!
//! Every failure in this crate is an [`AngleError`]. There are two ways a sexagesimal
//! string can be wrong:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`Malformed`](AngleError::Malformed) | The text does not have the catalogue shape at all |
//! | [`OutOfRange`](AngleError::OutOfRange) | The shape is right but a component exceeds its limit |
//!
//! Callers that validate whole records map these into their own field-level errors;
//! [`AngleError::expected`] gives the human-readable expectation for either case.

use thiserror::Error;

/// The part of a sexagesimal value that failed a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleComponent {
    Hours,
    Degrees,
    Minutes,
    Seconds,
    /// The combined value, e.g. a declination of 90° 0' 1".
    Total,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("Malformed {notation} '{input}': expected {expected}")]
    Malformed {
        notation: &'static str,
        input: String,
        expected: &'static str,
    },

    #[error("{component:?} out of range in '{input}': {value} must be {limit}")]
    OutOfRange {
        component: AngleComponent,
        value: f64,
        input: String,
        limit: &'static str,
    },
}

pub type AngleResult<T> = Result<T, AngleError>;

impl AngleError {
    pub fn malformed(notation: &'static str, input: &str, expected: &'static str) -> Self {
        Self::Malformed {
            notation,
            input: input.to_string(),
            expected,
        }
    }

    pub fn out_of_range(
        component: AngleComponent,
        value: f64,
        input: &str,
        limit: &'static str,
    ) -> Self {
        Self::OutOfRange {
            component,
            value,
            input: input.to_string(),
            limit,
        }
    }

    /// Describes what valid input looks like, for either variant.
    pub fn expected(&self) -> String {
        match self {
            Self::Malformed { expected, .. } => (*expected).to_string(),
            Self::OutOfRange {
                component, limit, ..
            } => format!("{:?} {}", component, limit).to_lowercase(),
        }
    }

    /// The offending input text.
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input, .. } | Self::OutOfRange { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = AngleError::malformed("HMS", "12:34:56", "<h>h <m>m <s>s");
        assert_eq!(
            err.to_string(),
            "Malformed HMS '12:34:56': expected <h>h <m>m <s>s"
        );
        assert_eq!(err.expected(), "<h>h <m>m <s>s");
        assert_eq!(err.input(), "12:34:56");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = AngleError::out_of_range(AngleComponent::Minutes, 61.0, "5h 61m 0s", "< 60");
        assert!(err.to_string().contains("Minutes out of range"));
        assert!(err.to_string().contains("61 must be < 60"));
        assert_eq!(err.expected(), "minutes < 60");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AngleError>();
        _assert_sync::<AngleError>();
    }
}
