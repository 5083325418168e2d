//! Core angle type.
//!
//! [`Angle`] stores a single `f64` in radians. Constructors and accessors cover the
//! units that appear in catalogue lines: degrees for declination, hours for right
//! ascension.
//!
//! ```
//! use messier_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//!
//! let dec = Angle::from_degrees(-16.0);
//! assert!(dec.is_sign_negative());
//! ```

use std::fmt;
use std::ops::{Neg, Sub};

use crate::constants::{DEGREES_PER_HOUR, RAD_TO_ARCMIN};

/// An angular measurement stored as radians.
///
/// `PartialEq` and `PartialOrd` compare the radian values; `Eq`/`Ord` are not
/// implemented because the value may be NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours of right ascension (1h = 15°).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * DEGREES_PER_HOUR).to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    #[inline]
    pub fn arcminutes(self) -> f64 {
        self.rad * RAD_TO_ARCMIN
    }

    /// Returns `(sin, cos)` of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// True for negative angles, including negative zero.
    ///
    /// A declination written as `-0° 30' 0"` parses to a small negative value; one
    /// written as `-0° 0' 0"` parses to `-0.0` and keeps its sign through here.
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.rad.is_sign_negative()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.rad - rhs.rad)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.rad)
    }
}

impl fmt::Display for Angle {
    /// Decimal degrees with 6 places. Use [`super::HmsFmt`] or [`super::DmsFmt`]
    /// for catalogue notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
