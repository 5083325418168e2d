//! Great-circle separation on the celestial sphere.
//!
//! The textbook form is the spherical law of cosines:
//!
//! ```text
//! θ = acos( sin δ1 · sin δ2 + cos δ1 · cos δ2 · cos(α1 − α2) )
//! ```
//!
//! [`angular_separation`] evaluates the same angle as `atan2(|a × b|, a · b)` (Vincenty).
//! The two agree to well under 1e-9 rad, but the `acos` form loses precision near 0 and
//! π and can return a tiny non-zero value for identical positions. The `atan2` form
//! returns exactly 0 for coincident inputs.

use crate::Angle;

/// Angular separation between two equatorial positions.
///
/// Symmetric in its arguments and in [0, π].
///
/// ```
/// use messier_core::Angle;
/// use messier_core::math::angular_separation;
///
/// let sep = angular_separation(
///     Angle::from_degrees(0.0),
///     Angle::from_degrees(0.0),
///     Angle::from_degrees(90.0),
///     Angle::from_degrees(0.0),
/// );
/// assert!((sep.degrees() - 90.0).abs() < 1e-10);
/// ```
pub fn angular_separation(ra1: Angle, dec1: Angle, ra2: Angle, dec2: Angle) -> Angle {
    let (d1_sin, d1_cos) = dec1.sin_cos();
    let (d2_sin, d2_cos) = dec2.sin_cos();
    let delta_lon = (ra2 - ra1).radians();

    Angle::from_radians(vincenty_angular_separation(
        d1_sin, d1_cos, d2_sin, d2_cos, delta_lon,
    ))
}

#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::hypot(
        cos_lat2 * sin_delta_lon,
        cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon,
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}
