pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const MINUTES_PER_UNIT: f64 = 60.0;

pub const SECONDS_PER_UNIT: f64 = 3600.0;

/// Upper bound (exclusive) of right ascension in hours.
pub const HOURS_PER_CIRCLE: f64 = 24.0;

/// Largest magnitude of a declination in degrees.
pub const DEC_LIMIT_DEG: f64 = 90.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_ARCMIN: f64 = 3437.746770784939252681588;
