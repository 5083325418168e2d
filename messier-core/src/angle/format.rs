//! Fixed-precision sexagesimal formatting.
//!
//! The formatters produce exactly the notation [`super::parse_hms`] and
//! [`super::parse_dms`] accept, so a value written with 4 fractional digits reads back
//! to within 5e-5 seconds:
//!
//! ```
//! use messier_core::Angle;
//! use messier_core::angle::{DmsFmt, HmsFmt};
//!
//! let ra = Angle::from_hours(18.0 + 20.0 / 60.0 + 26.0 / 3600.0);
//! assert_eq!(HmsFmt { frac_digits: 4 }.fmt(ra), "18h 20m 26.0000s");
//!
//! let dec = Angle::from_degrees(-(16.0 + 10.0 / 60.0 + 36.0 / 3600.0));
//! assert_eq!(DmsFmt { frac_digits: 4 }.fmt(dec), "-16° 10' 36.0000\"");
//! ```
//!
//! The value is rounded once, to an integer count of the smallest printed unit, and then
//! split into whole/minutes/seconds. Rounding after splitting would turn 59.99999s into
//! "60.0000s".

use super::Angle;

/// Formatter for declination: `<d>° <m>' <s>"`.
///
/// Positive values carry no sign; negative values (including negative zero) get a
/// leading `-` on the degree component.
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// Formatter for right ascension: `<h>h <m>m <s>s`.
///
/// Angles wrap into [0, 24h), after rounding as well as before: a value that rounds up
/// to 24h prints as `0h 0m 0.0000s`.
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let sign = if a.is_sign_negative() { "-" } else { "" };
        let parts = Sexagesimal::split(a.degrees().abs(), self.frac_digits);
        format!(
            "{sign}{}° {}' {}\"",
            parts.whole,
            parts.minutes,
            parts.seconds_text()
        )
    }
}

impl HmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let hours = a.hours().rem_euclid(24.0);
        let per_day = 24 * 3600 * 10u64.pow(self.frac_digits as u32);
        let ticks = Sexagesimal::ticks(hours, self.frac_digits) % per_day;
        let parts = Sexagesimal::from_ticks(ticks, self.frac_digits);
        format!(
            "{}h {}m {}s",
            parts.whole,
            parts.minutes,
            parts.seconds_text()
        )
    }
}

struct Sexagesimal {
    whole: u64,
    minutes: u64,
    seconds_ticks: u64,
    frac_digits: u8,
}

impl Sexagesimal {
    fn split(value: f64, frac_digits: u8) -> Self {
        Self::from_ticks(Self::ticks(value, frac_digits), frac_digits)
    }

    /// `value` in units of the last printed seconds digit, rounded half away from zero.
    fn ticks(value: f64, frac_digits: u8) -> u64 {
        let scale = 10u64.pow(frac_digits as u32);
        libm::round(value * 3600.0 * scale as f64) as u64
    }

    fn from_ticks(ticks: u64, frac_digits: u8) -> Self {
        let scale = 10u64.pow(frac_digits as u32);
        let per_whole = 3600 * scale;
        let per_minute = 60 * scale;
        let rem = ticks % per_whole;
        Self {
            whole: ticks / per_whole,
            minutes: rem / per_minute,
            seconds_ticks: rem % per_minute,
            frac_digits,
        }
    }

    fn seconds_text(&self) -> String {
        if self.frac_digits == 0 {
            return self.seconds_ticks.to_string();
        }
        let scale = 10u64.pow(self.frac_digits as u32);
        format!(
            "{}.{:0width$}",
            self.seconds_ticks / scale,
            self.seconds_ticks % scale,
            width = self.frac_digits as usize
        )
    }
}
