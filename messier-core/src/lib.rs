//! Angle primitives for catalogue positions.
//!
//! `messier-core` holds the small amount of spherical astronomy the catalogue needs:
//! an [`Angle`] stored in radians, the strict sexagesimal notation used by catalogue
//! lines, and the great-circle separation between two equatorial positions.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, HMS/DMS parsing ([`parse_hms`](angle::parse_hms), [`parse_dms`](angle::parse_dms)), fixed-precision formatters |
//! | [`math`] | [`angular_separation`](math::angular_separation) on the celestial sphere |
//! | [`constants`] | Unit conversion constants |
//! | [`errors`] | [`AngleError`] and [`AngleResult`] |
//!
//! # Example
//!
//! ```
//! use messier_core::angle::{parse_dms, parse_hms, DmsFmt, HmsFmt};
//! use messier_core::math::angular_separation;
//!
//! let ra = parse_hms("5h 34m 31.9400s").unwrap();
//! let dec = parse_dms("22° 0' 52.2000\"").unwrap();
//!
//! assert_eq!(HmsFmt { frac_digits: 4 }.fmt(ra), "5h 34m 31.9400s");
//! assert_eq!(DmsFmt { frac_digits: 4 }.fmt(dec), "22° 0' 52.2000\"");
//! assert_eq!(angular_separation(ra, dec, ra, dec).radians(), 0.0);
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`Angle`] (as a bare radian value).

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;

pub use angle::Angle;
pub use errors::{AngleComponent, AngleError, AngleResult};
