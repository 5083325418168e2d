mod core;
mod format;
mod parse;

pub use self::core::Angle;
pub use format::{DmsFmt, HmsFmt};
pub use parse::{parse_dms, parse_hms, DMS_PATTERN, HMS_PATTERN};
