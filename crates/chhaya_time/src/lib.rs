//! Time helpers for the eclipse solver.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) polynomial approximations
//! - Greenwich mean sidereal time
//! - A small calendar timestamp type that parses `YYYY-MM-DDThh:mm:ss`

pub mod date;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use date::CalendarTime;
pub use delta_t::{delta_t_seconds, tt_to_ut_jd, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
