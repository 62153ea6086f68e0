//! Calendar timestamp with sub-second precision.
//!
//! The scale (UT or TT) is whatever the caller says it is; this type only
//! does calendar arithmetic.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// Calendar date and time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::OutOfRange("month must be 1-12"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(TimeError::OutOfRange("day must be 1-31"));
        }
        if self.hour > 23 {
            return Err(TimeError::OutOfRange("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::OutOfRange("minute must be 0-59"));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::OutOfRange("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Julian Date on the same time scale as the calendar fields.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar fields for a Julian Date, rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor();
        let millis = ((day_frac - day) * SECONDS_PER_DAY * 1000.0).round() as u64;
        // Rounding up to the next midnight: let the Julian Date carry the day.
        if millis >= 86_400_000 {
            return Self::from_jd(calendar_to_jd(year, month, day + 1.0));
        }
        let hour = (millis / 3_600_000) as u32;
        let minute = ((millis % 3_600_000) / 60_000) as u32;
        let second = (millis % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day: day as u32,
            hour,
            minute,
            second,
        }
    }
}

impl FromStr for CalendarTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed(s.to_string());
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = match trimmed.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        // A leading '-' belongs to the year.
        let (sign, date_body) = match date.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date),
        };
        let mut parts = date_body.split('-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut fields = t.split(':');
                let hour: u32 = fields.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
                let minute: u32 =
                    fields.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
                let second: f64 = match fields.next() {
                    Some(p) => p.parse().map_err(|_| malformed())?,
                    None => 0.0,
                };
                if fields.next().is_some() {
                    return Err(malformed());
                }
                (hour, minute, second)
            }
        };

        let parsed = Self::new(sign * year, month, day, hour, minute, second);
        parsed.validate()?;
        Ok(parsed)
    }
}

impl Display for CalendarTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
