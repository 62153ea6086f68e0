//! ΔT = TT − UT, in seconds.
//!
//! Polynomial expressions of Espenak & Meeus (NASA Five Millennium Canon,
//! 2006) for 1900–2150, with the Morrison & Stephenson long-term parabola
//! outside that range. Good to a second or two over the twentieth and
//! twenty-first centuries, which is all the report layer needs: the solver
//! itself runs entirely on TDB.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Days in one Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// Decimal year for a Julian Date (either scale; ΔT is insensitive to the difference).
fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds at the given Julian Date.
pub fn delta_t_seconds(jd: f64) -> f64 {
    let y = decimal_year(jd);
    match y {
        y if y < 1900.0 => long_term(y),
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}

/// Convert a TT (or TDB) Julian Date to UT.
pub fn tt_to_ut_jd(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(jd_tt) / SECONDS_PER_DAY
}
