//! Civil (solar) calendar dates.

use std::fmt;
use std::ops::{Add, Sub};

use crate::time_scales::JulianDay;

/// First day of the Gregorian calendar, 1582-10-15. Earlier dates are read as
/// proleptic Julian calendar dates.
const GREGORIAN_CUTOVER: (i64, i64, i64) = (1582, 10, 15);

/// Julian Day Number of [`GREGORIAN_CUTOVER`].
const GREGORIAN_CUTOVER_JDN: i64 = 2299161;

/// A day in the civil calendar: Gregorian from 1582-10-15 on, Julian before.
///
/// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
/// etc. Fields are not range checked; callers are expected to supply a real
/// calendar date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CivilDate {
    /// Creates a date from its year, month (`1..=12`) and day (`1..=31`).
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns the Julian date of 00:00 UTC on this day.
    ///
    /// Every intermediate quotient is truncated toward zero; the formulas are
    /// only correct in that form.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::CivilDate;
    ///
    /// assert_eq!(2451544.5, CivilDate::new(2000, 1, 1).jd().0);
    /// assert_eq!(2299159.5, CivilDate::new(1582, 10, 4).jd().0);
    /// assert_eq!(2299160.5, CivilDate::new(1582, 10, 15).jd().0);
    /// ```
    pub fn jd(&self) -> JulianDay {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        let days = if (y, m, d) >= GREGORIAN_CUTOVER {
            367 * y - (7 * (y + (m + 9) / 12)) / 4 - (3 * ((y + (m - 9) / 7) / 100 + 1)) / 4
                + (275 * m) / 9
                + d
                + 1721028
        } else {
            367 * y - (7 * (y + 5001 + (m - 9) / 7)) / 4 + (275 * m) / 9 + d + 1729776
        };
        JulianDay(days as f64 + 0.5)
    }

    /// Returns the civil date (in UTC) at the time point `jd`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{CivilDate, JulianDay};
    ///
    /// assert_eq!(CivilDate::new(2000, 1, 1), CivilDate::from_jd(JulianDay(2451544.5)));
    /// assert_eq!(CivilDate::new(1999, 12, 31), CivilDate::from_jd(JulianDay(2451544.2083333335)));
    /// ```
    pub fn from_jd(jd: JulianDay) -> Self {
        let z = (jd.0 + 0.5).trunc();
        let f = jd.0 + 0.5 - z;
        let z = z as i64;
        let a = if z < GREGORIAN_CUTOVER_JDN {
            z
        } else {
            let alpha = ((z as f64 - 1867216.25) / 36524.25).trunc() as i64;
            z + 1 + alpha - alpha / 4
        };
        let b = (a + 1524) as f64;
        let c = ((b - 122.1) / 365.25).trunc();
        let d = (365.25 * c).trunc();
        let e = ((b - d) / 30.6001).trunc();
        let day = (b - d - (30.6001 * e).trunc() + f).trunc() as i32;
        let (c, e) = (c as i32, e as i32);
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month < 3 { c - 4715 } else { c - 4716 };
        Self { year, month, day }
    }

    /// Returns the integer Julian Day Number of the day, i.e. of its noon.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::CivilDate;
    ///
    /// assert_eq!(2451545, CivilDate::new(2000, 1, 1).jdn());
    /// ```
    pub fn jdn(&self) -> i64 {
        (self.jd().0 + 0.5).floor() as i64
    }
}

impl fmt::Display for CivilDate {
    /// Formats the date in ISO 8601 format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Add<i32> for CivilDate {
    type Output = CivilDate;
    fn add(self, rhs: i32) -> Self::Output {
        CivilDate::from_jd(self.jd() + f64::from(rhs))
    }
}
impl Sub<CivilDate> for CivilDate {
    type Output = i32;
    fn sub(self, rhs: CivilDate) -> Self::Output {
        (self.jd() - rhs.jd()) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_jd() {
        for ((y, m, d), std) in [
            ((2000, 1, 1), 2451544.5),
            ((1582, 10, 4), 2299159.5),
            ((1582, 10, 15), 2299160.5),
            ((1, 1, 1), 1721423.5),
            ((1600, 3, 1), 2305507.5),
            ((0, 12, 31), 1721422.5),
        ] {
            assert_eq!(std, CivilDate::new(y, m, d).jd().0, "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn century_years_are_common() {
        for y in [1700, 1800, 1900, 2100] {
            let feb_28 = CivilDate::new(y, 2, 28);
            let mar_1 = CivilDate::new(y, 3, 1);
            assert_eq!(1, mar_1 - feb_28, "{y}");
        }
        assert_eq!(2, CivilDate::new(2000, 3, 1) - CivilDate::new(2000, 2, 28));
    }

    #[test]
    fn from_jd() {
        for (jd, std) in [
            (2451544.5, (2000, 1, 1)),
            (2451544.2083333335, (1999, 12, 31)),
            (2299160.5, (1582, 10, 15)),
            (2299159.5, (1582, 10, 4)),
            (0.0, (-4712, 1, 1)),
        ] {
            let date = CivilDate::from_jd(JulianDay(jd));
            assert_eq!(std, (date.year, date.month, date.day), "{jd}");
        }
    }

    #[test]
    fn cutover_is_one_day() {
        let last_julian = CivilDate::new(1582, 10, 4);
        assert_eq!(CivilDate::new(1582, 10, 15), last_julian + 1);
        assert_eq!(-1, last_julian - CivilDate::new(1582, 10, 15));
    }

    #[test]
    fn day_arithmetic() {
        let date = CivilDate::new(1999, 12, 31);
        assert_eq!(CivilDate::new(2000, 1, 1), date + 1);
        assert_eq!(CivilDate::new(1999, 11, 30), date + -31);
        assert_eq!(366, CivilDate::new(2001, 1, 1) - CivilDate::new(2000, 1, 1));
    }

    #[test]
    fn iso_format() {
        assert_eq!("2021-09-08", CivilDate::new(2021, 9, 8).to_string());
    }
}
