//! Time points on the universal time line and their local civil dates.
//!
//! All computations in this crate compare and subtract [`JulianDay`] values;
//! civil dates only enter and leave through [`JulianDay::from_local_date`] and
//! [`JulianDay::local_date`], always with one fixed [`UtcOffset`].

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::date::CivilDate;
use crate::error::Error;

/// A time point in [universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented in Julian date (JD).
///
/// Integer values fall on noon UTC, so a civil day starts at `n + 0.5` UTC.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// Returns the time point of local midnight starting `date` in the
    /// timezone `offset`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{CivilDate, JulianDay, UtcOffset};
    ///
    /// let jd = JulianDay::from_local_date(CivilDate::new(2000, 1, 1), UtcOffset::VIETNAM);
    /// assert!((jd.0 - 2451544.2083333335).abs() < 5e-7);
    /// ```
    pub fn from_local_date(date: CivilDate, offset: UtcOffset) -> Self {
        Self(date.jd().0 - offset.days())
    }

    /// Returns the local date at this time point in the timezone `offset`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{CivilDate, JulianDay, UtcOffset};
    ///
    /// let date = JulianDay(2451544.2083333335).local_date(UtcOffset::VIETNAM);
    /// assert_eq!(CivilDate::new(2000, 1, 1), date);
    /// ```
    pub fn local_date(self, offset: UtcOffset) -> CivilDate {
        CivilDate::from_jd(Self(self.0 + offset.days()))
    }
}

impl Add<f64> for JulianDay {
    type Output = JulianDay;
    fn add(self, days: f64) -> Self::Output {
        JulianDay(self.0 + days)
    }
}
impl Sub<JulianDay> for JulianDay {
    type Output = f64;
    fn sub(self, rhs: JulianDay) -> Self::Output {
        self.0 - rhs.0
    }
}

/// A fixed civil-time offset, in hours east of UTC.
///
/// There is no timezone database behind it: the offset is whatever the caller
/// configured, and it applies the same way to every date.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UtcOffset(f64);

impl UtcOffset {
    pub const UTC: Self = Self(0.0);
    /// Vietnam (UTC+7), the default.
    pub const VIETNAM: Self = Self(7.0);
    /// China (UTC+8).
    pub const CHINA: Self = Self(8.0);

    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    pub const fn hours(&self) -> f64 {
        self.0
    }

    fn days(&self) -> f64 {
        self.0 / 24.0
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::VIETNAM
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0.0 {
            write!(f, "UTC{}", self.0)
        } else {
            write!(f, "UTC+{}", self.0)
        }
    }
}

impl FromStr for UtcOffset {
    type Err = Error;

    /// Parses `"7"`, `"+7"`, `"-3.5"`, `"UTC+7"` or `"GMT-5"`. A bare `"UTC"`
    /// is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::UtcOffset;
    ///
    /// assert_eq!(Ok(UtcOffset::VIETNAM), "UTC+7".parse());
    /// assert_eq!(Ok(UtcOffset::from_hours(-3.5)), "-3.5".parse());
    /// assert!("UTC+x".parse::<UtcOffset>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidUtcOffset {
            input: s.to_owned(),
        };
        let trimmed = s.trim();
        let number = ["UTC", "GMT"]
            .iter()
            .find_map(|prefix| {
                trimmed
                    .get(..prefix.len())
                    .filter(|head| head.eq_ignore_ascii_case(prefix))
                    .map(|_| &trimmed[prefix.len()..])
            })
            .unwrap_or(trimmed)
            .trim();
        if number.is_empty() {
            return if trimmed.is_empty() {
                Err(invalid())
            } else {
                Ok(Self::UTC)
            };
        }
        let hours: f64 = number.parse().map_err(|_| invalid())?;
        if !(-14.0..=14.0).contains(&hours) {
            return Err(invalid());
        }
        Ok(Self(hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_round_trip() {
        for offset in [UtcOffset::UTC, UtcOffset::VIETNAM, UtcOffset::from_hours(-5.0)] {
            for date in [
                CivilDate::new(2000, 1, 1),
                CivilDate::new(1582, 10, 15),
                CivilDate::new(1200, 2, 29),
            ] {
                let jd = JulianDay::from_local_date(date, offset);
                assert_eq!(date, jd.local_date(offset), "{date} at {offset}");
            }
        }
    }

    #[test]
    fn local_midnight_is_previous_utc_day() {
        let jd = JulianDay::from_local_date(CivilDate::new(2000, 1, 1), UtcOffset::VIETNAM);
        assert_eq!(CivilDate::new(1999, 12, 31), CivilDate::from_jd(jd));
        assert_eq!(CivilDate::new(2000, 1, 1), (jd + 0.5).local_date(UtcOffset::VIETNAM));
    }

    #[test]
    fn parse_offsets() {
        for (text, hours) in [
            ("7", 7.0),
            ("+7", 7.0),
            (" UTC+7 ", 7.0),
            ("utc-3.5", -3.5),
            ("GMT-5", -5.0),
            ("UTC", 0.0),
        ] {
            assert_eq!(Ok(UtcOffset::from_hours(hours)), text.parse(), "{text:?}");
        }
        for text in ["", "UTC+x", "NaN", "inf", "+25"] {
            assert_eq!(
                Err(Error::InvalidUtcOffset {
                    input: text.to_owned()
                }),
                text.parse::<UtcOffset>(),
                "{text:?}"
            );
        }
    }

    #[test]
    fn display_offsets() {
        assert_eq!("UTC+7", UtcOffset::VIETNAM.to_string());
        assert_eq!("UTC-3.5", UtcOffset::from_hours(-3.5).to_string());
        assert_eq!("UTC+0", UtcOffset::UTC.to_string());
        assert_eq!(UtcOffset::VIETNAM, UtcOffset::default());
    }
}
