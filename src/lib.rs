//! Conversion between solar dates and the Vietnamese lunisolar calendar (âm
//! lịch).
//!
//! The lunar calendar is computed from astronomical formulas (new moons and the
//! solar longitude) rather than from tables, for a fixed UTC offset chosen by
//! the caller. Solar dates use the Gregorian calendar from 1582-10-15 and the
//! proleptic Julian calendar before it.
//!
//! # Examples
//!
//! Basic usage with [`CivilDate`]:
//!
//! ```
//! use amlich::CivilDate;
//!
//! let date = CivilDate::new(2000, 1, 1);
//!
//! assert_eq!(2451544.5, date.jd().0);
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Vietnamese lunar calendar:
//!
//! ```
//! use amlich::{CivilDate, UtcOffset};
//! use amlich::vietnamese::{self, LunarDate, Month::*, can_chi::CanChi};
//!
//! let date = CivilDate::new(2000, 1, 1);
//! let lunar = vietnamese::solar_to_lunar(date, UtcOffset::VIETNAM);
//!
//! assert_eq!(LunarDate::new(1999, Common(11), 25), lunar);
//! assert_eq!("Kỷ Mão", CanChi::of_year(lunar.year).to_string());
//! assert_eq!(Ok(date), vietnamese::lunar_to_solar(lunar, UtcOffset::VIETNAM));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization of dates, months and [`UtcOffset`] (as a plain
//!   number of hours).

pub mod date;
pub mod error;
pub mod time_scales;
pub mod vietnamese;

pub use date::CivilDate;
pub use error::{Error, Result};
pub use time_scales::{JulianDay, UtcOffset};
