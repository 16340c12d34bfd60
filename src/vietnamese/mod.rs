//! Vietnamese calendar
//!
//! Note: for the sake of the many calendrical terms, the documentation of this
//! module is written in Vietnamese.
//!
//! Âm lịch được tính trực tiếp từ các công thức thiên văn trong [`ephemeris`],
//! theo múi giờ do người gọi chọn (mặc định UTC+7, xem
//! [`UtcOffset`](crate::UtcOffset)).
//!
//! Quy tắc tóm tắt:
//!
//! - Ngày đầu tháng âm lịch là ngày (theo giờ địa phương) chứa điểm sóc.
//! - Tháng 11 âm lịch luôn là tháng chứa ngày Đông chí.
//! - Nếu giữa hai tháng 11 liên tiếp có 13 tháng, năm đó có tháng nhuận: tháng
//!   nhuận là tháng đầu tiên không chứa điểm chuyển cung 30° của Mặt Trời, và
//!   mang số của tháng liền trước.

use std::f64::consts::PI;

use tracing::{debug, trace, warn};

use crate::date::CivilDate;
use crate::error::{Error, Result};
use crate::time_scales::{JulianDay, UtcOffset};

pub mod can_chi;
pub mod ephemeris;

use ephemeris::{lunation_index, new_moon, solar_term_sector, sun_longitude};

/// Bảng tháng của một năm âm lịch, tính từ tháng 11 của năm trước đến tháng
/// 11 của năm `year`.
///
/// Bảng có 13 mục, hoặc 14 nếu có tháng nhuận; mục cuối là tháng 11 của năm
/// `year`, chỉ dùng để đánh dấu ngày cuối của bảng.
///
/// # Ví dụ
///
/// ```
/// use amlich::{CivilDate, UtcOffset};
/// use amlich::vietnamese::{LunarDate, LunarYear, Month::*};
///
/// let year = LunarYear::new(2000, UtcOffset::VIETNAM);
/// let date = CivilDate::new(2000, 1, 1);
///
/// assert_eq!(Ok(LunarDate::new(1999, Common(11), 25)), year.lunar_date_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// Năm dương lịch chứa phần lớn bảng
    pub year: i32,
    /// Múi giờ dùng để tính bảng
    pub offset: UtcOffset,
    /// Các ngày đầu tháng theo thứ tự, gồm cả tháng 11 của năm `year`
    pub months: Vec<MonthStart>,
}

/// Thông tin ngày đầu tháng
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonthStart {
    /// Tên tháng
    pub month: Month,
    /// Ngày đầu tháng (dương lịch, giờ địa phương)
    pub date: CivilDate,
    /// Thời điểm nửa đêm đầu ngày `date`
    pub jd: JulianDay,
}

impl MonthStart {
    /// Số thứ tự tháng từ `0` đến `11`, trong đó `0` là tháng 12.
    pub fn ordinal(&self) -> u32 {
        self.month.ordinal()
    }
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
}

/// Tên tháng từ `1` đến `12`; `Common` là tháng thường, `Leap` là tháng nhuận.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Tạo tên tháng từ số thứ tự (`0` hoặc `12` đều là tháng 12) và cờ nhuận.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::vietnamese::Month::{self, *};
    ///
    /// assert_eq!(Common(12), Month::from_ordinal(0, false));
    /// assert_eq!(Leap(4), Month::from_ordinal(4, true));
    /// ```
    pub fn from_ordinal(ordinal: u32, is_leap: bool) -> Self {
        let num = if ordinal == 0 { 12 } else { ordinal };
        if is_leap {
            Self::Leap(num)
        } else {
            Self::Common(num)
        }
    }
    /// Lấy số tháng, không phân biệt tháng thường hay nhuận.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// Số thứ tự tháng từ `0` đến `11`, trong đó `0` là tháng 12.
    pub fn ordinal(&self) -> u32 {
        self.num() % 12
    }
    /// Tháng nhuận là `true`, tháng thường là `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// Một ngày âm lịch.
///
/// `year` là năm âm lịch: tháng 11 và tháng 12 thuộc năm trước của năm dương
/// lịch mà phần lớn năm âm lịch sau đó rơi vào.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    pub fn new(year: i32, month: Month, day: u32) -> Self {
        Self { year, month, day }
    }
    /// Số thứ tự tháng từ `0` đến `11`, trong đó `0` là tháng 12.
    pub fn ordinal(&self) -> u32 {
        self.month.ordinal()
    }
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
}

/// Cho biết ngày đã cho không thuộc bảng tháng, và nằm trước hay sau bảng.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum OutsideYear {
    #[error("date precedes the lunar year")]
    Before,
    #[error("date follows the lunar year")]
    After,
}

/// Tìm ngày đầu tháng 11 âm lịch (tháng chứa Đông chí) của năm `year`.
///
/// # Ví dụ
///
/// ```
/// use amlich::{CivilDate, UtcOffset};
/// use amlich::vietnamese::month_11;
///
/// assert_eq!(CivilDate::new(1999, 12, 8), month_11(1999, UtcOffset::VIETNAM));
/// ```
pub fn month_11(year: i32, offset: UtcOffset) -> CivilDate {
    let dec_31 = JulianDay::from_local_date(CivilDate::new(year, 12, 31), offset);
    let k = lunation_index(dec_31).floor() as i32;
    let date = new_moon(k).local_date(offset);
    if sun_longitude(JulianDay::from_local_date(date, offset)) > 3.0 * PI / 2.0 {
        trace!(year, k, "new moon follows the winter solstice, taking the previous one");
        return new_moon(k - 1).local_date(offset);
    }
    date
}

impl LunarYear {
    /// Lập bảng tháng cho năm `year` theo múi giờ `offset`.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::UtcOffset;
    /// use amlich::vietnamese::{LunarYear, Month::*};
    ///
    /// let year = LunarYear::new(2017, UtcOffset::VIETNAM);
    /// assert_eq!(14, year.months.len());
    /// assert_eq!(Some(Leap(6)), year.leap_month());
    /// ```
    pub fn new(year: i32, offset: UtcOffset) -> Self {
        use Month::*;

        let first = month_11(year - 1, offset);
        let last = month_11(year, offset);
        let first_jd = JulianDay::from_local_date(first, offset);
        let last_jd = JulianDay::from_local_date(last, offset);
        let k = (lunation_index(first_jd) + 0.5).floor() as i32;
        let len = if last_jd - first_jd > 365.0 { 14 } else { 13 };

        let starts: Vec<_> = (0..len)
            .map(|i| match i {
                0 => (first, first_jd),
                _ if i == len - 1 => (last, last_jd),
                _ => {
                    let date = new_moon(k + i as i32).local_date(offset);
                    (date, JulianDay::from_local_date(date, offset))
                }
            })
            .collect();
        let sectors: Vec<_> = starts
            .iter()
            .map(|&(_, jd)| solar_term_sector(sun_longitude(jd)))
            .collect();

        let mut needs_leap = len == 14;
        let mut months = Vec::with_capacity(len);
        let mut month = 10;
        for (i, &(date, jd)) in starts.iter().enumerate() {
            if needs_leap && sectors.get(i + 1) == Some(&sectors[i]) {
                months.push(MonthStart {
                    month: Leap(month),
                    date,
                    jd,
                });
                needs_leap = false;
                continue;
            }
            month = month % 12 + 1;
            months.push(MonthStart {
                month: Common(month),
                date,
                jd,
            });
        }
        if needs_leap {
            warn!(year, %offset, "13 months between winter solstices but no leap month found");
        }

        let lunar_year = LunarYear {
            year,
            offset,
            months,
        };
        debug!(
            year,
            %offset,
            months = lunar_year.months.len(),
            leap = ?lunar_year.leap_month(),
            "built lunar year"
        );
        lunar_year
    }

    /// Chọn bảng tháng chứa ngày `date`: bảng của năm `date.year`, hoặc của
    /// năm sau nếu `date` đã vào tháng 11 của năm đó.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::{CivilDate, UtcOffset};
    /// use amlich::vietnamese::LunarYear;
    ///
    /// let date = CivilDate::new(1999, 12, 31);
    /// let year = LunarYear::containing(date, UtcOffset::VIETNAM);
    ///
    /// assert_eq!(2000, year.year);
    /// ```
    pub fn containing(date: CivilDate, offset: UtcOffset) -> Self {
        let lunar_year = Self::new(date.year, offset);
        if JulianDay::from_local_date(date, offset) >= lunar_year.last().jd {
            Self::new(date.year + 1, offset)
        } else {
            lunar_year
        }
    }

    /// Ngày đầu bảng (đầu tháng 11 năm trước).
    pub fn start(&self) -> CivilDate {
        self.months[0].date
    }
    /// Ngày đầu tháng 11 của năm `year`, ngay sau ngày cuối của bảng.
    pub fn end(&self) -> CivilDate {
        self.last().date
    }

    /// Tháng nhuận của bảng, nếu có.
    pub fn leap_month(&self) -> Option<Month> {
        self.months.iter().map(|m| m.month).find(Month::is_leap)
    }

    /// Số ngày của tháng `month` trong bảng (29 hoặc 30).
    ///
    /// Tháng 11 cuối bảng không có đủ thông tin nên không tính; với
    /// `Common(11)` là tháng đầu bảng.
    pub fn days_in(&self, month: Month) -> Option<u32> {
        self.months
            .windows(2)
            .find(|pair| pair[0].month == month)
            .map(|pair| (pair[1].date - pair[0].date) as u32)
    }

    /// Lấy ngày âm lịch của ngày `date`.
    ///
    /// Nếu ngày đã cho không thuộc bảng thì trả về `Err` cho biết ngày đó nằm
    /// trước hay sau bảng.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::{CivilDate, UtcOffset};
    /// use amlich::vietnamese::{LunarDate, LunarYear, Month::*, OutsideYear};
    ///
    /// let year = LunarYear::new(2017, UtcOffset::VIETNAM);
    ///
    /// let date = CivilDate::new(2017, 7, 23);
    /// assert_eq!(Ok(LunarDate::new(2017, Leap(6), 1)), year.lunar_date_for(date));
    ///
    /// let date = CivilDate::new(2017, 12, 18);
    /// assert_eq!(Err(OutsideYear::After), year.lunar_date_for(date));
    /// ```
    pub fn lunar_date_for(&self, date: CivilDate) -> std::result::Result<LunarDate, OutsideYear> {
        let jd = JulianDay::from_local_date(date, self.offset);
        if jd < self.months[0].jd {
            return Err(OutsideYear::Before);
        } else if jd >= self.last().jd {
            return Err(OutsideYear::After);
        }
        Ok(self.lunar_date_at(date, jd))
    }

    /// Lấy ngày dương lịch của ngày âm lịch `date` trong bảng.
    ///
    /// Nếu bảng không có tháng (cùng cờ nhuận) ứng với năm âm lịch
    /// `date.year` thì trả về [`Error::UnrepresentableLunarDate`]. Ngày trong
    /// tháng không được kiểm tra: ngày vượt quá độ dài tháng sẽ rơi sang tháng
    /// sau.
    pub fn solar_date_for(&self, date: &LunarDate) -> Result<CivilDate> {
        self.months[..self.months.len() - 1]
            .iter()
            .find(|m| m.month == date.month && self.label(m.month) == date.year)
            .map(|m| m.date + (date.day as i32 - 1))
            .ok_or(Error::UnrepresentableLunarDate {
                year: date.year,
                month: date.month,
            })
    }

    fn last(&self) -> &MonthStart {
        &self.months[self.months.len() - 1]
    }

    /// Năm âm lịch của tháng `month` trong bảng.
    fn label(&self, month: Month) -> i32 {
        if month.num() >= 11 {
            self.year - 1
        } else {
            self.year
        }
    }

    fn lunar_date_at(&self, date: CivilDate, jd: JulianDay) -> LunarDate {
        let m = self
            .months
            .iter()
            .rposition(|m| m.jd <= jd)
            .map_or(&self.months[0], |i| &self.months[i]);
        // Whole days from the civil dates; local JDs carry rounding from the offset.
        let day = (date - m.date).max(0) as u32 + 1;
        LunarDate::new(self.label(m.month), m.month, day)
    }
}

/// Đổi ngày dương lịch `date` sang âm lịch theo múi giờ `offset`.
///
/// # Ví dụ
///
/// ```
/// use amlich::{CivilDate, UtcOffset};
/// use amlich::vietnamese::{LunarDate, Month::*, solar_to_lunar};
///
/// let date = solar_to_lunar(CivilDate::new(2000, 2, 5), UtcOffset::VIETNAM);
/// assert_eq!(LunarDate::new(2000, Common(1), 1), date); // Tết Canh Thìn
/// ```
pub fn solar_to_lunar(date: CivilDate, offset: UtcOffset) -> LunarDate {
    let jd = JulianDay::from_local_date(date, offset);
    LunarYear::containing(date, offset).lunar_date_at(date, jd)
}

/// Đổi ngày âm lịch `date` sang dương lịch theo múi giờ `offset`.
///
/// Trả về [`Error::UnrepresentableLunarDate`] nếu năm âm lịch đó không có tháng
/// được yêu cầu, chẳng hạn hỏi tháng nhuận của một năm không nhuận.
///
/// # Ví dụ
///
/// ```
/// use amlich::{CivilDate, UtcOffset};
/// use amlich::vietnamese::{LunarDate, Month::*, lunar_to_solar};
///
/// let date = LunarDate::new(2024, Common(1), 1);
/// assert_eq!(Ok(CivilDate::new(2024, 2, 10)), lunar_to_solar(date, UtcOffset::VIETNAM));
///
/// let date = LunarDate::new(2021, Leap(4), 1);
/// assert!(lunar_to_solar(date, UtcOffset::VIETNAM).is_err());
/// ```
pub fn lunar_to_solar(date: LunarDate, offset: UtcOffset) -> Result<CivilDate> {
    let year = if date.month.num() >= 11 {
        date.year + 1
    } else {
        date.year
    };
    LunarYear::new(year, offset).solar_date_for(&date)
}
