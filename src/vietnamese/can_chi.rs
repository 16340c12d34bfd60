//! Can Chi (thiên can, địa chi)
//!
//! Chu kỳ 60 được đánh số sao cho số `1` là Giáp Tý; số `0` (cũng như `60`)
//! là Quý Hợi. Số âm được quy về chu kỳ.

use std::fmt;

use super::Month;
use crate::date::CivilDate;

/// Thiên can
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stem {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// Địa chi
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Branch {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

// Mục 0 là phần tử thứ 10 (12) của chu kỳ.
const STEMS: [Stem; 10] = {
    use Stem::*;
    [Quy, Giap, At, Binh, Dinh, Mau, Ky, Canh, Tan, Nham]
};
const BRANCHES: [Branch; 12] = {
    use Branch::*;
    [Hoi, Ty, Suu, Dan, Mao, Thin, Ti, Ngo, Mui, Than, Dau, Tuat]
};

impl Stem {
    /// Tên can có dấu, ví dụ `"Giáp"`.
    pub fn name(&self) -> &'static str {
        use Stem::*;
        match self {
            Giap => "Giáp",
            At => "Ất",
            Binh => "Bính",
            Dinh => "Đinh",
            Mau => "Mậu",
            Ky => "Kỷ",
            Canh => "Canh",
            Tan => "Tân",
            Nham => "Nhâm",
            Quy => "Quý",
        }
    }
}

impl Branch {
    /// Tên chi có dấu, ví dụ `"Tý"`.
    pub fn name(&self) -> &'static str {
        use Branch::*;
        match self {
            Ty => "Tý",
            Suu => "Sửu",
            Dan => "Dần",
            Mao => "Mão",
            Thin => "Thìn",
            Ti => "Tỵ",
            Ngo => "Ngọ",
            Mui => "Mùi",
            Than => "Thân",
            Dau => "Dậu",
            Tuat => "Tuất",
            Hoi => "Hợi",
        }
    }
}

/// Một cặp can chi, hiển thị dạng `"Giáp Tý"`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CanChi {
    pub stem: Stem,
    pub branch: Branch,
}

/// Lấy can chi ứng với số `index` trong chu kỳ 60.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::can_chi::can_chi;
///
/// assert_eq!("Giáp Tý", can_chi(1).to_string());
/// assert_eq!("Quý Hợi", can_chi(60).to_string());
/// assert_eq!("Quý Hợi", can_chi(0).to_string());
/// ```
pub fn can_chi(index: i64) -> CanChi {
    CanChi {
        stem: STEMS[index.rem_euclid(10) as usize],
        branch: BRANCHES[index.rem_euclid(12) as usize],
    }
}

impl CanChi {
    /// Can chi của năm âm lịch `year`.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::vietnamese::can_chi::CanChi;
    ///
    /// assert_eq!("Canh Thìn", CanChi::of_year(2000).to_string());
    /// ```
    pub fn of_year(year: i32) -> Self {
        can_chi(i64::from(year) + 57)
    }

    /// Can chi của tháng `month` năm âm lịch `year`. Tháng nhuận mang can chi
    /// của tháng thường cùng số.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::vietnamese::{Month::*, can_chi::CanChi};
    ///
    /// assert_eq!("Mậu Dần", CanChi::of_month(2000, Common(1)).to_string());
    /// ```
    pub fn of_month(year: i32, month: Month) -> Self {
        can_chi(i64::from(year) * 12 + i64::from(month.num()) + 14)
    }

    /// Can chi của ngày dương lịch `date`.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::CivilDate;
    /// use amlich::vietnamese::can_chi::CanChi;
    ///
    /// assert_eq!("Mậu Ngọ", CanChi::of_day(CivilDate::new(2000, 1, 1)).to_string());
    /// ```
    pub fn of_day(date: CivilDate) -> Self {
        can_chi(date.jdn() + 50)
    }
}

impl fmt::Display for CanChi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem.name(), self.branch.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle() {
        for (std, num) in [
            ("Giáp Tý", 1),
            ("Canh Dần", 27),
            ("Quý Hợi", 60),
            ("Quý Hợi", 0),
            ("Nhâm Tuất", -1),
            ("Giáp Tý", 61),
        ] {
            assert_eq!(std, can_chi(num).to_string(), "{num}");
        }
    }

    #[test]
    fn years() {
        for (std, year) in [
            ("Giáp Tý", 1984),
            ("Canh Thìn", 2000),
            ("Ất Tỵ", 2025),
            ("Giáp Tý", -2696),
        ] {
            assert_eq!(std, CanChi::of_year(year).to_string(), "{year}");
        }
    }

    #[test]
    fn months() {
        use Month::*;
        let data = [
            ((2000, Common(1)), "Mậu Dần"),
            ((2000, Common(12)), "Kỷ Sửu"),
            ((2017, Common(6)), "Đinh Mùi"),
            ((2017, Leap(6)), "Đinh Mùi"),
        ];
        for ((year, month), std) in data {
            assert_eq!(std, CanChi::of_month(year, month).to_string(), "{year} {month:?}");
        }
    }

    #[test]
    fn days() {
        for ((y, m, d), std) in [
            ((2000, 1, 1), "Mậu Ngọ"),
            ((1970, 1, 1), "Tân Tỵ"),
            ((2021, 9, 8), "Kỷ Mùi"),
        ] {
            assert_eq!(std, CanChi::of_day(CivilDate::new(y, m, d)).to_string());
        }
    }
}
