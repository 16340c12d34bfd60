//! Công thức thiên văn: thời điểm sóc và kinh độ Mặt Trời
//!
//! Thay vì tra bảng lịch thiên văn, mô-đun này tính trực tiếp theo các chuỗi
//! nhiễu loạn rút gọn. Mọi kết quả đều là thời điểm [`JulianDay`] theo giờ
//! quốc tế (UT), chưa áp dụng múi giờ.

use std::f64::consts::{PI, TAU};

use crate::time_scales::JulianDay;

/// Thời điểm điểm sóc gốc `k = 0` (1900-01-01 13:51 UT).
pub const NEW_MOON_EPOCH: f64 = 2415021.076998695;

/// Độ dài trung bình của một tháng giao hội (ngày).
pub const SYNODIC_MONTH: f64 = 29.530588853;

const DR: f64 = PI / 180.0;

/// Ước lượng số hiệu điểm sóc (tính từ [`NEW_MOON_EPOCH`]) tại thời điểm `jd`,
/// dưới dạng số thực.
pub fn lunation_index(jd: JulianDay) -> f64 {
    (jd.0 - NEW_MOON_EPOCH) / SYNODIC_MONTH
}

/// Tính thời điểm điểm sóc thứ `k` tính từ [`NEW_MOON_EPOCH`].
///
/// Hàm xác định với mọi `k`; các điểm sóc tăng dần theo `k`, cách nhau chừng
/// một [`SYNODIC_MONTH`].
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::ephemeris::new_moon;
///
/// let jd = new_moon(1236);
/// assert!((jd.0 - 2451520.4393767994).abs() < 5e-7);
/// ```
pub fn new_moon(k: i32) -> JulianDay {
    let k = f64::from(k);
    // Số thế kỷ Julius tính từ 1900-01-00.5
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut jd1 = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DR).sin();

    // Độ dị thường trung bình của Mặt Trời, của Mặt Trăng, và đối số vĩ độ
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;

    let mut c1 = (0.1734 - 0.000393 * t) * (DR * m).sin() + 0.0021 * (2.0 * DR * m).sin();
    c1 = c1 - 0.4068 * (DR * mpr).sin() + 0.0161 * (DR * 2.0 * mpr).sin();
    c1 -= 0.0004 * (DR * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (DR * 2.0 * f).sin() - 0.0051 * (DR * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (DR * (m - mpr)).sin() + 0.0004 * (DR * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (DR * (2.0 * f - m)).sin() - 0.0006 * (DR * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (DR * (2.0 * f - mpr)).sin() + 0.0005 * (DR * (2.0 * mpr + m)).sin();

    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };

    JulianDay(jd1 + c1 - delta_t)
}

/// Tính kinh độ hoàng đạo biểu kiến của Mặt Trời tại thời điểm `jd`, đơn vị
/// radian, trong khoảng `[0, 2π)`.
///
/// # Ví dụ
///
/// ```
/// use amlich::JulianDay;
/// use amlich::vietnamese::ephemeris::sun_longitude;
///
/// let l = sun_longitude(JulianDay(2451550.2083333335));
/// assert!((l - 4.986246180809974).abs() < 5e-7);
/// ```
pub fn sun_longitude(jd: JulianDay) -> f64 {
    // Số thế kỷ Julius tính từ J2000.0
    let t = (jd.0 - 2451545.0) / 36525.0;
    let t2 = t * t;

    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;

    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DR * m).sin();
    dl = dl + (0.019993 - 0.000101 * t) * (DR * 2.0 * m).sin() + 0.000290 * (DR * 3.0 * m).sin();

    let l = (l0 + dl) * DR;
    let l = l - TAU * (l / TAU).trunc();
    if l < 0.0 { l + TAU } else { l }
}

/// Cung hoàng đạo 30° chứa kinh độ `longitude` (radian), từ `0` đến `11`.
///
/// Cung `9` bắt đầu từ điểm Đông chí (3π/2).
pub fn solar_term_sector(longitude: f64) -> i32 {
    (longitude / PI * 6.0).floor() as i32
}
