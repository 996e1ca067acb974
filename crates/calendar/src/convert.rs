//! Gregorian <-> Jalali date conversion.
//!
//! Both directions go through a day count anchored at 1 January 1600
//! (Gregorian). 1 Farvardin 979 falls 79 days later. The Gregorian side
//! decomposes the count with the 400/100/4-year blocks of the 4/100/400 leap
//! rule; the Jalali side with 33-year cycles (12053 days), 4-year blocks
//! (1461 days) and 365-day years.
//!
//! All divisions on values that can go negative are floor divisions, so the
//! pair stays an exact inverse for years before the 1600 anchor as well.

use crate::month::Month;

/// Days per Gregorian month in a common year.
const GREGORIAN_DAYS_IN_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days per Jalali month in a common year.
const JALALI_DAYS_IN_MONTH: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

const GREGORIAN_ANCHOR_YEAR: i64 = 1600;
const JALALI_ANCHOR_YEAR: i64 = 979;
/// Days from 1 January 1600 to 1 Farvardin 979.
const ANCHOR_OFFSET_DAYS: i64 = 79;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_FIRST_CENTURY: i64 = 36_525;
const DAYS_PER_CENTURY: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_33_YEARS: i64 = 12_053;

fn is_gregorian_leap_year(year: i64) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

fn gregorian_month_length(index: usize, leap: bool) -> i64 {
    GREGORIAN_DAYS_IN_MONTH[index] + i64::from(index == 1 && leap)
}

/// Converts a Gregorian date to the Jalali calendar.
///
/// Returns `(year, month, day)`. The input is not validated; an
/// out-of-range month or day produces a meaningless (but non-panicking)
/// result.
///
/// # Example
///
/// ```
/// use jalali_calendar::{Month, gregorian_to_jalali};
///
/// assert_eq!(gregorian_to_jalali(2021, 1, 1), (1399, Month::Dey, 12));
/// ```
pub fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> (i32, Month, u32) {
    let gy = i64::from(year) - GREGORIAN_ANCHOR_YEAR;
    let gm = month.saturating_sub(1) as usize;
    let gd = i64::from(day) - 1;

    let mut day_no = 365 * gy + (gy + 3).div_euclid(4) - (gy + 99).div_euclid(100)
        + (gy + 399).div_euclid(400);
    day_no += GREGORIAN_DAYS_IN_MONTH.iter().take(gm).sum::<i64>();
    if gm > 1 && is_gregorian_leap_year(i64::from(year)) {
        day_no += 1;
    }
    day_no += gd;

    let mut j_day_no = day_no - ANCHOR_OFFSET_DAYS;
    let cycles = j_day_no.div_euclid(DAYS_PER_33_YEARS);
    j_day_no = j_day_no.rem_euclid(DAYS_PER_33_YEARS);

    let mut jy = JALALI_ANCHOR_YEAR + 33 * cycles + 4 * (j_day_no / DAYS_PER_4_YEARS);
    j_day_no %= DAYS_PER_4_YEARS;

    // The first year of each 4-year block is the long one.
    if j_day_no >= 366 {
        jy += (j_day_no - 1) / 365;
        j_day_no = (j_day_no - 1) % 365;
    }

    let mut i = 0;
    while i < 11 && j_day_no >= JALALI_DAYS_IN_MONTH[i] {
        j_day_no -= JALALI_DAYS_IN_MONTH[i];
        i += 1;
    }

    (jy as i32, Month::ALL[i], (j_day_no + 1) as u32)
}

/// Converts a Jalali date to the Gregorian calendar.
///
/// Returns `(year, month, day)` with the month in 1..=12. This is the exact
/// inverse of [`gregorian_to_jalali`] for every valid Jalali date.
///
/// # Example
///
/// ```
/// use jalali_calendar::{Month, jalali_to_gregorian};
///
/// assert_eq!(jalali_to_gregorian(1400, Month::Farvardin, 1), (2021, 3, 21));
/// ```
pub fn jalali_to_gregorian(year: i32, month: Month, day: u32) -> (i32, u32, u32) {
    let jy = i64::from(year) - JALALI_ANCHOR_YEAR;
    let jm = (month.number() - 1) as usize;
    let jd = i64::from(day) - 1;

    let mut j_day_no = 365 * jy + jy.div_euclid(33) * 8 + (jy.rem_euclid(33) + 3) / 4;
    j_day_no += JALALI_DAYS_IN_MONTH.iter().take(jm).sum::<i64>();
    j_day_no += jd;

    let mut g_day_no = j_day_no + ANCHOR_OFFSET_DAYS;
    let mut gy = GREGORIAN_ANCHOR_YEAR + 400 * g_day_no.div_euclid(DAYS_PER_400_YEARS);
    g_day_no = g_day_no.rem_euclid(DAYS_PER_400_YEARS);

    let mut leap = true;
    if g_day_no >= DAYS_PER_FIRST_CENTURY {
        // Past the first (leap) century of the 400-year block.
        g_day_no -= 1;
        gy += 100 * (g_day_no / DAYS_PER_CENTURY);
        g_day_no %= DAYS_PER_CENTURY;

        if g_day_no >= 365 {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * (g_day_no / DAYS_PER_4_YEARS);
    g_day_no %= DAYS_PER_4_YEARS;

    if g_day_no >= 366 {
        leap = false;
        g_day_no -= 1;
        gy += g_day_no / 365;
        g_day_no %= 365;
    }

    let mut i = 0;
    while i < 11 && g_day_no >= gregorian_month_length(i, leap) {
        g_day_no -= gregorian_month_length(i, leap);
        i += 1;
    }

    (gy as i32, (i + 1) as u32, (g_day_no + 1) as u32)
}
