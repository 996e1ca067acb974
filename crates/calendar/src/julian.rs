//! Julian day numbers for proleptic Gregorian date-times.

use crate::error::CalendarError;

const SECONDS_PER_DAY: f64 = 86_400.0;
const NANOSECONDS_PER_DAY: f64 = 86_400.0 * 1e9;

/// Computes the fractional Julian day for a proleptic Gregorian date-time.
///
/// The integral part follows the standard (Meeus) formula, valid from year
/// -4712; the time of day is added as a fraction, so midnight lands on `.5`.
///
/// Each field is checked against a coarse bound only: the day must be in
/// 1..=31 but is not checked against the length of its month.
///
/// # Errors
///
/// Returns the [`CalendarError`] variant naming the first out-of-range
/// field, checked in the order year, month, day, hour, minute, second,
/// nanosecond.
///
/// # Example
///
/// ```
/// use jalali_calendar::julian_day_number;
///
/// let jd = julian_day_number(2022, 1, 1, 0, 0, 0, 0).unwrap();
/// assert_eq!(jd, 2459580.5);
/// ```
pub fn julian_day_number(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> Result<f64, CalendarError> {
    if year < -4712 {
        return Err(CalendarError::YearTooEarly { year });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if !(1..=31).contains(&day) {
        return Err(CalendarError::InvalidDay { day });
    }
    if hour > 23 {
        return Err(CalendarError::InvalidHour { hour });
    }
    if minute > 59 {
        return Err(CalendarError::InvalidMinute { minute });
    }
    if second > 59 {
        return Err(CalendarError::InvalidSecond { second });
    }
    if nanosecond > 999_999_999 {
        return Err(CalendarError::InvalidNanosecond { nanosecond });
    }

    // January and February count as months 13 and 14 of the previous year.
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let jdn = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) + b
        - 1524.5;

    let fraction = f64::from(hour) / 24.0
        + f64::from(minute) / (24.0 * 60.0)
        + f64::from(second) / SECONDS_PER_DAY
        + f64::from(nanosecond) / NANOSECONDS_PER_DAY;

    Ok(jdn + fraction)
}
