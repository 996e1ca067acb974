//! Day-of-year tables and date validity for the Jalali calendar.

use crate::month::{Month, days_in_month};

/// Day-of-year on which each month starts (index 0 unused, index 1 =
/// Farvardin starts on day 1, ...).
///
/// The table does not depend on the year because the only variable-length
/// month, Esfand, is the last one.
pub(crate) const MONTH_START_ORDINAL: [u32; 13] =
    [0, 1, 32, 63, 94, 125, 156, 187, 217, 247, 277, 307, 337];

/// Returns the 1-based day of the year for a Jalali month and day.
///
/// The day is not validated against the month length.
pub fn jalali_ordinal(month: Month, day: u32) -> u32 {
    MONTH_START_ORDINAL[month.number() as usize] - 1 + day
}

/// Reports whether `(year, month, day)` is a valid Jalali date.
///
/// The year must be at least 1, the month in 1..=12 and the day within the
/// month's length for that year.
pub fn is_valid_jalali_date(year: i32, month: u32, day: u32) -> bool {
    if year < 1 || !(1..=12).contains(&month) || day < 1 {
        return false;
    }
    day <= days_in_month(year, month)
}
