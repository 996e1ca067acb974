//! The 33-year Jalali leap rule.

/// Remainders of `year % 33` that mark a leap year.
pub(crate) const LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Returns `true` if `year` is a leap year in the Jalali calendar.
///
/// The rule is the fixed 33-year cycle approximation: a year is leap when
/// `year % 33` is one of `1, 5, 9, 13, 17, 22, 26, 30`. The remainder is the
/// truncating one, so negative years are never leap unless their remainder
/// lands on the table.
pub fn is_leap_jalali_year(year: i32) -> bool {
    LEAP_REMAINDERS.contains(&(year % 33))
}
