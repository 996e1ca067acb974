//! Error types for the jalali-calendar crate.

/// Error type for all fallible operations in the jalali-calendar crate.
///
/// Each variant names exactly one out-of-range field so callers can tell
/// which input was rejected. The messages match the bounds enforced by
/// [`julian_day_number`](crate::julian_day_number).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year precedes the start of the Julian period.
    #[error("year {year} is too early (minimum is -4712)")]
    YearTooEarly {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month {month} (must be between 1 and 12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Returned when a day number is outside 1..=31.
    #[error("invalid day {day} (must be between 1 and 31)")]
    InvalidDay {
        /// The rejected day number.
        day: u32,
    },

    /// Returned when an hour is outside 0..=23.
    #[error("invalid hour {hour} (must be between 0 and 23)")]
    InvalidHour {
        /// The rejected hour.
        hour: u32,
    },

    /// Returned when a minute is outside 0..=59.
    #[error("invalid minute {minute} (must be between 0 and 59)")]
    InvalidMinute {
        /// The rejected minute.
        minute: u32,
    },

    /// Returned when a second is outside 0..=59.
    #[error("invalid second {second} (must be between 0 and 59)")]
    InvalidSecond {
        /// The rejected second.
        second: u32,
    },

    /// Returned when a nanosecond is outside 0..=999_999_999.
    #[error("invalid nanosecond {nanosecond} (must be between 0 and 999999999)")]
    InvalidNanosecond {
        /// The rejected nanosecond.
        nanosecond: u32,
    },

    /// Returned when a month name does not match any Jalali month.
    #[error("unknown Jalali month name: {name:?}")]
    UnknownMonthName {
        /// The name that failed to match.
        name: String,
    },
}
