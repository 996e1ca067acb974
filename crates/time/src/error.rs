//! Error types for the jalali-time crate.

/// Error type for constructing and converting [`JalaliDateTime`] values.
///
/// The range variants are validation errors: each one names the offending
/// field, its value, and the accepted bound.
///
/// [`JalaliDateTime`]: crate::JalaliDateTime
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a year is outside the supported range 1..=9999.
    #[error("year out of range: {year} (must be 1..=9999)")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Returned when a day exceeds the length of its month.
    #[error("day out of range: {day} for {year}/{month:02} (must be 1..={max_day})")]
    DayOutOfRange {
        /// The rejected day.
        day: u32,
        /// Month the day was checked against.
        month: u32,
        /// Year the day was checked against.
        year: i32,
        /// Number of days in that month.
        max_day: u32,
    },

    /// Returned when an hour is outside 0..=23.
    #[error("hour out of range: {hour} (must be 0..=23)")]
    HourOutOfRange {
        /// The rejected hour.
        hour: u32,
    },

    /// Returned when a minute is outside 0..=59.
    #[error("minute out of range: {minute} (must be 0..=59)")]
    MinuteOutOfRange {
        /// The rejected minute.
        minute: u32,
    },

    /// Returned when a second is outside 0..=59.
    #[error("second out of range: {second} (must be 0..=59)")]
    SecondOutOfRange {
        /// The rejected second.
        second: u32,
    },

    /// Returned when a nanosecond is outside 0..=999_999_999.
    #[error("nanosecond out of range: {nanosecond} (must be 0..=999999999)")]
    NanosecondOutOfRange {
        /// The rejected nanosecond.
        nanosecond: u32,
    },

    /// Returned when a zone name is not in the time-zone database.
    #[error("unknown time zone: {name:?}")]
    UnknownZone {
        /// The name that failed to resolve.
        name: String,
    },

    /// Returned when a fixed UTC offset is malformed or out of range.
    #[error("invalid UTC offset: {offset:?}")]
    InvalidOffset {
        /// The offending offset text or seconds.
        offset: String,
    },
}

/// Error type for [`Layout::parse`](crate::Layout::parse).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The value does not match the layout, or the layout yields fewer than
    /// six numeric captures.
    #[error("unable to parse {value:?} using the layout {layout:?}")]
    LayoutMismatch {
        /// The layout the value was matched against.
        layout: String,
        /// The value that failed to match.
        value: String,
    },

    /// A captured digit run does not fit in an integer.
    #[error("number out of range: {value}")]
    InvalidNumber {
        /// The captured digits.
        value: String,
    },

    /// The captured year, month and day do not form a valid Jalali date.
    #[error("invalid Jalali date: {year}/{month:02}/{day:02}")]
    InvalidDate {
        /// Captured year.
        year: i32,
        /// Captured month.
        month: u32,
        /// Captured day.
        day: u32,
    },

    /// The captured time of day was rejected by validation.
    #[error("invalid time: {0}")]
    Invalid(#[from] TimeError),
}
