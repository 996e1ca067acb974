//! Error types for the jalali-recurrence crate.

use chrono::TimeDelta;

/// Error type for constructing a [`RecurringEvent`](crate::RecurringEvent).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecurrenceError {
    /// Returned when the frequency is zero or negative.
    #[error("frequency must be positive, got {frequency}")]
    NonPositiveFrequency {
        /// The rejected frequency.
        frequency: TimeDelta,
    },

    /// Returned when the frequency is not a whole number of days.
    #[error("frequency must be a whole number of days, got {frequency}")]
    FrequencyNotDayAligned {
        /// The rejected frequency.
        frequency: TimeDelta,
    },

    /// Returned when a day count does not fit in a duration.
    #[error("frequency of {days} days is out of range")]
    FrequencyOutOfRange {
        /// The rejected number of days.
        days: i64,
    },
}
