//! Recurring events and their occurrences.

use chrono::TimeDelta;
use jalali_time::JalaliDateTime;
use tracing::debug;

use crate::error::RecurrenceError;

const SECONDS_PER_DAY: i64 = 86_400;

/// An event repeating at a fixed whole-day interval from `start`, until an
/// optional `end`.
///
/// Occurrences are `start`, `start + frequency`, `start + 2 * frequency`,
/// and so on, each step being an exact duration on the absolute instant.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringEvent {
    start: JalaliDateTime,
    end: Option<JalaliDateTime>,
    frequency: TimeDelta,
}

impl RecurringEvent {
    /// Creates an event.
    ///
    /// # Errors
    ///
    /// - [`RecurrenceError::NonPositiveFrequency`] if `frequency` is zero or
    ///   negative.
    /// - [`RecurrenceError::FrequencyNotDayAligned`] if `frequency` is not a
    ///   whole number of days.
    pub fn new(
        start: JalaliDateTime,
        end: Option<JalaliDateTime>,
        frequency: TimeDelta,
    ) -> Result<Self, RecurrenceError> {
        if frequency <= TimeDelta::zero() {
            return Err(RecurrenceError::NonPositiveFrequency { frequency });
        }
        if frequency.subsec_nanos() != 0 || frequency.num_seconds() % SECONDS_PER_DAY != 0 {
            return Err(RecurrenceError::FrequencyNotDayAligned { frequency });
        }
        Ok(Self {
            start,
            end,
            frequency,
        })
    }

    /// Creates an event repeating every `days` days.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`RecurrenceError::FrequencyOutOfRange`]
    /// if `days` does not fit in a duration.
    pub fn every_days(
        start: JalaliDateTime,
        end: Option<JalaliDateTime>,
        days: i64,
    ) -> Result<Self, RecurrenceError> {
        let frequency = days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(TimeDelta::try_seconds)
            .ok_or(RecurrenceError::FrequencyOutOfRange { days })?;
        Self::new(start, end, frequency)
    }

    pub fn start(&self) -> &JalaliDateTime {
        &self.start
    }

    pub fn end(&self) -> Option<&JalaliDateTime> {
        self.end.as_ref()
    }

    pub fn frequency(&self) -> TimeDelta {
        self.frequency
    }

    /// Occurrences from `range_start` through `range_end`, both inclusive.
    ///
    /// The result is the intersection of the event's grid (`start`, then
    /// every `frequency`, up to `end`) with the query range: a range that
    /// begins before `start` still yields `start` first, and grid points
    /// before `range_start` are never returned. Each occurrence carries the
    /// zone of the event's start.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_recurrence::RecurringEvent;
    /// use jalali_time::{JalaliDateTime, Zone};
    ///
    /// let start = JalaliDateTime::from_date(1402, 1, 1, Zone::utc()).unwrap();
    /// let event = RecurringEvent::every_days(start, None, 7).unwrap();
    /// let from = JalaliDateTime::from_date(1402, 1, 10, Zone::utc()).unwrap();
    /// let to = JalaliDateTime::from_date(1402, 1, 31, Zone::utc()).unwrap();
    /// let dates: Vec<String> = event
    ///     .occurrences(&from, &to)
    ///     .iter()
    ///     .map(|dt| dt.format_short())
    ///     .collect();
    /// assert_eq!(dates, ["1402/01/15", "1402/01/22", "1402/01/29"]);
    /// ```
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = %self.start, range_start = %range_start, range_end = %range_end)
    )]
    pub fn occurrences(
        &self,
        range_start: &JalaliDateTime,
        range_end: &JalaliDateTime,
    ) -> Vec<JalaliDateTime> {
        let found: Vec<_> = self.occurrences_iter(range_start, range_end).collect();
        debug!(count = found.len(), "enumerated occurrences");
        found
    }

    /// Lazy form of [`occurrences`](Self::occurrences).
    pub fn occurrences_iter<'a>(
        &'a self,
        range_start: &JalaliDateTime,
        range_end: &JalaliDateTime,
    ) -> Occurrences<'a> {
        let cursor = if self.start.after(range_end) {
            None
        } else {
            self.first_candidate(range_start)
        };
        Occurrences {
            event: self,
            cursor,
            range_start: range_start.clone(),
            range_end: range_end.clone(),
        }
    }

    /// The last occurrence on or before `range_start` by whole calendar
    /// days, or `start` itself when the range begins before the event.
    fn first_candidate(&self, range_start: &JalaliDateTime) -> Option<JalaliDateTime> {
        let offset = self.start.days_until(range_start);
        if offset <= 0 {
            return Some(self.start.clone());
        }
        let step = self.frequency.num_days();
        let skipped = offset / step * step;
        debug!(offset, skipped, "fast-forwarding to range start");
        self.start.add_days(skipped)
    }
}

/// Iterator over the occurrences of a [`RecurringEvent`] in a range.
///
/// Created by [`RecurringEvent::occurrences_iter`].
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    event: &'a RecurringEvent,
    cursor: Option<JalaliDateTime>,
    range_start: JalaliDateTime,
    range_end: JalaliDateTime,
}

impl Iterator for Occurrences<'_> {
    type Item = JalaliDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.cursor.take()?;
            if current.after(&self.range_end) {
                return None;
            }
            if self.event.end.as_ref().is_some_and(|end| current.after(end)) {
                return None;
            }
            // Stepping past the last representable date ends the sequence.
            self.cursor = current.add(self.event.frequency);
            if !current.before(&self.range_start) && !current.before(&self.event.start) {
                return Some(current);
            }
        }
    }
}
