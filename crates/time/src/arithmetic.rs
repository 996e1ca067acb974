//! Instant-based and calendar-field arithmetic on [`JalaliDateTime`].
//!
//! Instant-based operations (`add`, `add_days`, `sub`) work on the absolute
//! instant and re-express the result in the original zone, so a day is
//! always 24 hours. Field-based operations (`add_years`, `add_months`,
//! `add_jalali_duration`) change the calendar fields and keep the wall-clock
//! time of day. Every operation that can leave Jalali years 1..=9999
//! returns `None` in that case.

use chrono::{TimeDelta, Utc};
use jalali_calendar::{Month, days_in_month};

use crate::datetime::JalaliDateTime;
use crate::duration::JalaliDuration;

const SECONDS_PER_DAY: i64 = 86_400;

/// Month length for a year that may be out of range mid-normalization.
fn month_length(year: i64, month: i64) -> i64 {
    let year = i32::try_from(year).unwrap_or(i32::MAX);
    i64::from(days_in_month(year, month as u32))
}

fn month_at(number: i64) -> Month {
    Month::ALL[(number - 1) as usize]
}

impl JalaliDateTime {
    /// Adds an exact duration to the absolute instant.
    ///
    /// The result is expressed in the same zone, so across an offset change
    /// the wall-clock time shifts by the change.
    pub fn add(&self, delta: TimeDelta) -> Option<Self> {
        let instant = self
            .to_instant()
            .with_timezone(&Utc)
            .checked_add_signed(delta)?;
        Self::from_instant(instant, self.zone().clone()).ok()
    }

    /// Adds `n` periods of exactly 24 hours.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_time::{JalaliDateTime, Zone};
    ///
    /// let dt = JalaliDateTime::new(1400, 9, 20, 17, 30, 0, 0, Zone::utc()).unwrap();
    /// assert_eq!(dt.add_days(7).unwrap().to_string(), "1400/09/27 17:30:00");
    /// ```
    pub fn add_days(&self, n: i64) -> Option<Self> {
        self.add(TimeDelta::try_seconds(n.checked_mul(SECONDS_PER_DAY)?)?)
    }

    /// Exact duration from `other` to `self`, negative if `self` is earlier.
    pub fn sub(&self, other: &Self) -> TimeDelta {
        self.to_instant() - other.to_instant()
    }

    /// Adds `n` Jalali years, keeping month, day and time of day.
    ///
    /// Returns `None` if the new year is outside 1..=9999. When the value is
    /// 30 Esfand of a leap year the day becomes 29, even if the target year
    /// is also a leap year.
    pub fn add_years(&self, n: i32) -> Option<Self> {
        let year = i64::from(self.year()) + i64::from(n);
        let day = if self.is_leap_year() && self.month() == Month::Esfand && self.day() == 30 {
            29
        } else {
            self.day()
        };
        self.with_date(year, self.month(), day)
    }

    /// Adds `n` Jalali months, clamping the day to the new month's length.
    ///
    /// ```
    /// use jalali_time::{JalaliDateTime, Zone};
    ///
    /// let dt = JalaliDateTime::from_date(1400, 6, 31, Zone::utc()).unwrap();
    /// assert_eq!(dt.add_months(1).unwrap().format_short(), "1400/07/30");
    /// ```
    pub fn add_months(&self, n: i32) -> Option<Self> {
        let mut year = i64::from(self.year()) + i64::from(n / 12);
        let mut month = i64::from(self.month().number()) + i64::from(n % 12);
        if month > 12 {
            year += 1;
            month -= 12;
        } else if month < 1 {
            year -= 1;
            month += 12;
        }
        let day = i64::from(self.day()).min(month_length(year, month));
        self.with_date(year, month_at(month), day as u32)
    }

    /// Adds years, then months, then `days` periods of 24 hours.
    pub fn add_date(&self, years: i32, months: i32, days: i64) -> Option<Self> {
        self.add_years(years)?.add_months(months)?.add_days(days)
    }

    /// Adds a calendar-relative duration.
    ///
    /// Years and months are added to the fields first, with the month
    /// carried into 1..=12. The day is then added and normalized by walking
    /// one month at a time, so a day past the end of a month overflows into
    /// the next one instead of being clamped.
    ///
    /// ```
    /// use jalali_time::{JalaliDateTime, JalaliDuration, Zone};
    ///
    /// let dt = JalaliDateTime::from_date(1399, 2, 28, Zone::utc()).unwrap();
    /// let later = dt.add_jalali_duration(JalaliDuration::new(1, 2, 3)).unwrap();
    /// assert_eq!(later.format_short(), "1400/04/31");
    /// ```
    pub fn add_jalali_duration(&self, duration: JalaliDuration) -> Option<Self> {
        let mut year = i64::from(self.year()) + i64::from(duration.years);
        let mut month = i64::from(self.month().number()) + i64::from(duration.months);
        let mut day = i64::from(self.day()) + i64::from(duration.days);

        year += (month - 1).div_euclid(12);
        month = (month - 1).rem_euclid(12) + 1;

        let mut max_day = month_length(year, month);
        while day > max_day {
            day -= max_day;
            month += 1;
            if month > 12 {
                year += 1;
                month = 1;
            }
            max_day = month_length(year, month);
        }
        while day < 1 {
            month -= 1;
            if month < 1 {
                year -= 1;
                month = 12;
            }
            day += month_length(year, month);
        }

        self.with_date(year, month_at(month), day as u32)
    }

    /// Subtracts a calendar-relative duration; the same as adding its
    /// negation.
    pub fn sub_jalali_duration(&self, duration: JalaliDuration) -> Option<Self> {
        self.add_jalali_duration(-duration)
    }

    /// Whole days between two instants, regardless of their order.
    pub fn days_between(&self, other: &Self) -> i64 {
        let (earlier, later) = if other.before(self) {
            (other, self)
        } else {
            (self, other)
        };
        (later.unix_seconds() - earlier.unix_seconds()) / SECONDS_PER_DAY
    }

    /// Whole days from `self` to `target`, by Julian date of the wall-clock
    /// fields. Negative when `target` is earlier; fractions truncate toward
    /// zero.
    pub fn days_until(&self, target: &Self) -> i64 {
        (target.julian_date() - self.julian_date()) as i64
    }
}
