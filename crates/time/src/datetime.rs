//! Jalali date-time anchored in a time zone.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};
use jalali_calendar::{
    Month, Weekday, gregorian_to_jalali, is_leap_jalali_year, jalali_ordinal, jalali_to_gregorian,
    julian_day_number,
};

use crate::clock::{Clock, SystemClock};
use crate::error::TimeError;
use crate::zone::Zone;

/// Smallest supported Jalali year.
pub const MIN_YEAR: i32 = 1;
/// Largest supported Jalali year.
pub const MAX_YEAR: i32 = 9999;

/// A Jalali calendar date and wall-clock time in a [`Zone`].
///
/// Every value holds a valid date: the year is in 1..=9999 and the day
/// exists in its month for that year. Constructors validate, and arithmetic
/// that would leave the supported range returns `None`.
///
/// Equality compares the wall-clock fields and the zone name, so the same
/// absolute moment expressed in two zones is *not* equal. Use
/// [`before`](Self::before) and [`after`](Self::after) to order instants.
#[derive(Debug, Clone)]
pub struct JalaliDateTime {
    year: i32,
    month: Month,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    zone: Zone,
}

impl JalaliDateTime {
    /// Creates a date-time from Jalali calendar fields.
    ///
    /// # Errors
    ///
    /// Returns the [`TimeError`] variant naming the first invalid field,
    /// checked in the order year, month, day, hour, minute, second,
    /// nanosecond.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_time::{JalaliDateTime, Zone};
    ///
    /// let dt = JalaliDateTime::new(1400, 1, 1, 12, 0, 0, 0, Zone::tehran()).unwrap();
    /// assert_eq!(dt.to_string(), "1400/01/01 12:00:00");
    /// assert!(JalaliDateTime::new(1400, 12, 30, 0, 0, 0, 0, Zone::utc()).is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        zone: Zone,
    ) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::YearOutOfRange { year });
        }
        let month = Month::from_number(month).map_err(|_| TimeError::InvalidMonth { month })?;
        let max_day = month.days_in(year);
        if !(1..=max_day).contains(&day) {
            return Err(TimeError::DayOutOfRange {
                day,
                month: month.number(),
                year,
                max_day,
            });
        }
        if hour > 23 {
            return Err(TimeError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange { minute });
        }
        if second > 59 {
            return Err(TimeError::SecondOutOfRange { second });
        }
        if nanosecond > 999_999_999 {
            return Err(TimeError::NanosecondOutOfRange { nanosecond });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            zone,
        })
    }

    /// Creates a date-time at midnight.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_date(year: i32, month: u32, day: u32, zone: Zone) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0, 0, zone)
    }

    /// Relabels a Gregorian wall-clock time as a Jalali one in `zone`.
    ///
    /// The time of day is kept verbatim; no zone conversion happens.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::YearOutOfRange`] if the date falls outside
    /// Jalali years 1..=9999, or [`TimeError::NanosecondOutOfRange`] for a
    /// leap-second representation.
    pub fn from_gregorian(naive: NaiveDateTime, zone: Zone) -> Result<Self, TimeError> {
        let (year, month, day) = gregorian_to_jalali(naive.year(), naive.month(), naive.day());
        Self::new(
            year,
            month.number(),
            day,
            naive.hour(),
            naive.minute(),
            naive.second(),
            naive.nanosecond(),
            zone,
        )
    }

    /// Expresses an absolute instant as the wall-clock time in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::YearOutOfRange`] if the local date falls outside
    /// Jalali years 1..=9999.
    pub fn from_instant(instant: DateTime<Utc>, zone: Zone) -> Result<Self, TimeError> {
        let local = zone.localize(&instant);
        Self::from_gregorian(local, zone)
    }

    /// Returns the current time in `zone`, read from the system clock.
    pub fn now(zone: Zone) -> Self {
        Self::now_with(&SystemClock, zone).expect("the system clock reads a year within 1..=9999")
    }

    /// Returns the time reported by `clock`, expressed in `zone`.
    ///
    /// # Errors
    ///
    /// Same as [`from_instant`](Self::from_instant).
    pub fn now_with(clock: &impl Clock, zone: Zone) -> Result<Self, TimeError> {
        Self::from_instant(clock.now(), zone)
    }

    /// Copies the time of day and zone onto another Jalali date.
    ///
    /// Returns `None` when the year is outside 1..=9999. The caller
    /// guarantees that `day` exists in `month` of `year`.
    pub(crate) fn with_date(&self, year: i64, month: Month, day: u32) -> Option<Self> {
        let year = i32::try_from(year).ok()?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        debug_assert!((1..=month.days_in(year)).contains(&day));
        Some(Self {
            year,
            month,
            day,
            zone: self.zone.clone(),
            ..*self
        })
    }

    /// Returns the Gregorian wall-clock date-time with the same time of day.
    pub fn to_gregorian(&self) -> NaiveDateTime {
        let (year, month, day) = jalali_to_gregorian(self.year, self.month, self.day);
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| {
                date.and_hms_nano_opt(self.hour, self.minute, self.second, self.nanosecond)
            })
            .expect("a valid Jalali date-time maps to a valid Gregorian date-time")
    }

    /// Resolves the wall-clock time in its zone to an absolute instant.
    ///
    /// See [`Zone::resolve`] for how gaps and repeated hours are handled.
    pub fn to_instant(&self) -> DateTime<FixedOffset> {
        self.zone.resolve(&self.to_gregorian())
    }

    /// Expresses the same instant as the wall-clock time in another zone.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::YearOutOfRange`] if the shift crosses the edge of
    /// the supported range.
    pub fn in_zone(&self, zone: Zone) -> Result<Self, TimeError> {
        Self::from_instant(self.to_instant().with_timezone(&Utc), zone)
    }

    /// Expresses the same instant in UTC.
    ///
    /// # Errors
    ///
    /// Same as [`in_zone`](Self::in_zone).
    pub fn to_utc(&self) -> Result<Self, TimeError> {
        self.in_zone(Zone::utc())
    }

    /// Keeps the wall-clock fields and replaces the zone.
    pub fn with_zone(&self, zone: Zone) -> Self {
        Self {
            zone,
            ..self.clone()
        }
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> i64 {
        self.to_instant().timestamp()
    }

    /// Nanoseconds since the Unix epoch.
    ///
    /// `i128` covers the whole supported range, which `i64` nanoseconds
    /// do not.
    pub fn unix_nanoseconds(&self) -> i128 {
        let instant = self.to_instant();
        i128::from(instant.timestamp()) * 1_000_000_000
            + i128::from(instant.timestamp_subsec_nanos())
    }

    /// Reports whether `self` is an earlier instant than `other`.
    pub fn before(&self, other: &Self) -> bool {
        self.unix_nanoseconds() < other.unix_nanoseconds()
    }

    /// Reports whether `self` is a later instant than `other`.
    pub fn after(&self, other: &Self) -> bool {
        self.unix_nanoseconds() > other.unix_nanoseconds()
    }

    /// Reports whether both values have identical wall-clock fields and
    /// the same zone name.
    pub fn equal(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.hour == other.hour
            && self.minute == other.minute
            && self.second == other.second
            && self.nanosecond == other.nanosecond
            && self.zone.name() == other.zone.name()
    }

    /// Jalali year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Jalali month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Hour (0..=23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute (0..=59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Second (0..=59).
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Nanosecond within the second.
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// The zone the wall-clock fields are expressed in.
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Reports whether the year is a Jalali leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_jalali_year(self.year)
    }

    /// Number of days in the month of this date.
    pub fn days_in_month(&self) -> u32 {
        self.month.days_in(self.year)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        let (year, month, day) = jalali_to_gregorian(self.year, self.month, self.day);
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("a valid Jalali date maps to a valid Gregorian date");
        Weekday::from_days_from_sunday(date.weekday().num_days_from_sunday())
    }

    /// Day of the year, 1 for 1 Farvardin.
    pub fn year_day(&self) -> u32 {
        jalali_ordinal(self.month, self.day)
    }

    /// Fractional Julian day of the Gregorian wall-clock fields.
    ///
    /// The zone is ignored: this is the Julian day of the local time.
    pub fn julian_date(&self) -> f64 {
        let naive = self.to_gregorian();
        julian_day_number(
            naive.year(),
            naive.month(),
            naive.day(),
            naive.hour(),
            naive.minute(),
            naive.second(),
            naive.nanosecond(),
        )
        .expect("Gregorian fields of a valid Jalali date-time are within Julian day bounds")
    }

    /// Zone abbreviation and offset from UTC in seconds at this instant.
    pub fn zone_abbreviation_and_offset(&self) -> (String, i32) {
        let instant = self.to_instant().with_timezone(&Utc);
        (
            self.zone.abbreviation_at(&instant),
            self.zone.offset_at(&instant),
        )
    }
}

impl PartialEq for JalaliDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for JalaliDateTime {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn irdt() -> Zone {
        Zone::fixed("IRDT", 12_600).unwrap()
    }

    #[test]
    fn new_valid() {
        let dt = JalaliDateTime::new(1401, 12, 28, 12, 34, 56, 7, irdt()).unwrap();
        assert_eq!(dt.year(), 1401);
        assert_eq!(dt.month(), Month::Esfand);
        assert_eq!(dt.day(), 28);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 34);
        assert_eq!(dt.second(), 56);
        assert_eq!(dt.nanosecond(), 7);
        assert_eq!(dt.zone().name(), "IRDT");
    }

    #[test]
    fn new_reports_each_field() {
        let z = Zone::utc;
        assert_eq!(
            JalaliDateTime::new(0, 1, 1, 0, 0, 0, 0, z()).unwrap_err(),
            TimeError::YearOutOfRange { year: 0 }
        );
        assert_eq!(
            JalaliDateTime::new(10_000, 1, 1, 0, 0, 0, 0, z()).unwrap_err(),
            TimeError::YearOutOfRange { year: 10_000 }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 13, 1, 0, 0, 0, 0, z()).unwrap_err(),
            TimeError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 12, 30, 0, 0, 0, 0, z()).unwrap_err(),
            TimeError::DayOutOfRange {
                day: 30,
                month: 12,
                year: 1400,
                max_day: 29
            }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 1, 0, 0, 0, 0, 0, z()).unwrap_err(),
            TimeError::DayOutOfRange {
                day: 0,
                month: 1,
                year: 1400,
                max_day: 31
            }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 1, 1, 24, 0, 0, 0, z()).unwrap_err(),
            TimeError::HourOutOfRange { hour: 24 }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 1, 1, 0, 60, 0, 0, z()).unwrap_err(),
            TimeError::MinuteOutOfRange { minute: 60 }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 1, 1, 0, 0, 60, 0, z()).unwrap_err(),
            TimeError::SecondOutOfRange { second: 60 }
        );
        assert_eq!(
            JalaliDateTime::new(1400, 1, 1, 0, 0, 0, 1_000_000_000, z()).unwrap_err(),
            TimeError::NanosecondOutOfRange {
                nanosecond: 1_000_000_000
            }
        );
    }

    #[test]
    fn leap_esfand_30() {
        assert!(JalaliDateTime::from_date(1399, 12, 30, Zone::utc()).is_ok());
    }

    #[test]
    fn from_gregorian_keeps_wall_clock() {
        let naive = NaiveDate::from_ymd_opt(2021, 3, 20)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let dt = JalaliDateTime::from_gregorian(naive, Zone::utc()).unwrap();
        assert_eq!(dt, JalaliDateTime::new(1399, 12, 30, 13, 30, 0, 0, Zone::utc()).unwrap());
        assert_eq!(dt.to_gregorian(), naive);
    }

    #[test]
    fn to_gregorian_new_year_2023() {
        let dt = JalaliDateTime::from_date(1401, 10, 11, Zone::utc()).unwrap();
        assert_eq!(
            dt.to_gregorian(),
            NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn from_instant_in_tehran() {
        let instant = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let dt = JalaliDateTime::from_instant(instant, Zone::tehran()).unwrap();
        assert_eq!(dt.to_string(), "1399/10/12 03:30:00");
    }

    #[test]
    fn in_zone_and_to_utc() {
        let tehran = JalaliDateTime::new(1399, 4, 12, 15, 30, 0, 0, Zone::tehran()).unwrap();
        let utc = tehran.to_utc().unwrap();
        assert_eq!(utc.to_string(), "1399/04/12 11:00:00");
        assert_eq!(utc.zone().name(), "UTC");
        let back = utc.in_zone(Zone::tehran()).unwrap();
        assert_eq!(back, tehran);
    }

    #[test]
    fn with_zone_relabels_only() {
        let dt = JalaliDateTime::new(1400, 6, 20, 10, 30, 15, 0, Zone::utc()).unwrap();
        let relabeled = dt.with_zone(Zone::tehran());
        assert_eq!(relabeled.hour(), 10);
        assert_eq!(relabeled.zone().name(), "Asia/Tehran");
        assert_ne!(relabeled, dt);
    }

    #[test]
    fn now_with_fixed_clock() {
        use crate::clock::FixedClock;
        let clock = FixedClock(Utc.with_ymd_and_hms(2021, 3, 21, 0, 0, 0).unwrap());
        let dt = JalaliDateTime::now_with(&clock, Zone::utc()).unwrap();
        assert_eq!(dt, JalaliDateTime::from_date(1400, 1, 1, Zone::utc()).unwrap());
    }

    #[test]
    fn now_is_in_range() {
        let dt = JalaliDateTime::now(Zone::tehran());
        assert!(dt.year() > 1400);
    }

    #[test]
    fn unix_seconds_tehran_summer() {
        let dt = JalaliDateTime::new(1399, 4, 12, 15, 30, 0, 0, Zone::tehran()).unwrap();
        assert_eq!(dt.unix_seconds(), 1_593_687_600);
    }

    #[test]
    fn unix_nanoseconds_tehran() {
        let dt = JalaliDateTime::new(1400, 6, 12, 8, 30, 0, 0, Zone::tehran()).unwrap();
        assert_eq!(dt.unix_nanoseconds(), 1_630_641_600_000_000_000);
    }

    #[test]
    fn unix_nanoseconds_past_i64_range() {
        let dt = JalaliDateTime::from_date(9999, 1, 1, Zone::utc()).unwrap();
        assert!(dt.unix_nanoseconds() > i128::from(i64::MAX));
    }

    #[test]
    fn ordering() {
        let z = Zone::utc;
        let later = JalaliDateTime::new(1399, 5, 27, 10, 40, 0, 0, z()).unwrap();
        let earlier = JalaliDateTime::new(1399, 5, 27, 10, 39, 0, 0, z()).unwrap();
        assert!(later.after(&earlier));
        assert!(earlier.before(&later));
        assert!(!later.before(&earlier));
        assert!(later.equal(&later.clone()));
    }

    #[test]
    fn same_instant_in_two_zones() {
        let utc = JalaliDateTime::new(1400, 1, 1, 0, 0, 0, 0, Zone::utc()).unwrap();
        let tehran = utc.in_zone(Zone::tehran()).unwrap();
        assert_eq!(utc.unix_nanoseconds(), tehran.unix_nanoseconds());
        assert!(!utc.equal(&tehran));
        assert!(!utc.before(&tehran));
        assert!(!utc.after(&tehran));
    }

    #[test]
    fn leap_year_and_month_length() {
        let z = Zone::utc;
        assert!(JalaliDateTime::from_date(1399, 1, 1, z()).unwrap().is_leap_year());
        assert!(!JalaliDateTime::from_date(1400, 1, 1, z()).unwrap().is_leap_year());
        assert_eq!(JalaliDateTime::from_date(1399, 12, 1, z()).unwrap().days_in_month(), 30);
        assert_eq!(JalaliDateTime::from_date(1400, 12, 1, z()).unwrap().days_in_month(), 29);
        assert_eq!(JalaliDateTime::from_date(1400, 7, 1, z()).unwrap().days_in_month(), 30);
        assert_eq!(JalaliDateTime::from_date(1400, 1, 1, z()).unwrap().days_in_month(), 31);
    }

    #[test]
    fn weekday() {
        let z = Zone::utc;
        // 2001-10-17 was a Wednesday.
        assert_eq!(
            JalaliDateTime::from_date(1380, 7, 25, z()).unwrap().weekday(),
            Weekday::Chaharshanbe
        );
        // 2021-03-21 was a Sunday.
        assert_eq!(
            JalaliDateTime::from_date(1400, 1, 1, z()).unwrap().weekday(),
            Weekday::Yekshanbe
        );
    }

    #[test]
    fn year_day() {
        let cases = [
            ((1401, 12, 28), 364),
            ((1397, 11, 5), 311),
            ((1399, 2, 15), 46),
            ((1400, 4, 1), 94),
        ];
        for ((y, m, d), expected) in cases {
            let dt = JalaliDateTime::from_date(y, m, d, irdt()).unwrap();
            assert_eq!(dt.year_day(), expected, "{y}/{m}/{d}");
        }
    }

    #[test]
    fn julian_date_new_year_1399() {
        let dt = JalaliDateTime::from_date(1399, 1, 1, Zone::tehran()).unwrap();
        assert_eq!(dt.julian_date(), 2_458_928.5);
    }

    #[test]
    fn zone_abbreviation_and_offset_fixed() {
        let zone = Zone::fixed("Tehran Time", 12_600).unwrap();
        let dt = JalaliDateTime::new(1399, 10, 22, 11, 0, 0, 0, zone).unwrap();
        assert_eq!(
            dt.zone_abbreviation_and_offset(),
            ("Tehran Time".to_string(), 12_600)
        );
    }

    #[test]
    fn zone_offset_named_follows_season() {
        let summer = JalaliDateTime::from_date(1400, 4, 1, Zone::tehran()).unwrap();
        let winter = JalaliDateTime::from_date(1400, 10, 1, Zone::tehran()).unwrap();
        assert_eq!(summer.zone_abbreviation_and_offset().1, 16_200);
        assert_eq!(winter.zone_abbreviation_and_offset().1, 12_600);
    }
}
