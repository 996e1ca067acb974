//! Time zones: named IANA zones and fixed offsets.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// The zone a [`JalaliDateTime`](crate::JalaliDateTime) is expressed in.
///
/// A zone is either an IANA zone from the compiled-in database, whose
/// offset varies over time, or a fixed UTC offset carrying its own display
/// name. Two zones are the same zone when their [`name`](Zone::name)s match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Zone {
    /// An IANA zone such as `Asia/Tehran` or `UTC`.
    Named(Tz),
    /// A constant offset with a display name, e.g. `IRDT` at +03:30.
    Fixed {
        /// Display name reported by `%Z` and used for zone identity.
        name: Arc<str>,
        /// Offset east of UTC.
        offset: FixedOffset,
    },
}

impl Zone {
    /// The UTC zone.
    pub fn utc() -> Self {
        Self::Named(Tz::UTC)
    }

    /// The `Asia/Tehran` zone.
    pub fn tehran() -> Self {
        Self::Named(Tz::Asia__Tehran)
    }

    /// Looks up an IANA zone by name.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::UnknownZone`] if the name is not in the database.
    pub fn named(name: &str) -> Result<Self, TimeError> {
        name.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| TimeError::UnknownZone {
                name: name.to_string(),
            })
    }

    /// Creates a fixed-offset zone `offset_seconds` east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidOffset`] if the offset is a day or more.
    pub fn fixed(name: impl Into<Arc<str>>, offset_seconds: i32) -> Result<Self, TimeError> {
        let offset =
            FixedOffset::east_opt(offset_seconds).ok_or_else(|| TimeError::InvalidOffset {
                offset: offset_seconds.to_string(),
            })?;
        Ok(Self::Fixed {
            name: name.into(),
            offset,
        })
    }

    /// Returns the zone's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Named(tz) => tz.name(),
            Self::Fixed { name, .. } => name,
        }
    }

    /// Resolves a wall-clock time in this zone to an absolute instant.
    ///
    /// Ambiguous wall-clock times (a repeated hour when clocks go back)
    /// resolve to the earlier instant. Wall-clock times that do not exist
    /// (skipped when clocks go forward) are resolved with the offset that
    /// was in effect before the transition, so they land just after it.
    pub fn resolve(&self, local: &NaiveDateTime) -> DateTime<FixedOffset> {
        match self {
            Self::Fixed { offset, .. } => {
                let utc = *local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
                DateTime::from_naive_utc_and_offset(utc, *offset)
            }
            Self::Named(tz) => match tz.from_local_datetime(local).earliest() {
                Some(dt) => dt.fixed_offset(),
                None => {
                    let before = tz
                        .offset_from_utc_datetime(&(*local - TimeDelta::days(1)))
                        .fix();
                    let utc = *local - TimeDelta::seconds(i64::from(before.local_minus_utc()));
                    DateTime::from_naive_utc_and_offset(utc, before)
                }
            },
        }
    }

    /// Returns the wall-clock time in this zone at an absolute instant.
    pub fn localize(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Named(tz) => instant.with_timezone(tz).naive_local(),
            Self::Fixed { offset, .. } => instant.with_timezone(offset).naive_local(),
        }
    }

    /// Returns the offset from UTC in seconds at an absolute instant.
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> i32 {
        match self {
            Self::Named(tz) => tz
                .offset_from_utc_datetime(&instant.naive_utc())
                .fix()
                .local_minus_utc(),
            Self::Fixed { offset, .. } => offset.local_minus_utc(),
        }
    }

    /// Returns the zone abbreviation in effect at an absolute instant.
    ///
    /// Fixed zones report their display name.
    pub fn abbreviation_at(&self, instant: &DateTime<Utc>) -> String {
        match self {
            Self::Named(tz) => instant.with_timezone(tz).format("%Z").to_string(),
            Self::Fixed { name, .. } => name.to_string(),
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `±HH:MM` / `±HHMM` into seconds east of UTC.
fn parse_offset(s: &str) -> Option<i32> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only one separator, and only between hours and minutes.
    if rest.len() == 5 && rest.as_bytes()[2] != b':' {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for Zone {
    type Err = TimeError;

    /// Accepts an IANA zone name or a fixed offset written `±HH:MM` or
    /// `±HHMM`. A fixed offset keeps its text as the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('+') || s.starts_with('-') {
            let seconds = parse_offset(s).ok_or_else(|| TimeError::InvalidOffset {
                offset: s.to_string(),
            })?;
            return Self::fixed(s, seconds);
        }
        Self::named(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn names() {
        assert_eq!(Zone::utc().name(), "UTC");
        assert_eq!(Zone::tehran().name(), "Asia/Tehran");
        assert_eq!(Zone::fixed("IRDT", 12_600).unwrap().name(), "IRDT");
    }

    #[test]
    fn named_unknown() {
        assert!(matches!(
            Zone::named("Mars/Olympus"),
            Err(TimeError::UnknownZone { .. })
        ));
    }

    #[test]
    fn fixed_rejects_full_day() {
        assert!(matches!(
            Zone::fixed("bad", 86_400),
            Err(TimeError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn parse_zone_strings() {
        assert_eq!("Asia/Tehran".parse::<Zone>().unwrap(), Zone::tehran());
        let fixed: Zone = "+03:30".parse().unwrap();
        assert_eq!(fixed.name(), "+03:30");
        assert_eq!(fixed.offset_at(&Utc::now()), 12_600);
        let west: Zone = "-0500".parse().unwrap();
        assert_eq!(west.offset_at(&Utc::now()), -18_000);
        assert!("+3:30".parse::<Zone>().is_err());
        assert!("+24:00".parse::<Zone>().is_err());
        assert!("+0:330".parse::<Zone>().is_err());
    }

    #[test]
    fn resolve_fixed() {
        let zone = Zone::fixed("IRST", 12_600).unwrap();
        let dt = zone.resolve(&naive(2021, 1, 1, 3, 30));
        assert_eq!(dt.timestamp(), 1_609_459_200);
    }

    #[test]
    fn resolve_tehran_summer_and_winter() {
        let tehran = Zone::tehran();
        // 2021-07-03 is IRDT (+04:30).
        let summer = tehran.resolve(&naive(2021, 7, 3, 12, 0));
        assert_eq!(summer.offset().local_minus_utc(), 16_200);
        // 2021-01-03 is IRST (+03:30).
        let winter = tehran.resolve(&naive(2021, 1, 3, 12, 0));
        assert_eq!(winter.offset().local_minus_utc(), 12_600);
    }

    #[test]
    fn resolve_ambiguous_takes_earlier() {
        // Clocks went back from 24:00 to 23:00 on 2021-09-21 in Tehran.
        let dt = Zone::tehran().resolve(&naive(2021, 9, 21, 23, 30));
        assert_eq!(dt.offset().local_minus_utc(), 16_200);
    }

    #[test]
    fn resolve_gap_uses_offset_before() {
        // Clocks went forward from 00:00 to 01:00 on 2021-03-22 in Tehran.
        let dt = Zone::tehran().resolve(&naive(2021, 3, 22, 0, 30));
        assert_eq!(dt.offset().local_minus_utc(), 12_600);
        assert_eq!(dt.naive_utc(), naive(2021, 3, 21, 21, 0));
    }

    #[test]
    fn localize_round_trip() {
        let tehran = Zone::tehran();
        let local = naive(2022, 6, 1, 8, 15);
        let instant = tehran.resolve(&local).with_timezone(&Utc);
        assert_eq!(tehran.localize(&instant), local);
    }

    #[test]
    fn abbreviation_of_fixed_zone_is_its_name() {
        let zone = Zone::fixed("Tehran Time", 12_600).unwrap();
        assert_eq!(zone.abbreviation_at(&Utc::now()), "Tehran Time");
    }
}
