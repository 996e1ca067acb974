//! Days of the Jalali week.

use std::fmt;

/// A day of the week.
///
/// Variants are ordered from Sunday, matching the Gregorian
/// days-from-Sunday numbering they are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Yekshanbe = 0,
    Doshanbe = 1,
    Seshanbe = 2,
    Chaharshanbe = 3,
    Panjshanbe = 4,
    Joomeh = 5,
    Shanbe = 6,
}

impl Weekday {
    /// All seven weekdays, starting from Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Yekshanbe,
        Weekday::Doshanbe,
        Weekday::Seshanbe,
        Weekday::Chaharshanbe,
        Weekday::Panjshanbe,
        Weekday::Joomeh,
        Weekday::Shanbe,
    ];

    /// Maps a Gregorian days-from-Sunday count (0 = Sunday) to a weekday.
    ///
    /// Values of 7 and above wrap around.
    pub fn from_days_from_sunday(days: u32) -> Self {
        Self::ALL[(days % 7) as usize]
    }

    /// Returns the number of days since Sunday (0..=6).
    pub fn days_from_sunday(self) -> u32 {
        self as u32
    }

    /// Returns the English transliteration.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Yekshanbe => "1Shanbeh",
            Weekday::Doshanbe => "2Shanbeh",
            Weekday::Seshanbe => "3Shanbeh",
            Weekday::Chaharshanbe => "4Shanbeh",
            Weekday::Panjshanbe => "5Shanbeh",
            Weekday::Joomeh => "Joomeh",
            Weekday::Shanbe => "Shanbeh",
        }
    }

    /// Returns the weekday name in Persian script.
    pub fn persian_name(self) -> &'static str {
        match self {
            Weekday::Yekshanbe => "یکشنبه",
            Weekday::Doshanbe => "دوشنبه",
            Weekday::Seshanbe => "سه\u{200c}شنبه",
            Weekday::Chaharshanbe => "چهارشنبه",
            Weekday::Panjshanbe => "پنج\u{200c}شنبه",
            Weekday::Joomeh => "جمعه",
            Weekday::Shanbe => "شنبه",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
