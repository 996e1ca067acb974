//! Jalali months, their names and lengths.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::leap::is_leap_jalali_year;

/// A month of the Jalali calendar.
///
/// The discriminant is the 1-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Farvardin = 1,
    Ordibehesht = 2,
    Khordad = 3,
    Tir = 4,
    Mordad = 5,
    Shahrivar = 6,
    Mehr = 7,
    Aban = 8,
    Azar = 9,
    Dey = 10,
    Bahman = 11,
    Esfand = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Farvardin,
        Month::Ordibehesht,
        Month::Khordad,
        Month::Tir,
        Month::Mordad,
        Month::Shahrivar,
        Month::Mehr,
        Month::Aban,
        Month::Azar,
        Month::Dey,
        Month::Bahman,
        Month::Esfand,
    ];

    /// Looks up a month by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=12.
    pub fn from_number(number: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&number) {
            return Err(CalendarError::InvalidMonth { month: number });
        }
        Ok(Self::ALL[(number - 1) as usize])
    }

    /// Returns the 1-based month number.
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Returns the English transliteration of the month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::Farvardin => "Farvardin",
            Month::Ordibehesht => "Ordibehesht",
            Month::Khordad => "Khordad",
            Month::Tir => "Tir",
            Month::Mordad => "Mordad",
            Month::Shahrivar => "Shahrivar",
            Month::Mehr => "Mehr",
            Month::Aban => "Aban",
            Month::Azar => "Azar",
            Month::Dey => "Dey",
            Month::Bahman => "Bahman",
            Month::Esfand => "Esfand",
        }
    }

    /// Returns the month name in Persian script.
    pub fn persian_name(self) -> &'static str {
        match self {
            Month::Farvardin => "فروردین",
            Month::Ordibehesht => "اردیبهشت",
            Month::Khordad => "خرداد",
            Month::Tir => "تیر",
            Month::Mordad => "مرداد",
            Month::Shahrivar => "شهریور",
            Month::Mehr => "مهر",
            Month::Aban => "آبان",
            Month::Azar => "آذر",
            Month::Dey => "دی",
            Month::Bahman => "بهمن",
            Month::Esfand => "اسفند",
        }
    }

    /// Returns the number of days in this month of the given Jalali year.
    pub fn days_in(self, year: i32) -> u32 {
        match self {
            Month::Farvardin
            | Month::Ordibehesht
            | Month::Khordad
            | Month::Tir
            | Month::Mordad
            | Month::Shahrivar => 31,
            Month::Mehr | Month::Aban | Month::Azar | Month::Dey | Month::Bahman => 30,
            Month::Esfand => {
                if is_leap_jalali_year(year) {
                    30
                } else {
                    29
                }
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parses an English month name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalendarError::UnknownMonthName {
                name: s.to_string(),
            })
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// Returns the number of days in a Jalali month.
///
/// Months 1..=6 have 31 days, 7..=11 have 30, and month 12 has 30 in a leap
/// year and 29 otherwise. A month number outside 1..=12 yields `0` rather
/// than an error.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match Month::from_number(month) {
        Ok(m) => m.days_in(year),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_valid() {
        assert_eq!(Month::from_number(1).unwrap(), Month::Farvardin);
        assert_eq!(Month::from_number(12).unwrap(), Month::Esfand);
    }

    #[test]
    fn from_number_invalid() {
        assert_eq!(
            Month::from_number(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Month::from_number(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn number_roundtrip() {
        for n in 1..=12 {
            assert_eq!(Month::from_number(n).unwrap().number(), n);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Month::Farvardin.name(), "Farvardin");
        assert_eq!(Month::Mehr.persian_name(), "مهر");
        assert_eq!(Month::Esfand.persian_name(), "اسفند");
        assert_eq!(Month::Ordibehesht.to_string(), "Ordibehesht");
    }

    #[test]
    fn from_str_ignores_case() {
        assert_eq!("bahman".parse::<Month>().unwrap(), Month::Bahman);
        assert_eq!(" AZAR ".parse::<Month>().unwrap(), Month::Azar);
        assert!("Brumaire".parse::<Month>().is_err());
    }

    #[test]
    fn lengths() {
        for n in 1..=6 {
            assert_eq!(days_in_month(1400, n), 31);
        }
        for n in 7..=11 {
            assert_eq!(days_in_month(1400, n), 30);
        }
        assert_eq!(days_in_month(1399, 12), 30);
        assert_eq!(days_in_month(1400, 12), 29);
    }

    #[test]
    fn out_of_range_month_is_zero() {
        assert_eq!(days_in_month(1400, 0), 0);
        assert_eq!(days_in_month(1400, 13), 0);
    }

    #[test]
    fn year_lengths() {
        let total = |y: i32| Month::ALL.iter().map(|m| m.days_in(y)).sum::<u32>();
        assert_eq!(total(1399), 366);
        assert_eq!(total(1400), 365);
    }
}
