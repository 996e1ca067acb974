//! Calendar-relative durations.

use std::ops::Neg;

/// A span of Jalali years, months and days.
///
/// Unlike [`chrono::TimeDelta`] the components have no fixed length: adding
/// one month to 1 Farvardin lands on 1 Ordibehesht regardless of how many
/// days that is. See
/// [`JalaliDateTime::add_jalali_duration`](crate::JalaliDateTime::add_jalali_duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JalaliDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl JalaliDuration {
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }
}

impl Neg for JalaliDuration {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            days: self.days.saturating_neg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_every_component() {
        assert_eq!(-JalaliDuration::new(1, -2, 3), JalaliDuration::new(-1, 2, -3));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(JalaliDuration::default(), JalaliDuration::new(0, 0, 0));
    }
}
