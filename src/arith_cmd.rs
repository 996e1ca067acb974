//! Calendar arithmetic commands: `add` and `between`.

use anyhow::{Result, bail};
use tracing::{info, info_span};

use jalali_time::{JalaliDuration, MAX_YEAR, MIN_YEAR};

use crate::cli::{AddArgs, BetweenArgs};
use crate::convert::{self, Settings};

/// Adds years, months and days field by field, keeping the wall clock.
pub fn add(args: AddArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("add").entered();
    let dt = convert::parse_jalali(&args.value, settings)?;
    let duration = JalaliDuration::new(args.years, args.months, args.days);
    let Some(shifted) = dt.add_jalali_duration(duration) else {
        bail!("{dt} shifted by {duration:?} falls outside the years {MIN_YEAR}..={MAX_YEAR}");
    };
    info!(from = %dt, to = %shifted, "added duration");
    Ok(shifted.format(&settings.output))
}

/// Whole days between two values, never negative.
pub fn between(args: BetweenArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("between").entered();
    let first = convert::parse_jalali(&args.first, settings)?;
    let second = convert::parse_jalali(&args.second, settings)?;
    let days = first.days_between(&second);
    info!(%first, %second, days, "counted days");
    Ok(days.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JalaliConfig;

    fn settings() -> Settings {
        convert::build_settings(&JalaliConfig::default(), None).unwrap()
    }

    fn add_args(value: &str, years: i32, months: i32, days: i32) -> AddArgs {
        AddArgs {
            value: value.to_string(),
            years,
            months,
            days,
        }
    }

    #[test]
    fn add_duration() {
        let out = add(add_args("1399/02/28 08:00:00", 1, 2, 3), &settings()).unwrap();
        assert_eq!(out, "1400/04/31 08:00:00");
    }

    #[test]
    fn subtract_across_year() {
        let out = add(add_args("1401/07/04", 0, -19, 0), &settings()).unwrap();
        assert_eq!(out, "1399/12/04 00:00:00");
    }

    #[test]
    fn add_past_range_fails() {
        let err = add(add_args("9999/12/01", 1, 0, 0), &settings()).unwrap_err();
        assert!(err.to_string().contains("outside the years 1..=9999"));
    }

    #[test]
    fn days_between_is_symmetric() {
        let forward = BetweenArgs {
            first: "1399/02/28".to_string(),
            second: "1400/04/31".to_string(),
        };
        let backward = BetweenArgs {
            first: "1400/04/31".to_string(),
            second: "1399/02/28".to_string(),
        };
        assert_eq!(between(forward, &settings()).unwrap(), "431");
        assert_eq!(between(backward, &settings()).unwrap(), "431");
    }
}
