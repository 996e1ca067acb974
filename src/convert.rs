use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use jalali_time::{JalaliDateTime, Layout, ParseError, Zone};

use crate::config::JalaliConfig;

/// Resolved settings shared by every subcommand.
#[derive(Debug)]
pub struct Settings {
    pub zone: Zone,
    pub output: String,
    pub input: Layout,
}

/// Merges the config file with command-line overrides.
pub fn build_settings(config: &JalaliConfig, zone_override: Option<&str>) -> Result<Settings> {
    let zone_name = zone_override.unwrap_or(&config.zone);
    let zone = build_zone(zone_name)?;
    Ok(Settings {
        zone,
        output: config.format.output.clone(),
        input: Layout::compile(&config.format.input),
    })
}

/// Parses a zone given as an IANA name or a `±HH:MM` offset.
pub fn build_zone(name: &str) -> Result<Zone> {
    name.parse::<Zone>()
        .with_context(|| format!("invalid zone {name:?}"))
}

/// Parses a Gregorian `YYYY-MM-DD` date, optionally followed by `HH:MM:SS`.
pub fn parse_gregorian(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
        Err(_) => bail!("unknown Gregorian date: {value:?} (expected YYYY-MM-DD[ HH:MM:SS])"),
    }
}

/// Parses a bare Jalali `YYYY/MM/DD` date at midnight.
pub fn parse_jalali_date(value: &str, zone: Zone) -> Result<JalaliDateTime> {
    let parts: Vec<&str> = value.trim().split('/').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("unknown Jalali date: {value:?} (expected YYYY/MM/DD)");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {value:?}"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in {value:?}"))?;
    let day: u32 = day
        .parse()
        .with_context(|| format!("invalid day in {value:?}"))?;
    if !jalali_calendar::is_valid_jalali_date(year, month, day) {
        bail!("invalid Jalali date: {year}/{month:02}/{day:02}");
    }
    Ok(JalaliDateTime::from_date(year, month, day, zone)?)
}

/// Parses a Jalali value with the configured input layout, falling back to
/// a bare `YYYY/MM/DD` date when the layout does not match.
pub fn parse_jalali(value: &str, settings: &Settings) -> Result<JalaliDateTime> {
    match settings.input.parse(value, settings.zone.clone()) {
        Ok(dt) => Ok(dt),
        Err(ParseError::LayoutMismatch { .. }) => parse_jalali_date(value, settings.zone.clone())
            .with_context(|| {
                format!(
                    "{value:?} matches neither the layout {:?} nor YYYY/MM/DD",
                    settings.input.as_str()
                )
            }),
        Err(e) => Err(e.into()),
    }
}
