//! Conversion commands: `now`, `to-jalali`, `to-gregorian` and `format`.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use jalali_time::JalaliDateTime;

use crate::cli::{FormatArgs, NowArgs, ToGregorianArgs, ToJalaliArgs};
use crate::convert::{self, Settings};

const GREGORIAN_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Prints the current Jalali date-time in the configured zone.
pub fn now(args: NowArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("now").entered();
    let now = JalaliDateTime::now(settings.zone.clone());
    info!(zone = %settings.zone, "read system clock");
    Ok(now.format(args.layout.as_deref().unwrap_or(&settings.output)))
}

pub fn to_jalali(args: ToJalaliArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("to_jalali").entered();
    let naive = convert::parse_gregorian(&args.date)?;
    let dt = JalaliDateTime::from_gregorian(naive, settings.zone.clone())
        .with_context(|| format!("{naive} has no Jalali counterpart"))?;
    info!(gregorian = %naive, jalali = %dt, "converted");
    Ok(dt.format(args.layout.as_deref().unwrap_or(&settings.output)))
}

pub fn to_gregorian(args: ToGregorianArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("to_gregorian").entered();
    let dt = convert::parse_jalali(&args.value, settings)?;
    let naive = dt.to_gregorian();
    info!(jalali = %dt, gregorian = %naive, "converted");
    Ok(naive.format(GREGORIAN_LAYOUT).to_string())
}

/// Re-renders a Jalali value with an explicit layout.
pub fn format(args: FormatArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("format").entered();
    let dt = convert::parse_jalali(&args.value, settings)?;
    Ok(dt.format(&args.layout))
}
