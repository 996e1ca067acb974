//! Occurrences command: list a recurring event within a range.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use jalali_recurrence::RecurringEvent;

use crate::cli::OccurrencesArgs;
use crate::convert::{self, Settings};

/// Returns one formatted occurrence per line.
pub fn run(args: OccurrencesArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("occurrences").entered();
    let start = convert::parse_jalali(&args.start, settings).context("invalid --start")?;
    let end = args
        .end
        .as_deref()
        .map(|value| convert::parse_jalali(value, settings))
        .transpose()
        .context("invalid --end")?;
    let range_start =
        convert::parse_jalali(&args.range_start, settings).context("invalid --range-start")?;
    let range_end =
        convert::parse_jalali(&args.range_end, settings).context("invalid --range-end")?;

    let event = RecurringEvent::every_days(start, end, args.every_days)?;
    let lines: Vec<String> = event
        .occurrences_iter(&range_start, &range_end)
        .map(|dt| dt.format(&settings.output))
        .collect();
    info!(
        every_days = args.every_days,
        n = lines.len(),
        "listed occurrences"
    );
    Ok(lines.join("\n"))
}
