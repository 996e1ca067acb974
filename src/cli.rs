use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jalali calendar command-line tool.
#[derive(Parser)]
#[command(
    name = "jalali",
    version,
    about = "Convert, format and do arithmetic on Jalali (Persian) dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: jalali.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Time zone (IANA name or ±HH:MM), overriding the config file.
    #[arg(short, long, global = true)]
    pub zone: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current Jalali date and time.
    Now(NowArgs),
    /// Convert a Gregorian date (YYYY-MM-DD[ HH:MM:SS]) to Jalali.
    ToJalali(ToJalaliArgs),
    /// Convert a Jalali date-time to Gregorian.
    ToGregorian(ToGregorianArgs),
    /// Re-format a Jalali date-time with another layout.
    Format(FormatArgs),
    /// Add a calendar duration to a Jalali date-time.
    Add(AddArgs),
    /// Count whole days between two Jalali date-times.
    Between(BetweenArgs),
    /// List the occurrences of a recurring event within a range.
    Occurrences(OccurrencesArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Output layout, overriding `[format].output`.
    #[arg(short, long)]
    pub layout: Option<String>,
}

/// Arguments for the `to-jalali` subcommand.
#[derive(clap::Args)]
pub struct ToJalaliArgs {
    /// Gregorian date, optionally followed by a time of day.
    pub date: String,

    /// Output layout, overriding `[format].output`.
    #[arg(short, long)]
    pub layout: Option<String>,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Jalali date-time in the input layout, or a bare YYYY/MM/DD date.
    pub value: String,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Jalali date-time in the input layout, or a bare YYYY/MM/DD date.
    pub value: String,

    /// Output layout.
    #[arg(short, long)]
    pub layout: String,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Jalali date-time in the input layout, or a bare YYYY/MM/DD date.
    pub value: String,

    /// Years to add (negative to subtract).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i32,

    /// Months to add (negative to subtract).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i32,

    /// Days to add (negative to subtract).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i32,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// First Jalali date-time.
    pub first: String,

    /// Second Jalali date-time.
    pub second: String,
}

/// Arguments for the `occurrences` subcommand.
#[derive(clap::Args)]
pub struct OccurrencesArgs {
    /// First occurrence of the event.
    #[arg(long)]
    pub start: String,

    /// Last moment the event may occur.
    #[arg(long)]
    pub end: Option<String>,

    /// Start of the listed range.
    #[arg(long = "range-start")]
    pub range_start: String,

    /// End of the listed range.
    #[arg(long = "range-end")]
    pub range_end: String,

    /// Days between occurrences.
    #[arg(long = "every-days", default_value_t = 1)]
    pub every_days: i64,
}
