mod arith_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod occurrences_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let settings = convert::build_settings(&config, cli.zone.as_deref())?;

    let output = match cli.command {
        Command::Now(args) => convert_cmd::now(args, &settings),
        Command::ToJalali(args) => convert_cmd::to_jalali(args, &settings),
        Command::ToGregorian(args) => convert_cmd::to_gregorian(args, &settings),
        Command::Format(args) => convert_cmd::format(args, &settings),
        Command::Add(args) => arith_cmd::add(args, &settings),
        Command::Between(args) => arith_cmd::between(args, &settings),
        Command::Occurrences(args) => occurrences_cmd::run(args, &settings),
    }?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jalali",
            "add",
            "1400/01/01",
            "--months",
            "-3",
            "--zone",
            "UTC",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.zone.as_deref(), Some("UTC"));
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.months, -3);
        assert_eq!(args.years, 0);
    }

    #[test]
    fn cli_occurrences_defaults_to_daily() {
        let cli = Cli::try_parse_from([
            "jalali",
            "occurrences",
            "--start",
            "1400/01/01",
            "--range-start",
            "1400/01/01",
            "--range-end",
            "1400/01/05",
        ])
        .unwrap();
        let Command::Occurrences(args) = cli.command else {
            panic!("expected occurrences");
        };
        assert_eq!(args.every_days, 1);
        assert!(args.end.is_none());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["jalali"]).is_err());
    }
}
