use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{ChartArgs, Command};
use crate::error::ConfigError;

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn is_cli_in(matches: &ArgMatches, subcommand: &str, name: &str) -> bool {
    matches
        .subcommand_matches(subcommand)
        .is_some_and(|sub| is_cli(sub, name))
}

/// Applies configuration values to CLI arguments. Values given on the
/// command line win.
///
/// # Errors
///
/// Returns an error when the configured periods are inconsistent.
pub fn apply_config(
    args: &mut ChartArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if let Some(allowed) = config.allowed_periods.as_ref()
        && allowed.is_empty()
    {
        return Err(ConfigError::AllowedPeriodsEmpty);
    }
    if let (Some(default), Some(allowed)) =
        (config.default_period, config.allowed_periods.as_ref())
        && !allowed.contains(&default)
    {
        return Err(ConfigError::DefaultPeriodNotAllowed {
            value: default.to_string(),
        });
    }

    if !is_cli(matches, "default_period")
        && let Some(period) = config.default_period
    {
        args.default_period = period;
    }

    if !is_cli(matches, "allowed_periods")
        && let Some(allowed) = config.allowed_periods.as_ref()
    {
        args.allowed_periods = allowed.clone();
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if let Command::Interval(interval) = &mut args.command {
        if !is_cli_in(matches, "interval", "high_fidelity")
            && let Some(high_fidelity) = config.high_fidelity
        {
            interval.high_fidelity = high_fidelity;
        }
        if !is_cli_in(matches, "interval", "include_previous")
            && let Some(include_previous) = config.include_previous
        {
            interval.include_previous = include_previous;
        }
    }

    Ok(())
}
