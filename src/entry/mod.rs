mod commands;
mod render;


use std::io::Write as _;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::ChartArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

/// Parses the command line, applies config, runs the command, and writes its
/// output to stdout.
///
/// # Errors
///
/// Returns an error when arguments, config, or command input are invalid, or
/// when output cannot be written.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let output = commands::execute(&args)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn parse_args() -> AppResult<(ChartArgs, ArgMatches)> {
    let matches = ChartArgs::command().get_matches_from(std::env::args_os());
    let args = ChartArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
