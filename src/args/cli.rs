use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::period::StatsPeriod;

use super::parsers::{parse_end_arg, parse_period_arg, parse_start_arg};
use super::types::OutputFormat;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Resolve the query interval for a time range
    Interval(IntervalArgs),
    /// Extract ordered percentile buckets from a query result
    Percentiles(PercentilesArgs),
    /// Print the percentile query columns
    Fields(FieldsArgs),
    /// Resolve a stats period against the allowed list
    Period(PeriodArgs),
    /// Build the error count series from project stats
    Errors(ErrorsArgs),
}

#[derive(Debug, Args, Clone)]
pub struct IntervalArgs {
    /// Relative period (e.g., 1h, 24h, 14d, 2w)
    #[arg(long, value_parser = parse_period_arg)]
    pub period: Option<StatsPeriod>,

    /// Range start (RFC 3339, or YYYY-MM-DDTHH:MM:SS in UTC)
    #[arg(long, value_parser = parse_start_arg, requires = "end")]
    pub start: Option<DateTime<Utc>>,

    /// Range end (RFC 3339, or YYYY-MM-DDTHH:MM:SS in UTC)
    #[arg(long, value_parser = parse_end_arg, requires = "start")]
    pub end: Option<DateTime<Utc>>,

    /// Use the denser high-fidelity intervals
    #[arg(long = "high-fidelity")]
    pub high_fidelity: bool,

    /// Request a previous-period comparison series
    #[arg(long = "include-previous")]
    pub include_previous: bool,
}

#[derive(Debug, Args, Clone)]
pub struct PercentilesArgs {
    /// Query result JSON file ('-' reads stdin)
    #[arg(long, short)]
    pub input: String,
}

#[derive(Debug, Args, Clone)]
pub struct FieldsArgs {
    /// Span operation field to measure instead of transaction.duration
    #[arg(long)]
    pub field: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PeriodArgs {
    /// Requested period; falls back to the default when missing or not allowed
    pub value: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ErrorsArgs {
    /// Project stats JSON file with [timestamp, count] pairs ('-' reads stdin)
    #[arg(long, short)]
    pub input: String,

    /// Series to hide in the legend (repeatable)
    #[arg(long = "hide")]
    pub hidden: Vec<String>,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Resolve dashboard query intervals and extract percentile chart series."
)]
pub struct ChartArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML or JSON)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Period used when a range has neither bounds nor a period
    #[arg(
        long = "default-period",
        global = true,
        default_value = "14d",
        value_parser = parse_period_arg
    )]
    pub default_period: StatsPeriod,

    /// Periods accepted by the `period` command (repeatable; defaults to 1h, 24h, 7d, 14d, 30d)
    #[arg(long = "allowed-period", global = true, value_parser = parse_period_arg)]
    pub allowed_periods: Vec<StatsPeriod>,

    /// Output format
    #[arg(
        long = "output-format",
        short = 'o',
        global = true,
        value_enum,
        default_value = "text"
    )]
    pub output_format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}
