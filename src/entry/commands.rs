use std::collections::BTreeMap;
use std::io::Read as _;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::args::{ChartArgs, Command, ErrorsArgs, IntervalArgs, PercentilesArgs, PeriodArgs};
use crate::error::{AppError, AppResult};
use crate::interval::{self, Fidelity, Interval, TimeRange};
use crate::percentiles::{self, ExtractedBucket, PercentileSeries};
use crate::period::{ALLOWED_TIME_PERIODS, StatsPeriod, resolve_stats_period};
use crate::series::{ErrorSeries, series_selection};

use super::render::render;

const STDIN_PATH: &str = "-";

#[derive(Debug, Serialize)]
pub(super) struct IntervalReport {
    pub(super) interval: Interval,
    pub(super) is_short: bool,
    pub(super) diff_minutes: i64,
    pub(super) include_previous: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct PercentileReport {
    pub(super) buckets: Vec<ExtractedBucket>,
    pub(super) series: PercentileSeries,
}

#[derive(Debug, Serialize)]
pub(super) struct FieldsReport {
    pub(super) fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct PeriodReport {
    pub(super) period: StatsPeriod,
    pub(super) fallback: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct ErrorsReport {
    pub(super) series: ErrorSeries,
    pub(super) legend: BTreeMap<String, bool>,
}

/// Runs the selected command and returns its rendered output.
pub(super) fn execute(args: &ChartArgs) -> AppResult<String> {
    match &args.command {
        Command::Interval(interval_args) => render(
            &interval_report(interval_args, args.default_period),
            args.output_format,
        ),
        Command::Percentiles(percentile_args) => {
            render(&percentile_report(percentile_args)?, args.output_format)
        }
        Command::Fields(fields_args) => render(
            &FieldsReport {
                fields: percentiles::percentile_fields(fields_args.field.as_deref()),
            },
            args.output_format,
        ),
        Command::Period(period_args) => render(&period_report(period_args, args), args.output_format),
        Command::Errors(errors_args) => render(&errors_report(errors_args)?, args.output_format),
    }
}

pub(super) fn interval_report(args: &IntervalArgs, default_period: StatsPeriod) -> IntervalReport {
    let range = TimeRange {
        period: Some(args.period.unwrap_or(default_period)),
        start: args.start,
        end: args.end,
    };
    let resolved = interval::resolve(&range, Fidelity::from(args.high_fidelity));
    IntervalReport {
        interval: resolved.interval,
        is_short: resolved.is_short,
        diff_minutes: interval::diff_in_minutes(&range),
        include_previous: interval::can_include_previous_period(
            args.include_previous,
            args.period,
        ),
    }
}

fn percentile_report(args: &PercentilesArgs) -> AppResult<PercentileReport> {
    let input = read_input(&args.input)?;
    let rows = percentiles::rows_from_json(&input)?;
    debug!("Read {} percentile rows from {}", rows.len(), args.input);
    let buckets = percentiles::extract(&rows)?;
    let series = percentiles::to_series(&buckets);
    Ok(PercentileReport { buckets, series })
}

pub(super) fn period_report(args: &PeriodArgs, chart_args: &ChartArgs) -> PeriodReport {
    let allowed: &[StatsPeriod] = if chart_args.allowed_periods.is_empty() {
        &ALLOWED_TIME_PERIODS
    } else {
        &chart_args.allowed_periods
    };
    let resolution = resolve_stats_period(args.value.as_deref(), allowed, chart_args.default_period);
    PeriodReport {
        period: resolution.period(),
        fallback: resolution.is_fallback(),
    }
}

fn errors_report(args: &ErrorsArgs) -> AppResult<ErrorsReport> {
    let input = read_input(&args.input)?;
    let stats: Option<Vec<(i64, u64)>> = serde_json::from_str(&input)?;
    Ok(ErrorsReport {
        series: ErrorSeries::from_stats(stats.as_deref()),
        legend: series_selection(args.hidden.as_slice()),
    })
}

fn read_input(path: &str) -> AppResult<String> {
    let read_error = |err| AppError::ReadInput {
        path: PathBuf::from(path),
        source: err,
    };
    if path == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(read_error)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(read_error)
}
