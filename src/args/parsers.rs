use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{PeriodError, RangeBound, ValidationError};
use crate::period::StatsPeriod;

/// Timestamps without an offset are read as UTC.
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub(crate) fn parse_period_arg(s: &str) -> Result<StatsPeriod, PeriodError> {
    s.parse::<StatsPeriod>()
}

pub(crate) fn parse_timestamp(
    value: &str,
    bound: RangeBound,
) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|err| ValidationError::InvalidTimestamp {
            value: value.to_owned(),
            bound,
            source: err,
        })
}

pub(super) fn parse_start_arg(s: &str) -> Result<DateTime<Utc>, ValidationError> {
    parse_timestamp(s, RangeBound::Start)
}

pub(super) fn parse_end_arg(s: &str) -> Result<DateTime<Utc>, ValidationError> {
    parse_timestamp(s, RangeBound::End)
}
