//! Query bucket interval selection for a dashboard time range.
#[cfg(test)]
mod tests;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::period::{DEFAULT_STATS_PERIOD, SECS_PER_HOUR, StatsPeriod};

// Thresholds in minutes.
pub const SIXTY_DAYS: i64 = 86_400;
pub const THIRTY_DAYS: i64 = 43_200;
pub const TWO_WEEKS: i64 = 20_160;
pub const ONE_WEEK: i64 = 10_080;
pub const TWENTY_FOUR_HOURS: i64 = 1_440;
pub const ONE_HOUR: i64 = 60;

/// Longest period (45 days, in hours) that can still be compared with the
/// period before it.
pub const MAX_PERIOD_HOURS_INCLUDE_PREVIOUS: u64 = 1_080;

const SECS_PER_MINUTE_I64: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket density requested by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fidelity {
    #[default]
    Normal,
    High,
}

impl From<bool> for Fidelity {
    fn from(high_fidelity: bool) -> Self {
        if high_fidelity {
            Fidelity::High
        } else {
            Fidelity::Normal
        }
    }
}

/// A dashboard date selection. Explicit bounds take precedence over `period`
/// only when both `start` and `end` are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub period: Option<StatsPeriod>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    #[must_use]
    pub const fn from_period(period: StatsPeriod) -> Self {
        Self {
            period: Some(period),
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            period: None,
            start: Some(start),
            end: Some(end),
        }
    }

    fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            (Some(_) | None, None) | (None, Some(_)) => None,
        }
    }

    fn effective_period(&self) -> StatsPeriod {
        self.period.unwrap_or(DEFAULT_STATS_PERIOD)
    }

    // Explicit bounds count whole minutes; periods keep their exact length.
    fn span_seconds(&self) -> i64 {
        match self.bounds() {
            Some((start, end)) => end
                .signed_duration_since(start)
                .num_minutes()
                .saturating_mul(SECS_PER_MINUTE_I64),
            None => i64::try_from(self.effective_period().as_seconds()).unwrap_or(i64::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalResult {
    pub interval: Interval,
    pub is_short: bool,
}

/// Length of the range in whole minutes, `end - start` when both bounds are
/// set and the (default) period otherwise.
#[must_use]
pub fn diff_in_minutes(range: &TimeRange) -> i64 {
    match range.bounds() {
        Some((start, end)) => end.signed_duration_since(start).num_minutes(),
        None => i64::try_from(range.effective_period().as_minutes()).unwrap_or(i64::MAX),
    }
}

const fn minutes_as_seconds(minutes: i64) -> i64 {
    minutes.saturating_mul(SECS_PER_MINUTE_I64)
}

const fn pick(fidelity: Fidelity, normal: Interval, high: Interval) -> Interval {
    match fidelity {
        Fidelity::Normal => normal,
        Fidelity::High => high,
    }
}

fn interval_for_span(span_secs: i64, fidelity: Fidelity) -> Interval {
    // Order matters: a span of exactly 24 hours falls through to the last arm.
    if span_secs >= minutes_as_seconds(SIXTY_DAYS) {
        return pick(fidelity, Interval::OneDay, Interval::FourHours);
    }
    if span_secs >= minutes_as_seconds(THIRTY_DAYS) {
        return pick(fidelity, Interval::FourHours, Interval::OneHour);
    }
    if span_secs > minutes_as_seconds(TWENTY_FOUR_HOURS) {
        return pick(fidelity, Interval::OneHour, Interval::ThirtyMinutes);
    }
    if span_secs <= minutes_as_seconds(ONE_HOUR) {
        return pick(fidelity, Interval::FiveMinutes, Interval::OneMinute);
    }
    pick(fidelity, Interval::FifteenMinutes, Interval::FiveMinutes)
}

/// Picks the query bucket width for `range`.
#[must_use]
pub fn resolve_interval(range: &TimeRange, fidelity: Fidelity) -> Interval {
    let span = range.span_seconds();
    let interval = interval_for_span(span, fidelity);
    debug!(
        "Resolved interval {} for a {}s range ({:?} fidelity)",
        interval, span, fidelity
    );
    interval
}

/// Ranges of 24 hours or less use the shorter interval presets.
#[must_use]
pub fn is_short_interval(range: &TimeRange) -> bool {
    range.span_seconds() <= minutes_as_seconds(TWENTY_FOUR_HOURS)
}

#[must_use]
pub fn resolve(range: &TimeRange, fidelity: Fidelity) -> IntervalResult {
    IntervalResult {
        interval: resolve_interval(range, fidelity),
        is_short: is_short_interval(range),
    }
}

/// Whether a "previous period" comparison series may be requested. Periods
/// longer than 45 days never include one.
#[must_use]
pub fn can_include_previous_period(requested: bool, period: Option<StatsPeriod>) -> bool {
    if !requested {
        return false;
    }

    let max_secs = MAX_PERIOD_HOURS_INCLUDE_PREVIOUS.saturating_mul(SECS_PER_HOUR);
    match period {
        Some(period) if period.as_seconds() > max_secs => {
            debug!("Period {} is too long to include the previous period", period);
            false
        }
        Some(_) | None => true,
    }
}
