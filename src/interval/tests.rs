use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{
    Fidelity, Interval, IntervalResult, TimeRange, can_include_previous_period, diff_in_minutes,
    is_short_interval, resolve, resolve_interval,
};
use crate::period::{PeriodUnit, StatsPeriod};

fn anchor() -> Result<DateTime<Utc>, String> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| "invalid anchor timestamp".to_owned())
}

fn range_of_minutes(minutes: i64) -> Result<TimeRange, String> {
    let start = anchor()?;
    Ok(TimeRange::between(start, start + Duration::minutes(minutes)))
}

fn period(raw: &str) -> Result<StatsPeriod, String> {
    raw.parse()
        .map_err(|err| format!("parse '{}' failed: {}", raw, err))
}

#[test]
fn diff_uses_bounds_over_period() -> Result<(), String> {
    let mut range = range_of_minutes(90)?;
    range.period = Some(period("30d")?);
    if diff_in_minutes(&range) != 90 {
        return Err(format!("Unexpected diff: {}", diff_in_minutes(&range)));
    }
    Ok(())
}

#[test]
fn diff_truncates_partial_minutes() -> Result<(), String> {
    let start = anchor()?;
    let range = TimeRange::between(start, start + Duration::seconds(119));
    if diff_in_minutes(&range) != 1 {
        return Err(format!("Unexpected diff: {}", diff_in_minutes(&range)));
    }
    Ok(())
}

#[test]
fn diff_falls_back_to_period_then_default() -> Result<(), String> {
    let range = TimeRange::from_period(period("24h")?);
    if diff_in_minutes(&range) != 1_440 {
        return Err(format!("Unexpected diff: {}", diff_in_minutes(&range)));
    }
    if diff_in_minutes(&TimeRange::default()) != 20_160 {
        return Err("Default period should be 14 days".to_owned());
    }
    Ok(())
}

#[test]
fn diff_ignores_half_open_bounds() -> Result<(), String> {
    let range = TimeRange {
        period: Some(period("1h")?),
        start: Some(anchor()?),
        end: None,
    };
    if diff_in_minutes(&range) != 60 {
        return Err(format!("Unexpected diff: {}", diff_in_minutes(&range)));
    }
    Ok(())
}

#[test]
fn interval_ladder_normal_and_high_fidelity() -> Result<(), String> {
    let cases = [
        (86_400, Interval::OneDay, Interval::FourHours),
        (43_200, Interval::FourHours, Interval::OneHour),
        (43_199, Interval::OneHour, Interval::ThirtyMinutes),
        (1_441, Interval::OneHour, Interval::ThirtyMinutes),
        (1_440, Interval::FifteenMinutes, Interval::FiveMinutes),
        (61, Interval::FifteenMinutes, Interval::FiveMinutes),
        (60, Interval::FiveMinutes, Interval::OneMinute),
        (0, Interval::FiveMinutes, Interval::OneMinute),
    ];
    for (minutes, normal, high) in cases {
        let range = range_of_minutes(minutes)?;
        let got_normal = resolve_interval(&range, Fidelity::Normal);
        let got_high = resolve_interval(&range, Fidelity::High);
        if got_normal != normal || got_high != high {
            return Err(format!(
                "{} minutes resolved to {}/{}, expected {}/{}",
                minutes, got_normal, got_high, normal, high
            ));
        }
    }
    Ok(())
}

#[test]
fn interval_for_periods() -> Result<(), String> {
    let cases = [
        ("90d", "1d"),
        ("30d", "4h"),
        ("14d", "1h"),
        ("24h", "15m"),
        ("1h", "5m"),
    ];
    for (raw, expected) in cases {
        let interval = resolve_interval(&TimeRange::from_period(period(raw)?), Fidelity::Normal);
        if interval.as_str() != expected {
            return Err(format!("{} resolved to {}", raw, interval));
        }
    }
    Ok(())
}

#[test]
fn sub_minute_period_precision_is_kept() {
    // 86_430s is half a minute past 24 hours.
    let range = TimeRange::from_period(StatsPeriod::new(86_430, PeriodUnit::Second));
    assert_eq!(resolve_interval(&range, Fidelity::Normal), Interval::OneHour);
    assert!(!is_short_interval(&range));
    assert_eq!(diff_in_minutes(&range), 1_440);
}

#[test]
fn short_interval_boundary() -> Result<(), String> {
    if !is_short_interval(&range_of_minutes(1_440)?) {
        return Err("1440 minutes should be short".to_owned());
    }
    if is_short_interval(&range_of_minutes(1_441)?) {
        return Err("1441 minutes should not be short".to_owned());
    }
    Ok(())
}

#[test]
fn resolve_combines_interval_and_short_flag() -> Result<(), String> {
    let result = resolve(&range_of_minutes(30)?, Fidelity::High);
    let expected = IntervalResult {
        interval: Interval::OneMinute,
        is_short: true,
    };
    if result != expected {
        return Err(format!("Unexpected result: {:?}", result));
    }
    let json = serde_json::to_string(&result).map_err(|err| format!("json failed: {}", err))?;
    if json != r#"{"interval":"1m","is_short":true}"# {
        return Err(format!("Unexpected json: {}", json));
    }
    Ok(())
}

#[test]
fn fidelity_from_flag() {
    assert_eq!(Fidelity::from(true), Fidelity::High);
    assert_eq!(Fidelity::from(false), Fidelity::Normal);
}

#[test]
fn previous_period_limits() -> Result<(), String> {
    if can_include_previous_period(true, Some(period("46d")?)) {
        return Err("46d should exclude previous period".to_owned());
    }
    if !can_include_previous_period(true, Some(period("44d")?)) {
        return Err("44d should include previous period".to_owned());
    }
    if !can_include_previous_period(true, Some(period("45d")?)) {
        return Err("45d is exactly at the limit".to_owned());
    }
    if can_include_previous_period(false, Some(period("10d")?)) {
        return Err("Not requested should be false".to_owned());
    }
    if !can_include_previous_period(true, None) {
        return Err("Missing period should keep the request".to_owned());
    }
    if can_include_previous_period(true, Some(period("64801m")?)) {
        return Err("Fractional hours past the limit should exclude".to_owned());
    }
    Ok(())
}
