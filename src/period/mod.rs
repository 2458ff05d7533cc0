//! Relative stats periods such as `14d` or `24h`.
//!
//! A period is a positive integer followed by a single unit character. Spans
//! are exposed in seconds so callers comparing against hour or minute
//! thresholds never lose the fractional part of sub-hour units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PeriodError;

const SECS_PER_MINUTE: u64 = 60;
pub(crate) const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_WEEK: u64 = 604_800;

/// Period used when a range carries neither explicit bounds nor a period.
pub const DEFAULT_STATS_PERIOD: StatsPeriod = StatsPeriod::new(14, PeriodUnit::Day);

/// Periods offered by the project overview charts.
pub const ALLOWED_TIME_PERIODS: [StatsPeriod; 5] = [
    StatsPeriod::new(1, PeriodUnit::Hour),
    StatsPeriod::new(24, PeriodUnit::Hour),
    StatsPeriod::new(7, PeriodUnit::Day),
    StatsPeriod::new(14, PeriodUnit::Day),
    StatsPeriod::new(30, PeriodUnit::Day),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl PeriodUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "s" => Some(PeriodUnit::Second),
            "m" => Some(PeriodUnit::Minute),
            "h" => Some(PeriodUnit::Hour),
            "d" => Some(PeriodUnit::Day),
            "w" => Some(PeriodUnit::Week),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            PeriodUnit::Second => 's',
            PeriodUnit::Minute => 'm',
            PeriodUnit::Hour => 'h',
            PeriodUnit::Day => 'd',
            PeriodUnit::Week => 'w',
        }
    }

    const fn seconds(self) -> u64 {
        match self {
            PeriodUnit::Second => 1,
            PeriodUnit::Minute => SECS_PER_MINUTE,
            PeriodUnit::Hour => SECS_PER_HOUR,
            PeriodUnit::Day => SECS_PER_DAY,
            PeriodUnit::Week => SECS_PER_WEEK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatsPeriod {
    amount: u64,
    unit: PeriodUnit,
}

impl StatsPeriod {
    #[must_use]
    pub const fn new(amount: u64, unit: PeriodUnit) -> Self {
        Self { amount, unit }
    }

    #[must_use]
    pub const fn amount(self) -> u64 {
        self.amount
    }

    #[must_use]
    pub const fn unit(self) -> PeriodUnit {
        self.unit
    }

    /// Length of the period in seconds, saturating on overflow.
    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.amount.saturating_mul(self.unit.seconds())
    }

    /// Length of the period in whole minutes.
    #[must_use]
    pub fn as_minutes(self) -> u64 {
        self.as_seconds().checked_div(SECS_PER_MINUTE).unwrap_or(0)
    }

    /// Length of the period in whole hours; sub-hour remainders are dropped.
    #[must_use]
    pub fn as_hours(self) -> u64 {
        self.as_seconds().checked_div(SECS_PER_HOUR).unwrap_or(0)
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for StatsPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(PeriodError::Empty);
        }

        let digits_len = value.chars().take_while(char::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(PeriodError::InvalidFormat {
                value: value.to_owned(),
            });
        }
        let (num_part, unit_part) = value.split_at(digits_len);
        if unit_part.is_empty() {
            return Err(PeriodError::InvalidFormat {
                value: value.to_owned(),
            });
        }

        let amount: u64 = num_part
            .parse()
            .map_err(|err| PeriodError::InvalidNumber {
                value: value.to_owned(),
                source: err,
            })?;

        match PeriodUnit::from_suffix(unit_part) {
            Some(unit) => Ok(StatsPeriod::new(amount, unit)),
            None if unit_part.chars().count() == 1 => Err(PeriodError::InvalidUnit {
                unit: unit_part.to_owned(),
            }),
            None => Err(PeriodError::InvalidFormat {
                value: value.to_owned(),
            }),
        }
    }
}

impl Serialize for StatsPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatsPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of [`resolve_stats_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodResolution {
    /// The requested value was one of the allowed periods.
    Requested(StatsPeriod),
    /// The request was absent or not allowed.
    Fallback(StatsPeriod),
}

impl PeriodResolution {
    #[must_use]
    pub const fn period(self) -> StatsPeriod {
        match self {
            PeriodResolution::Requested(period) | PeriodResolution::Fallback(period) => period,
        }
    }

    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, PeriodResolution::Fallback(_))
    }
}

/// Resolves a requested period against `allowed`.
///
/// The request must spell an allowed period exactly as it displays (`24h`,
/// not ` 24h` or `024h`); anything else resolves to `fallback`.
#[must_use]
pub fn resolve_stats_period(
    requested: Option<&str>,
    allowed: &[StatsPeriod],
    fallback: StatsPeriod,
) -> PeriodResolution {
    let Some(raw) = requested else {
        return PeriodResolution::Fallback(fallback);
    };
    if let Some(period) = allowed.iter().find(|period| period.to_string() == raw) {
        return PeriodResolution::Requested(*period);
    }
    match raw.parse::<StatsPeriod>() {
        Ok(period) => tracing::debug!("Period '{}' ({}) is not allowed, using {}", raw, period, fallback),
        Err(err) => tracing::debug!("Ignoring period '{}': {}", raw, err),
    }
    PeriodResolution::Fallback(fallback)
}
