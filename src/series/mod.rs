//! Small helpers for chart legends, labels, and daily error series.

use std::collections::BTreeMap;

use serde::Serialize;

pub const DEFAULT_TRUNCATE_LENGTH: usize = 80;
const ELLIPSIS: char = '…';
const MS_PER_SEC: i64 = 1_000;

/// Label truncation applied to axis and legend text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncate {
    #[default]
    Off,
    Standard,
    /// A length of zero disables truncation.
    Length(usize),
}

impl Truncate {
    const fn limit(self) -> Option<usize> {
        match self {
            Truncate::Off | Truncate::Length(0) => None,
            Truncate::Standard => Some(DEFAULT_TRUNCATE_LENGTH),
            Truncate::Length(length) => Some(length),
        }
    }
}

/// Cuts `value` to the truncation limit (in characters) and marks the cut
/// with an ellipsis.
#[must_use]
pub fn truncate_label(value: &str, truncate: Truncate) -> String {
    let Some(limit) = truncate.limit() else {
        return value.to_owned();
    };
    match value.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut truncated = value.get(..cut).unwrap_or(value).to_owned();
            truncated.push(ELLIPSIS);
            truncated
        }
        None => value.to_owned(),
    }
}

/// Legend selection state: every unselected series is hidden.
#[must_use]
pub fn series_selection<S>(unselected: &[S]) -> BTreeMap<String, bool>
where
    S: AsRef<str>,
{
    unselected
        .iter()
        .map(|series| (series.as_ref().to_owned(), false))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSeries {
    pub name: String,
    /// `(timestamp_ms, count)` pairs.
    pub data: Vec<(i64, u64)>,
    pub total: Option<u64>,
}

impl ErrorSeries {
    pub const NAME: &'static str = "Errors";

    /// Builds the series from per-bucket `(timestamp_secs, count)` stats. The
    /// total is `None` when no stats were returned.
    #[must_use]
    pub fn from_stats(stats: Option<&[(i64, u64)]>) -> Self {
        let data: Vec<(i64, u64)> = stats
            .unwrap_or_default()
            .iter()
            .map(|(timestamp, count)| (timestamp.saturating_mul(MS_PER_SEC), *count))
            .collect();
        let total = stats.map(|stats| {
            stats
                .iter()
                .fold(0_u64, |acc, (_, count)| acc.saturating_add(*count))
        });
        Self {
            name: Self::NAME.to_owned(),
            data,
            total,
        }
    }
}
