use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::AppResult;

use super::commands::{ErrorsReport, FieldsReport, IntervalReport, PercentileReport, PeriodReport};

/// Plain-text rendering of a command report.
pub(super) trait TextReport {
    fn write_text(&self, out: &mut String) -> fmt::Result;
}

pub(super) fn render<R>(report: &R, format: OutputFormat) -> AppResult<String>
where
    R: TextReport + Serialize,
{
    let mut out = String::new();
    match format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(report)?);
            out.push('\n');
        }
    }
    Ok(out)
}

impl TextReport for IntervalReport {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "interval: {}", self.interval)?;
        writeln!(out, "short: {}", self.is_short)?;
        writeln!(out, "range_minutes: {}", self.diff_minutes)?;
        writeln!(out, "include_previous: {}", self.include_previous)
    }
}

impl TextReport for PercentileReport {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", self.series.series_name)?;
        for point in &self.series.data {
            writeln!(out, "{:>6} {}", point.name, point.value)?;
        }
        Ok(())
    }
}

impl TextReport for FieldsReport {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        for field in &self.fields {
            writeln!(out, "{}", field)?;
        }
        Ok(())
    }
}

impl TextReport for PeriodReport {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        if self.fallback {
            writeln!(out, "{} (default)", self.period)
        } else {
            writeln!(out, "{}", self.period)
        }
    }
}

impl TextReport for ErrorsReport {
    fn write_text(&self, out: &mut String) -> fmt::Result {
        match self.series.total {
            Some(total) => writeln!(out, "total: {}", total)?,
            None => writeln!(out, "total: n/a")?,
        }
        for (timestamp_ms, count) in &self.series.data {
            writeln!(out, "{} {}", timestamp_ms, count)?;
        }
        for series in self.legend.keys() {
            writeln!(out, "hidden: {}", series)?;
        }
        Ok(())
    }
}
