//! Core library for the `chartspan` CLI.
//!
//! Dashboards ask two questions before drawing a time-series chart: how wide
//! each query bucket should be for the selected range ([`interval`]), and how
//! to turn a percentile query row into an ordered series ([`percentiles`]).
//! Both are pure functions of their inputs. The binary wraps them with config
//! loading and text/JSON output.
pub mod args;
pub mod config;
pub mod error;
pub mod interval;
pub mod percentiles;
pub mod period;
pub mod series;

mod entry;
mod system;

pub use entry::run;
