//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::{
    ChartArgs, Command, ErrorsArgs, FieldsArgs, IntervalArgs, PercentilesArgs, PeriodArgs,
};
pub use types::OutputFormat;
