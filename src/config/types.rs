use serde::Deserialize;

use crate::args::OutputFormat;
use crate::period::StatsPeriod;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub default_period: Option<StatsPeriod>,
    pub allowed_periods: Option<Vec<StatsPeriod>>,
    pub high_fidelity: Option<bool>,
    pub include_previous: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
