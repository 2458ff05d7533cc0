mod app;
mod config;
mod extract;
mod period;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use extract::ExtractError;
pub use period::PeriodError;
pub use validation::{RangeBound, ValidationError};
