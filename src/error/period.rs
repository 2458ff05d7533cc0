use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Period must not be empty.")]
    Empty,
    #[error("Invalid period '{value}'. Expected digits followed by s, m, h, d, or w.")]
    InvalidFormat { value: String },
    #[error("Invalid period '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid period unit '{unit}'. Use s, m, h, d, or w.")]
    InvalidUnit { unit: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
