use thiserror::Error;

#[derive(Debug, Error, Clone, Copy)]
pub enum RangeBound {
    #[error("start")]
    Start,
    #[error("end")]
    End,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid {bound} timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        bound: RangeBound,
        #[source]
        source: chrono::ParseError,
    },
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
