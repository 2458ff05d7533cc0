use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid percentile query result: {reason}")]
    InvalidInput { reason: String },
    #[error("Percentile key '{key}' has an unsupported suffix '{digits}' (at most 3 digits).")]
    UnsupportedSuffix { key: String, digits: String },
    #[error("Percentile query result is not valid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
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

impl ExtractError {
    pub(crate) fn invalid_input<R>(reason: R) -> Self
    where
        R: Into<String>,
    {
        ExtractError::InvalidInput {
            reason: reason.into(),
        }
    }
}
