use thiserror::Error;

/// Input contract violations detected before a request is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be numeric: '{value}'")]
    NotNumeric {
        field: &'static str,
        value: String,
    },

    #[error("field '{field}' must be an integer: '{value}'")]
    NotInteger {
        field: &'static str,
        value: String,
    },
}

/// The single failure kind surfaced by the API client.
///
/// Every failure path collapses into one message: the server-provided
/// `message` field when the response body carries one, otherwise
/// `HTTP <status>`, otherwise the transport error's own message. Callers
/// render it; they never classify it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_bare_message() {
        let error = ApiError::new("Symbol not found");
        assert_eq!(error.to_string(), "Symbol not found");
    }

    #[test]
    fn validation_error_converts_into_api_error() {
        let error = ApiError::from(ValidationError::EmptySymbol);
        assert_eq!(error.message(), "symbol cannot be empty");
    }
}
