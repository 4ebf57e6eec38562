use thiserror::Error;

use crate::common::types::AnyError;

/// Failures surfaced to the host bridge.
///
/// Callers receive either a fully-populated result or exactly one of these;
/// there is no partial-result mode.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required parameter was missing or empty. Raised before any
    /// network activity takes place.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The engine or the transport failed mid-operation. Carries the
    /// upstream message verbatim.
    #[error("{context}: {message}")]
    OperationFailed {
        context: &'static str,
        message: String,
    },
}

impl ServiceError {
    pub(crate) fn operation(context: &'static str, source: AnyError) -> Self {
        Self::OperationFailed {
            context,
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_failure_keeps_the_upstream_message() {
        let err = ServiceError::operation("Search failed", "boom".into());
        assert_eq!(err.to_string(), "Search failed: boom");
    }

    #[test]
    fn invalid_input_renders_the_plain_message() {
        let err = ServiceError::InvalidInput("Must provide a query");
        assert_eq!(err.to_string(), "Must provide a query");
    }
}
