//! Domain and collaborator error types.

use thiserror::Error;

/// Errors raised while accepting an inbound request.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The inbound payload is missing a required field or carries a bad value.
    #[error("validation error: {0}")]
    Validation(String),

    /// The event type name is not one of the known event types.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
}

/// Failure of a call to an external collaborator (Order or Delivery service).
///
/// These never reach the inbound caller; the dispatcher records them in its
/// reaction and logs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The request did not complete within the configured timeout.
    #[error("{service} timed out")]
    Timeout {
        /// Name of the collaborator.
        service: &'static str,
    },

    /// The collaborator could not be reached (connection refused, DNS, ...).
    #[error("{service} unreachable: {message}")]
    Unreachable {
        /// Name of the collaborator.
        service: &'static str,
        /// Transport error description.
        message: String,
    },

    /// The collaborator answered with a non-2xx status.
    #[error("{service} responded with HTTP {status}: {body}")]
    Rejected {
        /// Name of the collaborator.
        service: &'static str,
        /// HTTP status code returned.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },
}

impl CollaboratorError {
    /// Name of the collaborator that failed.
    #[must_use]
    pub fn service(&self) -> &'static str {
        match self {
            Self::Timeout { service }
            | Self::Unreachable { service, .. }
            | Self::Rejected { service, .. } => service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_includes_status_and_body() {
        let err = CollaboratorError::Rejected {
            service: "order-service",
            status: 404,
            body: "Order not found".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "order-service responded with HTTP 404: Order not found"
        );
        assert_eq!(err.service(), "order-service");
    }

    #[test]
    fn test_timeout_reports_service_name() {
        let err = CollaboratorError::Timeout {
            service: "delivery-service",
        };

        assert_eq!(err.to_string(), "delivery-service timed out");
        assert_eq!(err.service(), "delivery-service");
    }
}
