//! Agent error types

use thiserror::Error;

/// Failure of a single agent call, classified by cause
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AgentError {
    pub kind: AgentErrorKind,
    pub message: String,
}

impl AgentError {
    pub fn new(kind: AgentErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Network, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::RateLimit, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::ServerError, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Auth, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::InvalidRequest, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::InvalidResponse, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Unknown, message)
    }

    /// Map an HTTP error status from the hosted API to an error
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            401 | 403 => Self::auth(format!("Authentication failed: {message}")),
            429 => Self::rate_limit(format!("Rate limit exceeded: {message}")),
            400 | 404 | 422 => Self::invalid_request(format!("Invalid request: {message}")),
            500..=599 => Self::server_error(format!("Server error: {message}")),
            _ => Self::unknown(format!("HTTP {status}: {message}")),
        }
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentErrorKind {
    /// Network issues, timeouts
    Network,
    /// Rate limited or out of quota (429)
    RateLimit,
    /// Server error (5xx)
    ServerError,
    /// Authentication failed (401, 403)
    Auth,
    /// Request rejected (400, 404, 422)
    InvalidRequest,
    /// Response could not be parsed or held no answer
    InvalidResponse,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(AgentError::from_status(401, "x").kind, AgentErrorKind::Auth);
        assert_eq!(AgentError::from_status(403, "x").kind, AgentErrorKind::Auth);
        assert_eq!(
            AgentError::from_status(429, "quota").kind,
            AgentErrorKind::RateLimit
        );
        assert_eq!(
            AgentError::from_status(400, "x").kind,
            AgentErrorKind::InvalidRequest
        );
        assert_eq!(
            AgentError::from_status(503, "x").kind,
            AgentErrorKind::ServerError
        );
        assert_eq!(AgentError::from_status(418, "x").kind, AgentErrorKind::Unknown);
    }

    #[test]
    fn test_display_is_message() {
        let err = AgentError::from_status(429, "You exceeded your current quota");
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded: You exceeded your current quota"
        );
    }
}
