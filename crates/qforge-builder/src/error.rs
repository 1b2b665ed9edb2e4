//! Error types for the builder and its simulation client.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for simulation client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the simulation backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors surfaced by the circuit builder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// A simulation needs at least one qubit.
    #[error("No circuit to simulate: add at least one qubit")]
    NoQubits,

    /// A simulation is already in flight.
    #[error("A simulation is already running")]
    AlreadyRunning,

    /// No simulation was in flight when a result arrived.
    #[error("No simulation is running")]
    NotRunning,

    /// The backend was unreachable or answered badly.
    #[error("Simulation service error: {0}")]
    Service(String),

    /// The backend rejected the request.
    #[error("Simulation rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Circuit model error.
    #[error(transparent)]
    Circuit(#[from] qforge_ir::IrError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<ClientError> for BuilderError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::ApiError { status, message } => BuilderError::Rejected { status, message },
            _ => BuilderError::Service(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::ApiError {
            status: 503,
            message: "Service unavailable".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("Service unavailable"));
    }

    #[test]
    fn test_no_qubits_display() {
        assert!(BuilderError::NoQubits.to_string().contains("at least one qubit"));
    }

    #[test]
    fn test_api_error_to_builder() {
        let err: BuilderError = ClientError::ApiError {
            status: 422,
            message: "bad gate".into(),
        }
        .into();
        assert!(matches!(err, BuilderError::Rejected { status: 422, ref message } if message == "bad gate"));
    }

    #[test]
    fn test_json_error_to_builder() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BuilderError = ClientError::Json(json).into();
        assert!(matches!(err, BuilderError::Service(msg) if msg.starts_with("JSON error")));
    }

    #[test]
    fn test_circuit_error_is_transparent() {
        let err: BuilderError = qforge_ir::IrError::DuplicateQubit { index: 2 }.into();
        assert_eq!(err.to_string(), "Qubit q2 is already in the circuit");
    }
}
