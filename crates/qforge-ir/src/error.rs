//! Error types for the circuit model.

use thiserror::Error;

use crate::gate::GateId;

/// Errors that can occur in circuit model operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A wire with this index is already part of the circuit.
    #[error("Qubit q{index} is already in the circuit")]
    DuplicateQubit {
        /// The rejected wire index.
        index: u32,
    },

    /// No wire with this index exists.
    #[error("Qubit q{index} not found in circuit")]
    QubitNotFound {
        /// The missing wire index.
        index: u32,
    },

    /// No gate with this id exists.
    #[error("Gate {0} not found in circuit")]
    GateNotFound(GateId),

    /// Gate type tag could not be parsed.
    #[error("Unknown gate type '{0}'")]
    UnknownGate(String),

    /// Export or import serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for circuit model operations.
pub type IrResult<T> = Result<T, IrError>;
