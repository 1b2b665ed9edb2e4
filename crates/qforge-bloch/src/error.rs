//! Error types for Bloch projection inputs.

use thiserror::Error;

/// Errors raised while constructing projection inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BlochError {
    /// A two-qubit statevector must carry exactly four amplitudes.
    #[error("Two-qubit statevector needs 4 amplitudes, got {0}")]
    StatevectorLength(usize),

    /// Qubit selector outside of {0, 1}.
    #[error("Qubit index {0} is out of range for a two-qubit register")]
    InvalidQubit(u32),

    /// A density matrix must be 2×2.
    #[error("Density matrix must be 2x2, got {rows}x{cols}")]
    DensityShape {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first offending row.
        cols: usize,
    },
}

/// Result type for Bloch operations.
pub type BlochResult<T> = Result<T, BlochError>;
