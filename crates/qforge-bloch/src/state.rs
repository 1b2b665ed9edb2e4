//! Projection inputs and their resolution order.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BlochError, BlochResult};
use crate::math::{DensityMatrix, QubitSelector, partial_trace};
use crate::projection::{self, BlochVector};

impl TryFrom<u32> for QubitSelector {
    type Error = BlochError;

    fn try_from(value: u32) -> BlochResult<Self> {
        match value {
            0 => Ok(QubitSelector::First),
            1 => Ok(QubitSelector::Second),
            other => Err(BlochError::InvalidQubit(other)),
        }
    }
}

/// A two-qubit statevector `(a00, a01, a10, a11)` and the qubit to keep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoQubitState {
    pub amplitudes: [Complex64; 4],
    pub keep: QubitSelector,
}

impl TwoQubitState {
    /// Create from a fixed array.
    pub fn new(amplitudes: [Complex64; 4], keep: QubitSelector) -> Self {
        Self { amplitudes, keep }
    }

    /// Create from a slice, checking its length and the qubit index.
    pub fn from_slice(amplitudes: &[Complex64], qubit: u32) -> BlochResult<Self> {
        let amplitudes: [Complex64; 4] = amplitudes
            .try_into()
            .map_err(|_| BlochError::StatevectorLength(amplitudes.len()))?;
        Ok(Self::new(amplitudes, QubitSelector::try_from(qubit)?))
    }

    /// Reduced density matrix of the kept qubit.
    pub fn reduced(&self) -> DensityMatrix {
        partial_trace(&self.amplitudes, self.keep)
    }
}

/// Build a density matrix from nested rows, checking the 2×2 shape.
pub fn density_from_rows(rows: &[Vec<Complex64>]) -> BlochResult<DensityMatrix> {
    let bad_row = rows.iter().find(|r| r.len() != 2);
    if rows.len() != 2 || bad_row.is_some() {
        return Err(BlochError::DensityShape {
            rows: rows.len(),
            cols: bad_row.map_or_else(|| rows.first().map_or(0, Vec::len), Vec::len),
        });
    }
    Ok(DensityMatrix::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1]))
}

/// Every way a caller can describe the state to visualize.
///
/// Several descriptions may be present at once; [`StateInput::resolve`]
/// picks one in a fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StateInput {
    pub amplitudes: Option<(Complex64, Complex64)>,
    pub density: Option<DensityMatrix>,
    pub statevector: Option<TwoQubitState>,
}

/// The description that won resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSource {
    Amplitudes,
    Density,
    Statevector,
    Default,
}

impl StateInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amplitudes(mut self, alpha: Complex64, beta: Complex64) -> Self {
        self.amplitudes = Some((alpha, beta));
        self
    }

    pub fn with_density(mut self, rho: DensityMatrix) -> Self {
        self.density = Some(rho);
        self
    }

    pub fn with_statevector(mut self, state: TwoQubitState) -> Self {
        self.statevector = Some(state);
        self
    }

    /// Which description [`StateInput::resolve`] will use.
    pub fn source(&self) -> StateSource {
        if self.amplitudes.is_some() {
            StateSource::Amplitudes
        } else if self.density.is_some() {
            StateSource::Density
        } else if self.statevector.is_some() {
            StateSource::Statevector
        } else {
            StateSource::Default
        }
    }

    /// Project to a Bloch vector: amplitudes first, then the density matrix,
    /// then the reduced statevector, else the `|0⟩` pole.
    pub fn resolve(&self) -> BlochVector {
        let source = self.source();
        debug!(?source, "Resolving Bloch input");

        match (self.amplitudes, self.density, self.statevector) {
            (Some((alpha, beta)), _, _) => projection::from_amplitudes(alpha, beta),
            (None, Some(rho), _) => projection::from_density(&rho),
            (None, None, Some(sv)) => projection::from_density(&sv.reduced()),
            (None, None, None) => BlochVector::ZERO_STATE,
        }
    }
}
