//! Request format of the simulation backend.
//!
//! ```json
//! { "qubits": 2,
//!   "gates": [ { "name": "H", "targets": [0] },
//!              { "name": "CNOT", "controls": [0], "targets": [1] } ],
//!   "shots": 1000 }
//! ```
//!
//! Missing qubit references fall back to index 0, or 1 for a CNOT target.

use qforge_ir::{CircuitState, Gate, GateKind};
use serde::{Deserialize, Serialize};

/// Shots requested when nothing else is configured.
pub const DEFAULT_SHOTS: u32 = 1000;

/// One gate of a simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRecord {
    /// Backend gate name (`H`, `CNOT`, `MEASURE`, ...).
    pub name: String,
    /// Control qubits; only present for controlled gates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<u32>,
    /// Target qubits.
    pub targets: Vec<u32>,
}

impl GateRecord {
    /// Encode a placed gate.
    pub fn from_gate(gate: &Gate) -> Self {
        let refs = gate.refs;
        let (controls, targets) = match gate.kind {
            GateKind::Cnot => (
                vec![refs.control_qubit.unwrap_or(0)],
                vec![refs.target_qubit.unwrap_or(1)],
            ),
            _ => (Vec::new(), vec![refs.qubit_index.unwrap_or(0)]),
        };
        Self {
            name: gate.kind.backend_name().to_string(),
            controls,
            targets,
        }
    }
}

/// Body of `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Number of qubit wires.
    pub qubits: usize,
    /// Gates in placement order.
    pub gates: Vec<GateRecord>,
    pub shots: u32,
}

impl SimulationRequest {
    /// Encode a circuit.
    pub fn from_state(state: &CircuitState, shots: u32) -> Self {
        Self {
            qubits: state.num_qubits(),
            gates: state.gates().iter().map(GateRecord::from_gate).collect(),
            shots,
        }
    }
}
