//! JSON circuit export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::circuit::CircuitState;
use crate::error::IrResult;
use crate::gate::{Gate, GateKind, Position, QubitRefs};
use crate::qubit::QubitWire;

/// Exported circuit document.
///
/// ```json
/// { "qubits": [{ "index": 0, "position": 100.0 }],
///   "gates": [{ "type": "H", "position": { "x": 150.0, "y": 100.0 }, "qubitIndex": 0 }],
///   "timestamp": "2025-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitExport {
    /// Wires, sorted by index.
    pub qubits: Vec<ExportedQubit>,
    /// Gates in placement order.
    pub gates: Vec<ExportedGate>,
    /// Export time.
    pub timestamp: DateTime<Utc>,
}

/// An exported wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedQubit {
    /// Qubit index.
    pub index: u32,
    /// Vertical canvas coordinate.
    pub position: f64,
}

/// An exported gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedGate {
    /// Gate type tag.
    #[serde(rename = "type")]
    pub kind: GateKind,
    /// Canvas placement.
    pub position: Position,
    /// Qubit references (`qubitIndex`, `controlQubit`, `targetQubit`).
    #[serde(flatten)]
    pub refs: QubitRefs,
}

impl CircuitExport {
    /// Export a circuit stamped with the current time.
    pub fn from_state(state: &CircuitState) -> Self {
        Self::at(state, Utc::now())
    }

    /// Export a circuit with an explicit timestamp.
    pub fn at(state: &CircuitState, timestamp: DateTime<Utc>) -> Self {
        Self {
            qubits: state
                .qubits()
                .iter()
                .map(|q| ExportedQubit {
                    index: q.index,
                    position: q.y,
                })
                .collect(),
            gates: state
                .gates()
                .iter()
                .map(|g| ExportedGate {
                    kind: g.kind,
                    position: g.position,
                    refs: g.refs,
                })
                .collect(),
            timestamp,
        }
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an exported document.
    pub fn from_json(source: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Rebuild a circuit from the export. Gates receive fresh ids and the
    /// selection is empty.
    pub fn into_state(self) -> IrResult<CircuitState> {
        let qubits = self
            .qubits
            .into_iter()
            .map(|q| QubitWire::at(q.index, q.position))
            .collect();
        let gates = self
            .gates
            .into_iter()
            .map(|g| Gate::new(g.kind, g.position, g.refs))
            .collect();
        CircuitState::from_parts(qubits, gates)
    }
}
