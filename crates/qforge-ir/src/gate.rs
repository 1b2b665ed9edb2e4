//! Placed gate types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::IrError;

/// Unique identifier of a placed gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateId(pub Uuid);

impl GateId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gate-{}", self.0)
    }
}

/// The closed set of gates the builder offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// Controlled-NOT gate.
    #[serde(rename = "CNOT")]
    Cnot,
    /// Computational-basis measurement.
    Measure,
}

impl GateKind {
    /// Every gate kind, in palette order.
    pub const ALL: [GateKind; 8] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::S,
        GateKind::T,
        GateKind::Cnot,
        GateKind::Measure,
    ];

    /// Type tag, as shown on the palette and in the export format.
    pub fn label(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::Cnot => "CNOT",
            GateKind::Measure => "Measure",
        }
    }

    /// Short glyph drawn on the gate body.
    pub fn glyph(self) -> &'static str {
        match self {
            GateKind::Cnot => "●─⊕",
            GateKind::Measure => "M",
            other => other.label(),
        }
    }

    /// Gate name understood by the simulation backend.
    pub fn backend_name(self) -> &'static str {
        match self {
            GateKind::Measure => "MEASURE",
            other => other.label(),
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::Cnot => 2,
            _ => 1,
        }
    }

    /// Whether this is one of the single-qubit unitary gates.
    pub fn is_single_qubit(self) -> bool {
        !matches!(self, GateKind::Cnot | GateKind::Measure)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GateKind {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "h" => Ok(GateKind::H),
            "x" => Ok(GateKind::X),
            "y" => Ok(GateKind::Y),
            "z" => Ok(GateKind::Z),
            "s" => Ok(GateKind::S),
            "t" => Ok(GateKind::T),
            "cnot" | "cx" => Ok(GateKind::Cnot),
            "measure" | "m" => Ok(GateKind::Measure),
            _ => Err(IrError::UnknownGate(s.to_string())),
        }
    }
}

/// A 2D canvas placement (`x` along the timeline, `y` on a wire).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Timeline coordinate.
    pub x: f64,
    /// Wire coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Qubit references carried by a gate.
///
/// Single-qubit gates and measurements use `qubit_index`; CNOT uses
/// `control_qubit` and `target_qubit`. References may be missing; the
/// backend wire format substitutes defaults for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QubitRefs {
    /// Qubit of a single-qubit gate or measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qubit_index: Option<u32>,
    /// Control qubit of a CNOT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_qubit: Option<u32>,
    /// Target qubit of a CNOT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_qubit: Option<u32>,
}

impl QubitRefs {
    /// References for a gate acting on one qubit.
    pub fn single(index: u32) -> Self {
        Self {
            qubit_index: Some(index),
            ..Self::default()
        }
    }

    /// References for a controlled gate.
    pub fn controlled(control: Option<u32>, target: Option<u32>) -> Self {
        Self {
            control_qubit: control,
            target_qubit: target,
            ..Self::default()
        }
    }

    /// Whether any role references the given wire index.
    pub fn references(&self, index: u32) -> bool {
        self.qubit_index == Some(index)
            || self.control_qubit == Some(index)
            || self.target_qubit == Some(index)
    }

    /// The wire the gate is drawn on: the qubit, else the control, else the target.
    pub fn primary(&self) -> Option<u32> {
        self.qubit_index
            .or(self.control_qubit)
            .or(self.target_qubit)
    }
}

/// A gate placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Unique identifier.
    pub id: GateId,
    /// Gate type.
    pub kind: GateKind,
    /// Canvas placement.
    pub position: Position,
    /// Qubit references.
    pub refs: QubitRefs,
}

impl Gate {
    /// Create a gate with a freshly generated id.
    pub fn new(kind: GateKind, position: Position, refs: QubitRefs) -> Self {
        Self {
            id: GateId::new(),
            kind,
            position,
            refs,
        }
    }

    /// Whether the gate references the given wire index in any role.
    pub fn touches(&self, index: u32) -> bool {
        self.refs.references(index)
    }
}
