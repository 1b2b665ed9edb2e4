//! Qubit wire types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertical position of wire `q0` on a fresh canvas.
pub const FIRST_WIRE_Y: f64 = 100.0;

/// Vertical distance between consecutive default wire positions.
pub const WIRE_SPACING: f64 = 80.0;

/// Default vertical coordinate for the wire with the given index.
pub fn default_wire_y(index: u32) -> f64 {
    FIRST_WIRE_Y + f64::from(index) * WIRE_SPACING
}

/// Stable identifier of a qubit wire.
///
/// Derived from the wire index (`qubit-3`), so re-adding a removed index
/// yields the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(String);

impl WireId {
    /// Identifier for the wire carrying the given qubit index.
    pub fn for_index(index: u32) -> Self {
        Self(format!("qubit-{index}"))
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A horizontal qubit track on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QubitWire {
    /// Stable identifier.
    pub id: WireId,
    /// Qubit index (unique within a circuit).
    pub index: u32,
    /// Vertical canvas coordinate.
    pub y: f64,
}

impl QubitWire {
    /// Create a wire at its default vertical position.
    pub fn new(index: u32) -> Self {
        Self::at(index, default_wire_y(index))
    }

    /// Create a wire at an explicit vertical position.
    pub fn at(index: u32, y: f64) -> Self {
        Self {
            id: WireId::for_index(index),
            index,
            y,
        }
    }

    /// Label shown on the wire handle (`q0`, `q1`, ...).
    pub fn label(&self) -> String {
        format!("q{}", self.index)
    }
}

impl fmt::Display for QubitWire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.index)
    }
}
