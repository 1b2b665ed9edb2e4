//! Qforge Circuit Model
//!
//! This crate holds the data model behind the visual circuit builder: qubit
//! wires laid out on a 2D canvas, gates placed on them, and the single
//! aggregate that owns both.
//!
//! # Overview
//!
//! [`CircuitState`] is immutable from the outside. Every mutation (adding a
//! qubit, moving a gate, toggling the selection) borrows the current state
//! and returns the next one, so interactive code replaces its state
//! wholesale and never observes a half-applied update.
//!
//! # Core Components
//!
//! - **Wires**: [`QubitWire`] with a stable [`WireId`], an index and a
//!   draggable vertical coordinate
//! - **Gates**: [`Gate`] with a [`GateKind`] tag, a [`Position`] and
//!   role-specific [`QubitRefs`]
//! - **Aggregate**: [`CircuitState`] and its pure operations
//! - **Export**: [`CircuitExport`] (JSON download format) and
//!   [`export::to_qiskit`]
//!
//! # Example: Building a Bell Pair
//!
//! ```rust
//! use qforge_ir::{CircuitState, GateKind, Position, QubitRefs};
//!
//! let state = CircuitState::new().add_qubit(0)?.add_qubit(1)?;
//! let (state, h) = state.add_gate(GateKind::H, Position::new(150.0, 100.0), QubitRefs::single(0));
//! let (state, _) = state.add_gate(
//!     GateKind::Cnot,
//!     Position::new(250.0, 100.0),
//!     QubitRefs::controlled(Some(0), Some(1)),
//! );
//!
//! assert_eq!(state.num_qubits(), 2);
//! assert_eq!(state.gates().len(), 2);
//!
//! // Removing a wire cascades to every gate that touches it.
//! let state = state.remove_qubit(1);
//! assert_eq!(state.gates().len(), 1);
//! assert!(state.gate(h).is_some());
//! # Ok::<(), qforge_ir::IrError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod export;
pub mod gate;
pub mod qubit;

pub use circuit::CircuitState;
pub use error::{IrError, IrResult};
pub use export::CircuitExport;
pub use gate::{Gate, GateId, GateKind, Position, QubitRefs};
pub use qubit::{QubitWire, WireId, default_wire_y};
