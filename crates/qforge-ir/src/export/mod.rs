//! Circuit export formats.
//!
//! - [`CircuitExport`]: the JSON document offered for download and re-import.
//! - [`qiskit`]: a runnable Qiskit script reproducing the circuit.

pub mod json;
pub mod qiskit;

pub use json::{CircuitExport, ExportedGate, ExportedQubit};
pub use qiskit::to_qiskit;
