//! Qiskit script export.

use std::fmt::Write;

use crate::export::json::{CircuitExport, ExportedGate};
use crate::gate::GateKind;

/// Shots used by the generated script's simulator run.
pub const QISKIT_SHOTS: u32 = 1024;

/// Generate a Qiskit script that rebuilds and samples the circuit.
///
/// Gates are emitted in placement order. A CNOT with missing references
/// falls back to control 0 and target 1, and a single-qubit gate to qubit 0,
/// matching the simulation request format.
pub fn to_qiskit(export: &CircuitExport) -> String {
    let qubits = export.qubits.len();
    let plural = if qubits == 1 { "" } else { "s" };

    let gate_lines: Vec<String> = export.gates.iter().map(gate_line).collect();

    let mut out = String::new();
    let _ = writeln!(out, "from qiskit import QuantumCircuit, execute, Aer");
    let _ = writeln!(out, "from qiskit.visualization import plot_histogram");
    let _ = writeln!(out);
    let _ = writeln!(out, "# Create quantum circuit with {qubits} qubit{plural}");
    let _ = writeln!(out, "qc = QuantumCircuit({qubits}, {qubits})");
    let _ = writeln!(out);
    let _ = writeln!(out, "# Add gates (based on your circuit design)");
    let _ = writeln!(out, "{}", gate_lines.join("\n"));
    let _ = writeln!(out);
    let _ = writeln!(out, "# Execute the circuit");
    let _ = writeln!(out, "backend = Aer.get_backend('qasm_simulator')");
    let _ = writeln!(out, "job = execute(qc, backend, shots={QISKIT_SHOTS})");
    let _ = writeln!(out, "result = job.result()");
    let _ = writeln!(out, "counts = result.get_counts(qc)");
    let _ = writeln!(out);
    let _ = writeln!(out, "# Display results");
    let _ = writeln!(out, "print(counts)");
    out.push_str("plot_histogram(counts)");
    out
}

fn gate_line(gate: &ExportedGate) -> String {
    let q = gate.refs.qubit_index.unwrap_or(0);
    match gate.kind {
        GateKind::H => format!("qc.h({q})  # Hadamard gate on qubit {q}"),
        GateKind::X => format!("qc.x({q})  # Pauli-X gate on qubit {q}"),
        GateKind::Y => format!("qc.y({q})  # Pauli-Y gate on qubit {q}"),
        GateKind::Z => format!("qc.z({q})  # Pauli-Z gate on qubit {q}"),
        GateKind::S => format!("qc.s({q})  # S gate on qubit {q}"),
        GateKind::T => format!("qc.t({q})  # T gate on qubit {q}"),
        GateKind::Cnot => {
            let control = gate.refs.control_qubit.unwrap_or(0);
            let target = gate.refs.target_qubit.unwrap_or(1);
            format!("qc.cx({control}, {target})  # CNOT gate")
        }
        GateKind::Measure => format!("qc.measure({q}, {q})  # Measure qubit {q}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitState;
    use crate::gate::{Position, QubitRefs};

    fn bell() -> CircuitExport {
        let state = CircuitState::new().add_qubit(0).unwrap().add_qubit(1).unwrap();
        let (state, _) = state.add_gate(GateKind::H, Position::new(150.0, 100.0), QubitRefs::single(0));
        let (state, _) = state.add_gate(
            GateKind::Cnot,
            Position::new(250.0, 100.0),
            QubitRefs::controlled(Some(0), Some(1)),
        );
        let (state, _) = state.add_gate(
            GateKind::Measure,
            Position::new(350.0, 180.0),
            QubitRefs::single(1),
        );
        CircuitExport::from_state(&state)
    }

    #[test]
    fn test_bell_script() {
        let script = to_qiskit(&bell());
        assert!(script.starts_with("from qiskit import QuantumCircuit, execute, Aer\n"));
        assert!(script.contains("# Create quantum circuit with 2 qubits\n"));
        assert!(script.contains("qc = QuantumCircuit(2, 2)\n"));
        assert!(script.contains(
            "qc.h(0)  # Hadamard gate on qubit 0\nqc.cx(0, 1)  # CNOT gate\nqc.measure(1, 1)  # Measure qubit 1\n"
        ));
        assert!(script.contains("shots=1024"));
        assert!(script.ends_with("plot_histogram(counts)"));
    }

    #[test]
    fn test_singular_qubit_header() {
        let state = CircuitState::new().add_qubit(0).unwrap();
        let script = to_qiskit(&CircuitExport::from_state(&state));
        assert!(script.contains("# Create quantum circuit with 1 qubit\n"));
    }

    #[test]
    fn test_cnot_defaults() {
        let state = CircuitState::new().add_qubit(0).unwrap();
        let (state, _) = state.add_gate(GateKind::Cnot, Position::default(), QubitRefs::default());
        let script = to_qiskit(&CircuitExport::from_state(&state));
        assert!(script.contains("qc.cx(0, 1)"));
    }
}
