//! Export command implementation.

use anyhow::Result;
use console::style;
use qforge_ir::export::to_qiskit;

use super::common::{load_circuit, write_output};

pub fn execute(input: &str, qiskit: bool, output: Option<&str>) -> Result<()> {
    let circuit = load_circuit(input)?;

    // Re-validate the model before emitting anything.
    let state = circuit.clone().into_state()?;
    tracing::info!(
        qubits = state.num_qubits(),
        gates = state.gates().len(),
        "Loaded circuit"
    );

    let contents = if qiskit {
        to_qiskit(&circuit)
    } else {
        circuit.to_json_pretty()?
    };

    write_output(&contents, output)?;

    if let Some(path) = output {
        eprintln!(
            "{} Wrote {} to {}",
            style("✓").green().bold(),
            if qiskit { "Qiskit code" } else { "circuit JSON" },
            style(path).cyan()
        );
    }

    Ok(())
}
