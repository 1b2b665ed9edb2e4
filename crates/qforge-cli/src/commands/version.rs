//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    println!(
        "{} {}",
        style("qforge").cyan().bold(),
        style(env!("CARGO_PKG_VERSION")).yellow()
    );
    println!();
    println!("Visual quantum circuit builder");
    println!();
    println!("Components:");
    println!("  qforge-ir      Circuit model and export formats");
    println!("  qforge-canvas  Drag, snap and selection interactions");
    println!("  qforge-bloch   Bloch sphere projection and rendering");
    println!("  qforge-builder Orchestration and simulation client");
    println!();
    println!("Export formats:");
    println!("  - Circuit JSON");
    println!("  - Qiskit (Python)");
}
