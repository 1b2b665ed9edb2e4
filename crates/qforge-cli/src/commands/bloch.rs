//! Bloch command implementation.

use anyhow::{Context, Result};
use console::style;
use qforge_bloch::{
    BlochScene, BlochVector, OrbitCamera, SceneOptions, StateInput, TwoQubitState,
    density_from_rows, render_svg,
};

use super::common::{parse_complex, parse_complex_list, parse_matrix};

/// Arguments of the bloch command.
#[derive(Debug, Clone, Default)]
pub struct BlochArgs {
    pub alpha: Option<String>,
    pub beta: Option<String>,
    pub density: Option<String>,
    pub statevector: Option<String>,
    pub qubit: u32,
    pub svg: Option<String>,
    pub size: u32,
    pub show_grid: bool,
    pub show_axes: bool,
}

/// Build the state input from the textual arguments. Every given form is
/// parsed; the projection picks one by priority.
pub fn state_input(args: &BlochArgs) -> Result<StateInput> {
    let mut input = StateInput::new();

    if let (Some(alpha), Some(beta)) = (&args.alpha, &args.beta) {
        input = input.with_amplitudes(parse_complex(alpha)?, parse_complex(beta)?);
    }
    if let Some(density) = &args.density {
        let rho = density_from_rows(&parse_matrix(density)?)?;
        input = input.with_density(rho);
    }
    if let Some(statevector) = &args.statevector {
        let amplitudes = parse_complex_list(statevector)?;
        input = input.with_statevector(TwoQubitState::from_slice(&amplitudes, args.qubit)?);
    }

    Ok(input)
}

/// Execute the bloch command.
pub fn execute(args: &BlochArgs) -> Result<()> {
    let input = state_input(args)?;
    let source = input.source();
    let vector = input.resolve();

    print_vector(&vector);
    println!("  Source: {:?}", source);

    if let Some(path) = &args.svg {
        let scene = BlochScene::new(
            vector,
            SceneOptions {
                show_grid: args.show_grid,
                show_axes: args.show_axes,
            },
        );
        let svg = render_svg(&scene, &OrbitCamera::default(), args.size, args.size);
        std::fs::write(path, svg).with_context(|| format!("Failed to write {path}"))?;
        println!(
            "\n{} Rendered Bloch sphere to {}",
            style("✓").green().bold(),
            style(path).cyan()
        );
    }

    Ok(())
}

fn print_vector(vector: &BlochVector) {
    let (theta, phi) = vector.spherical();

    println!("{}", style("Bloch vector").bold());
    println!(
        "  (x, y, z) = ({:.4}, {:.4}, {:.4})",
        vector.x(),
        vector.y(),
        vector.z()
    );
    println!("  |r|       = {:.4}", vector.length());
    println!(
        "  θ = {:.4} rad, φ = {:.4} rad",
        style(theta).yellow(),
        style(phi).yellow()
    );
    if let Some(label) = vector.label() {
        println!("  State: {}", style(label).cyan());
    }
}
