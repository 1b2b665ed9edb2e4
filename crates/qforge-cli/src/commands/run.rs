//! Run command implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use qforge_builder::{BuilderConfig, CircuitBuilder, HttpSimulationClient, Notification};

use super::common::{load_circuit, write_output};

/// Execute the run command.
pub async fn execute(
    input: &str,
    config_path: Option<&str>,
    endpoint: Option<&str>,
    shots: Option<u32>,
    output: Option<&str>,
) -> Result<()> {
    println!("{} Loading circuit: {}", style("→").cyan().bold(), style(input).green());

    let state = load_circuit(input)?.into_state()?;

    println!(
        "  Qubits: {}, Gates: {}",
        style(state.num_qubits()).yellow(),
        style(state.gates().len()).yellow()
    );

    let mut config = BuilderConfig::load(config_path.map(Path::new))?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint.to_string();
    }
    if let Some(shots) = shots {
        config.shots = shots;
    }
    config.validate()?;

    println!(
        "\n{} Simulating on {} ({} shots)",
        style("→").cyan().bold(),
        style(&config.endpoint).cyan(),
        config.shots
    );

    let client = HttpSimulationClient::from_config(&config)?;
    let mut builder = CircuitBuilder::new(Arc::new(client))
        .with_shots(config.shots)
        .with_state(state);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message("Waiting for results...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let (outcome, notes) = simulate(&mut builder).await;
    spinner.finish_and_clear();

    for note in &notes {
        let mark = if note.is_destructive() {
            style("✗").red().bold()
        } else {
            style("✓").green().bold()
        };
        println!("{} {}", mark, note);
    }

    let rendered = outcome?;

    println!("\n{}", style("Results:").bold());
    write_output(&rendered, output)?;

    Ok(())
}

/// Run the simulation and collect the notifications it raised, whether or
/// not it succeeded. On success the results are rendered as pretty JSON.
async fn simulate(builder: &mut CircuitBuilder) -> (Result<String>, Vec<Notification>) {
    let outcome = match builder.run_simulation().await {
        Ok(view) => serde_json::to_string_pretty(&view.results).map_err(anyhow::Error::from),
        Err(e) => Err(e.into()),
    };
    (outcome, builder.drain_notifications())
}
