//! Qforge Command-Line Interface
//!
//! Drives the circuit builder headless: simulate an exported circuit,
//! export it as JSON or a Qiskit script, or project a qubit state onto the
//! Bloch sphere.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{bloch, export, run, version};

/// Qforge - visual quantum circuit builder, from the terminal
#[derive(Parser, Debug)]
#[command(name = "qforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate an exported circuit and print the raw results
    Run {
        /// Circuit JSON file (as exported by the builder)
        input: String,

        /// Configuration file (YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Simulation endpoint (overrides configuration)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Number of shots (overrides configuration)
        #[arg(short, long)]
        shots: Option<u32>,

        /// Write results to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Project a single-qubit state onto the Bloch sphere
    Bloch {
        /// Amplitude of |0⟩ (e.g. 0.7071, 0.5+0.5i)
        #[arg(long, requires = "beta")]
        alpha: Option<String>,

        /// Amplitude of |1⟩
        #[arg(long, requires = "alpha")]
        beta: Option<String>,

        /// 2x2 density matrix, rows separated by ';' (e.g. "0.5,0.5;0.5,0.5")
        #[arg(long)]
        density: Option<String>,

        /// Two-qubit statevector a00,a01,a10,a11
        #[arg(long)]
        statevector: Option<String>,

        /// Qubit of the statevector to project (0 or 1)
        #[arg(long, default_value = "0")]
        qubit: u32,

        /// Write an SVG rendering to this file
        #[arg(long)]
        svg: Option<String>,

        /// SVG width and height in pixels
        #[arg(long, default_value = "320")]
        size: u32,

        /// Hide latitude/longitude rings
        #[arg(long)]
        no_grid: bool,

        /// Hide the labelled axes
        #[arg(long)]
        no_axes: bool,
    },

    /// Convert an exported circuit to another format
    Export {
        /// Circuit JSON file
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Qiskit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            input,
            config,
            endpoint,
            shots,
            output,
        } => {
            run::execute(
                &input,
                config.as_deref(),
                endpoint.as_deref(),
                shots,
                output.as_deref(),
            )
            .await
        }

        Commands::Bloch {
            alpha,
            beta,
            density,
            statevector,
            qubit,
            svg,
            size,
            no_grid,
            no_axes,
        } => bloch::execute(&bloch::BlochArgs {
            alpha,
            beta,
            density,
            statevector,
            qubit,
            svg,
            size,
            show_grid: !no_grid,
            show_axes: !no_axes,
        }),

        Commands::Export {
            input,
            format,
            output,
        } => export::execute(&input, format == ExportFormat::Qiskit, output.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
