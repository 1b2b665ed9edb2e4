//! Helpers shared by the commands.

use std::path::Path;

use anyhow::{Context, Result};
use num_complex::Complex64;
use qforge_ir::CircuitExport;

/// Read an exported circuit from disk.
pub fn load_circuit(path: &str) -> Result<CircuitExport> {
    let source = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    CircuitExport::from_json(&source).with_context(|| format!("Failed to parse circuit {path}"))
}

/// Write `contents` to `path`, or print them when no path is given.
pub fn write_output(contents: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(Path::new(path), contents)
            .with_context(|| format!("Failed to write {path}")),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}

/// Parse a complex number such as `0.5`, `2i` or `0.5-0.5i`.
pub fn parse_complex(text: &str) -> Result<Complex64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .parse::<Complex64>()
        .map_err(|_| anyhow::anyhow!("Invalid complex number: '{text}'"))
}

/// Parse a comma-separated list of complex numbers.
pub fn parse_complex_list(text: &str) -> Result<Vec<Complex64>> {
    text.split(',').map(parse_complex).collect()
}

/// Parse matrix rows separated by `;`, entries by `,`.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<Complex64>>> {
    text.split(';').map(parse_complex_list).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complex() {
        assert_eq!(parse_complex("0.5").unwrap(), Complex64::new(0.5, 0.0));
        assert_eq!(parse_complex("2i").unwrap(), Complex64::new(0.0, 2.0));
        assert_eq!(parse_complex(" 0.5 - 0.25i ").unwrap(), Complex64::new(0.5, -0.25));
        assert!(parse_complex("half").is_err());
    }

    #[test]
    fn test_parse_matrix() {
        let rows = parse_matrix("0.5,0.5;0.5,0.5").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 2));
        assert_eq!(rows[1][0], Complex64::new(0.5, 0.0));
    }

    #[test]
    fn test_load_missing_circuit() {
        let err = load_circuit("/nonexistent/circuit.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
