//! CLI workflow tests.
//!
//! The CLI is a binary crate, so these tests drive the same library calls
//! the commands make: load a circuit file, export it, project a state.

// ============================================================================
// Circuit files
// ============================================================================

mod circuit_file_tests {
    use qforge_ir::export::to_qiskit;
    use qforge_ir::{CircuitExport, CircuitState, GateKind, Position, QubitRefs};

    /// Equivalent to commands::common::load_circuit
    fn load_circuit(path: &std::path::Path) -> anyhow::Result<CircuitExport> {
        let source = std::fs::read_to_string(path)?;
        Ok(CircuitExport::from_json(&source)?)
    }

    fn bell() -> CircuitState {
        let state = CircuitState::new().add_qubit(0).unwrap().add_qubit(1).unwrap();
        let (state, _) = state.add_gate(GateKind::H, Position::new(150.0, 100.0), QubitRefs::single(0));
        let (state, _) = state.add_gate(
            GateKind::Cnot,
            Position::new(250.0, 100.0),
            QubitRefs::controlled(Some(0), Some(1)),
        );
        state
    }

    fn write_bell(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("bell.json");
        let json = CircuitExport::from_state(&bell()).to_json_pretty().unwrap();
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_saved_circuit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bell(&dir);

        let state = load_circuit(&path).unwrap().into_state().unwrap();
        assert_eq!(state.num_qubits(), 2);
        assert_eq!(state.gates().len(), 2);
        assert_eq!(state.gates()[1].kind, GateKind::Cnot);
    }

    #[test]
    fn test_export_qiskit_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bell(&dir);

        let code = to_qiskit(&load_circuit(&path).unwrap());
        assert!(code.contains("qc.h(0)"));
        assert!(code.contains("qc.cx(0, 1)"));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_circuit(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_circuit(std::path::Path::new("/nonexistent/bell.json")).is_err());
    }
}

// ============================================================================
// Bloch projection
// ============================================================================

mod bloch_tests {
    use num_complex::Complex64;
    use qforge_bloch::{
        BlochScene, OrbitCamera, SceneOptions, StateInput, TwoQubitState, density_from_rows,
        render_svg,
    };

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_amplitude_arguments() {
        let alpha: Complex64 = "0.7071067811865476".parse().unwrap();
        let beta: Complex64 = "0.7071067811865476".parse().unwrap();
        let v = StateInput::new().with_amplitudes(alpha, beta).resolve();
        assert!((v.x() - 1.0).abs() < 1e-9);
        assert_eq!(v.label(), Some("|+⟩"));
    }

    #[test]
    fn test_density_argument() {
        let rho = density_from_rows(&[vec![c(0.5), c(0.0)], vec![c(0.0), c(0.5)]]).unwrap();
        let v = StateInput::new().with_density(rho).resolve();
        assert!(v.length() < 1e-9);
        assert_eq!(v.label(), Some("mixed"));
    }

    #[test]
    fn test_statevector_argument() {
        // |10⟩: first qubit is |1⟩, second is |0⟩
        let amplitudes = [c(0.0), c(0.0), c(1.0), c(0.0)];
        let first = TwoQubitState::from_slice(&amplitudes, 0).unwrap();
        let second = TwoQubitState::from_slice(&amplitudes, 1).unwrap();

        let z0 = StateInput::new().with_statevector(first).resolve().z();
        let z1 = StateInput::new().with_statevector(second).resolve().z();
        assert!((z0 - z1).abs() > 1.0);
    }

    #[test]
    fn test_svg_size_argument() {
        let scene = BlochScene::new(StateInput::new().resolve(), SceneOptions::default());
        let svg = render_svg(&scene, &OrbitCamera::default(), 200, 200);
        assert!(svg.contains("width=\"200\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
