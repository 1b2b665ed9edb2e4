//! Bloch sphere projection for single-qubit states.
//!
//! Converts a state description into a point of the Bloch ball and builds a
//! renderable scene around it:
//!
//! - [`StateInput`] collects the possible descriptions (amplitude pair,
//!   2×2 density matrix, two-qubit statevector plus the qubit to keep) and
//!   resolves them in that order
//! - [`projection`] holds the formulas
//! - [`BlochScene`], [`OrbitCamera`] and [`render_svg`] draw the result
//!
//! ```rust
//! use num_complex::Complex64;
//! use qforge_bloch::StateInput;
//!
//! let h = std::f64::consts::FRAC_1_SQRT_2;
//! let v = StateInput::new()
//!     .with_amplitudes(Complex64::new(h, 0.0), Complex64::new(h, 0.0))
//!     .resolve();
//! assert!((v.x() - 1.0).abs() < 1e-12);
//! assert_eq!(v.label(), Some("|+⟩"));
//! ```

pub mod camera;
pub mod error;
pub mod math;
pub mod projection;
pub mod scene;
pub mod state;
pub mod svg;

pub use camera::OrbitCamera;
pub use error::{BlochError, BlochResult};
pub use math::{DensityMatrix, QubitSelector, Vec3, partial_trace};
pub use projection::{BlochVector, from_amplitudes, from_density};
pub use scene::{BlochScene, SceneOptions};
pub use state::{StateInput, StateSource, TwoQubitState, density_from_rows};
pub use svg::render_svg;
