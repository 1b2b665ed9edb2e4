//! Bloch vector projection.
//!
//! Maps single-qubit state descriptions onto the Bloch ball:
//!
//! | Input | x | y | z |
//! |-------|---|---|---|
//! | `α|0⟩ + β|1⟩` | `2·Re(α*β)` | `2·Im(α*β)` | `|α|² − |β|²` |
//! | `ρ` | `2·Re(ρ01)` | `0` | `ρ00 − ρ11` |

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::math::{DensityMatrix, Vec3, normalize_pair};

/// Tolerance used when naming well-known states.
const LABEL_TOLERANCE: f64 = 0.05;

/// A point in the Bloch ball. Pure states lie on the unit sphere, mixed
/// states inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector(pub Vec3);

impl BlochVector {
    /// The `|0⟩` pole.
    pub const ZERO_STATE: BlochVector = BlochVector(Vec3::Z);

    /// Create from coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Length of the vector (1 for pure states).
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    /// Arrow tip used for rendering: vectors longer than 1 are rescaled to
    /// exactly 1, shorter ones are kept at their true length.
    pub fn render_tip(&self) -> Vec3 {
        self.0.clamp_to_unit()
    }

    /// Polar angle θ (from `+z`) and azimuth φ (from `+x`), in radians.
    ///
    /// The origin has no direction and reports `(π/2, 0)`.
    pub fn spherical(&self) -> (f64, f64) {
        let r = self.length();
        if r < 1e-12 {
            return (std::f64::consts::FRAC_PI_2, 0.0);
        }
        let theta = (self.0.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.0.y.atan2(self.0.x);
        (theta, phi)
    }

    /// Name of the nearest well-known state, if the vector is close to one.
    pub fn label(&self) -> Option<&'static str> {
        let tip = self.render_tip();
        let named = [
            (Vec3::Z, "|0⟩"),
            (Vec3::Z * -1.0, "|1⟩"),
            (Vec3::X, "|+⟩"),
            (Vec3::X * -1.0, "|−⟩"),
            (Vec3::Y, "|+i⟩"),
            (Vec3::Y * -1.0, "|−i⟩"),
        ];
        if tip.norm() < LABEL_TOLERANCE {
            return Some("mixed");
        }
        named
            .iter()
            .find(|(v, _)| tip.approx_eq(*v, LABEL_TOLERANCE))
            .map(|(_, name)| *name)
    }
}

impl Default for BlochVector {
    fn default() -> Self {
        Self::ZERO_STATE
    }
}

/// Project a pure state `α|0⟩ + β|1⟩`. The pair is normalized first; a zero
/// pair projects to the origin.
pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> BlochVector {
    let (a, b) = normalize_pair(alpha, beta);
    let a_star_b = a.conj() * b;
    let b_star_a = b.conj() * a;

    BlochVector::new(
        a_star_b.re + b_star_a.re,
        a_star_b.im - b_star_a.im,
        a.norm_sqr() - b.norm_sqr(),
    )
}

/// Project a density matrix.
///
/// Only the real part of `ρ01` enters the result and `y` is always 0. This
/// is exact for real density matrices only; states with a complex
/// off-diagonal (e.g. `|+i⟩⟨+i|`) lose their y component.
pub fn from_density(rho: &DensityMatrix) -> BlochVector {
    BlochVector::new(
        2.0 * rho.rho01().re,
        0.0,
        rho.rho00().re - rho.rho11().re,
    )
}
