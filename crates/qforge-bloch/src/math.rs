//! Complex arithmetic, vectors and single-qubit density matrices.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Normalize an amplitude pair by its joint norm.
///
/// A zero pair is returned unchanged (the norm is taken as 1).
pub fn normalize_pair(alpha: Complex64, beta: Complex64) -> (Complex64, Complex64) {
    let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
    let norm = if norm == 0.0 { 1.0 } else { norm };
    (alpha / norm, beta / norm)
}

/// A point or direction in 3D Bloch coordinates (`+z` is `|0⟩`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Origin.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// Unit X axis.
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Unit Y axis.
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Unit Z axis.
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Create a vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Dot product.
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Vec3 {
        let n = self.norm();
        if n == 0.0 { self } else { self * (1.0 / n) }
    }

    /// Rescale down to unit length if longer than 1; shorter vectors are
    /// returned unchanged.
    pub fn clamp_to_unit(self) -> Vec3 {
        let n = self.norm();
        if n > 1.0 { self * (1.0 / n) } else { self }
    }

    /// Whether every component is within `eps` of `other`.
    pub fn approx_eq(self, other: Vec3, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A 2×2 single-qubit density matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityMatrix {
    pub rho: [[Complex64; 2]; 2],
}

impl DensityMatrix {
    /// Create from the four entries.
    pub fn new(rho00: Complex64, rho01: Complex64, rho10: Complex64, rho11: Complex64) -> Self {
        Self {
            rho: [[rho00, rho01], [rho10, rho11]],
        }
    }

    /// Create from a real-valued matrix.
    pub fn from_real(rho: [[f64; 2]; 2]) -> Self {
        Self::new(
            Complex64::from(rho[0][0]),
            Complex64::from(rho[0][1]),
            Complex64::from(rho[1][0]),
            Complex64::from(rho[1][1]),
        )
    }

    /// The projector `|ψ⟩⟨ψ|` of a pure state (normalized first).
    pub fn from_pure(alpha: Complex64, beta: Complex64) -> Self {
        let (a, b) = normalize_pair(alpha, beta);
        Self::new(
            Complex64::from(a.norm_sqr()),
            a * b.conj(),
            b * a.conj(),
            Complex64::from(b.norm_sqr()),
        )
    }

    /// The maximally mixed state `I/2`.
    pub fn maximally_mixed() -> Self {
        Self::from_real([[0.5, 0.0], [0.0, 0.5]])
    }

    pub fn rho00(&self) -> Complex64 {
        self.rho[0][0]
    }

    pub fn rho01(&self) -> Complex64 {
        self.rho[0][1]
    }

    pub fn rho10(&self) -> Complex64 {
        self.rho[1][0]
    }

    pub fn rho11(&self) -> Complex64 {
        self.rho[1][1]
    }

    /// Trace of the matrix.
    pub fn trace(&self) -> Complex64 {
        self.rho00() + self.rho11()
    }

    /// Whether every entry is within `eps` of `other`.
    pub fn approx_eq(&self, other: &DensityMatrix, eps: f64) -> bool {
        self.rho
            .iter()
            .flatten()
            .zip(other.rho.iter().flatten())
            .all(|(a, b)| (a - b).norm() <= eps)
    }
}

/// Which qubit of a two-qubit register to keep when tracing out the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QubitSelector {
    /// The qubit labelled by the first bit of `|ij⟩`.
    #[default]
    First,
    /// The qubit labelled by the second bit of `|ij⟩`.
    Second,
}

impl QubitSelector {
    /// Numeric index of the selected qubit.
    pub fn index(self) -> u32 {
        match self {
            QubitSelector::First => 0,
            QubitSelector::Second => 1,
        }
    }
}

/// Reduce a two-qubit statevector `(a00, a01, a10, a11)` to the density
/// matrix of one qubit.
///
/// The off-diagonal element keeps only the real part of the partial-trace
/// sum: `ρ01 = Re(a00·a10*) + Re(a01·a11*)` for the first qubit and
/// `ρ01 = Re(a00·a01*) + Re(a10·a11*)` for the second.
pub fn partial_trace(amplitudes: &[Complex64; 4], keep: QubitSelector) -> DensityMatrix {
    let [a00, a01, a10, a11] = *amplitudes;

    let (rho00, rho11, rho01) = match keep {
        QubitSelector::First => (
            a00.norm_sqr() + a01.norm_sqr(),
            a10.norm_sqr() + a11.norm_sqr(),
            (a00 * a10.conj()).re + (a01 * a11.conj()).re,
        ),
        QubitSelector::Second => (
            a00.norm_sqr() + a10.norm_sqr(),
            a01.norm_sqr() + a11.norm_sqr(),
            (a00 * a01.conj()).re + (a10 * a11.conj()).re,
        ),
    };

    DensityMatrix::from_real([[rho00, rho01], [rho01, rho11]])
}
