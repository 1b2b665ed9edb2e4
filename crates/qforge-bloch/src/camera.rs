//! Orbit camera around the Bloch sphere.
//!
//! The camera only affects how the scene is viewed; projection results do
//! not depend on it.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Closest allowed orbit distance.
pub const MIN_DISTANCE: f64 = 1.8;
/// Farthest allowed orbit distance.
pub const MAX_DISTANCE: f64 = 6.0;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_DEGREES: f64 = 45.0;

const ELEVATION_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 1e-3;
const NEAR_PLANE: f64 = 1e-3;

/// A point projected to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction; larger is farther away.
    pub depth: f64,
}

/// Camera orbiting the origin. Panning is not supported, the camera always
/// looks at the sphere's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Angle around `+z`, from `+x` toward `+y`, in radians.
    pub azimuth: f64,
    /// Angle above the equator, in radians.
    pub elevation: f64,
    pub distance: f64,
    pub fov_degrees: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(Vec3::new(2.4, 2.4, 2.2))
    }
}

impl OrbitCamera {
    /// Place the camera at `eye`, looking at the origin.
    pub fn from_position(eye: Vec3) -> Self {
        let distance = eye.norm().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let horizontal = (eye.x * eye.x + eye.y * eye.y).sqrt();
        Self {
            azimuth: eye.y.atan2(eye.x),
            elevation: eye.z.atan2(horizontal).clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT),
            distance,
            fov_degrees: DEFAULT_FOV_DEGREES,
        }
    }

    /// Eye position in scene coordinates.
    pub fn position(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3::new(cos_el * cos_az, cos_el * sin_az, sin_el) * self.distance
    }

    /// Rotate around the sphere.
    pub fn orbit(&mut self, delta_azimuth: f64, delta_elevation: f64) {
        self.azimuth = (self.azimuth + delta_azimuth).rem_euclid(std::f64::consts::TAU);
        self.elevation = (self.elevation + delta_elevation).clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Multiply the distance by `factor`, staying within the allowed range.
    pub fn zoom(&mut self, factor: f64) {
        self.set_distance(self.distance * factor);
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Orthonormal `(right, up, forward)` basis of the view.
    pub fn view_basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (Vec3::ZERO - self.position()).normalized();
        let right = forward.cross(Vec3::Z).normalized();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Perspective-project a scene point onto a `width`×`height` viewport
    /// (origin top-left). Points behind the camera yield `None`.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<ScreenPoint> {
        let eye = self.position();
        let (right, up, forward) = self.view_basis();

        let rel = point - eye;
        let depth = rel.dot(forward);
        if depth <= NEAR_PLANE {
            return None;
        }

        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        let ndc_x = focal * rel.dot(right) / depth / aspect;
        let ndc_y = focal * rel.dot(up) / depth;

        Some(ScreenPoint {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            depth,
        })
    }
}
