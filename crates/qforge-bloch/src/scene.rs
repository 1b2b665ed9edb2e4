//! Renderable primitives of the Bloch sphere view.
//!
//! The scene is backend-agnostic: it lists what to draw in Bloch
//! coordinates (`+z` is `|0⟩`) and leaves rasterization to [`crate::svg`]
//! or any other host.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::math::Vec3;
use crate::projection::BlochVector;

/// Points per reference ring.
pub const RING_SEGMENTS: usize = 64;
/// Number of latitude rings.
pub const PARALLEL_COUNT: usize = 8;
/// Number of longitude rings.
pub const MERIDIAN_COUNT: usize = 12;
/// Half-length of each drawn axis.
pub const AXIS_LENGTH: f64 = 1.2;
/// Distance of axis labels from the origin.
pub const LABEL_DISTANCE: f64 = 1.35;
/// Opacity of the sphere shell and the reference rings.
pub const SHELL_OPACITY: f64 = 0.25;

/// Which optional layers to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    pub show_grid: bool,
    pub show_axes: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
        }
    }
}

/// Simple RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(220, 38, 38);
    pub const GREEN: Rgb = Rgb(22, 163, 74);
    pub const BLUE: Rgb = Rgb(37, 99, 235);
    pub const SHELL: Rgb = Rgb(0xcc, 0xcc, 0xcc);

    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A polyline in scene space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    pub color: Rgb,
    pub width: f64,
    pub opacity: f64,
}

/// A text label anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub anchor: Vec3,
    pub color: Rgb,
}

/// One coordinate axis and its labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub line: Polyline,
    pub labels: Vec<Label>,
}

/// The state arrow from the origin to the clamped Bloch vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub tip: Vec3,
    pub color: Rgb,
}

/// Everything needed to draw one Bloch sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlochScene {
    pub options: SceneOptions,
    pub vector: BlochVector,
    pub sphere_radius: f64,
    pub sphere_opacity: f64,
    pub parallels: Vec<Polyline>,
    pub meridians: Vec<Polyline>,
    pub axes: Vec<Axis>,
    pub arrow: Arrow,
}

impl BlochScene {
    /// Build the scene for a projected vector.
    pub fn new(vector: BlochVector, options: SceneOptions) -> Self {
        let (parallels, meridians) = if options.show_grid {
            (parallels(), meridians())
        } else {
            (Vec::new(), Vec::new())
        };
        let axes = if options.show_axes { axes() } else { Vec::new() };

        Self {
            options,
            vector,
            sphere_radius: 1.0,
            sphere_opacity: SHELL_OPACITY,
            parallels,
            meridians,
            axes,
            arrow: Arrow {
                tip: vector.render_tip(),
                color: Rgb::BLACK,
            },
        }
    }

    /// Iterate over every line in the scene, rings first.
    pub fn lines(&self) -> impl Iterator<Item = &Polyline> {
        self.parallels
            .iter()
            .chain(self.meridians.iter())
            .chain(self.axes.iter().map(|a| &a.line))
    }

    /// Iterate over every label in the scene.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.axes.iter().flat_map(|a| a.labels.iter())
    }
}

fn ring_line(points: Vec<Vec3>) -> Polyline {
    Polyline {
        points,
        color: Rgb::SHELL,
        width: 1.0,
        opacity: SHELL_OPACITY,
    }
}

/// Latitude rings at heights `1 - 2r` for `r = 1/9 .. 8/9`.
fn parallels() -> Vec<Polyline> {
    (0..PARALLEL_COUNT)
        .map(|i| {
            let r = (i as f64 + 1.0) / 9.0;
            let height = 1.0 - 2.0 * r;
            let radius = (1.0 - height * height).sqrt();
            let points = (0..RING_SEGMENTS)
                .map(|j| {
                    let t = j as f64 / (RING_SEGMENTS - 1) as f64 * TAU;
                    Vec3::new(t.cos() * radius, t.sin() * radius, height)
                })
                .collect();
            ring_line(points)
        })
        .collect()
}

/// Half great circles from the south pole to the north pole.
fn meridians() -> Vec<Polyline> {
    (0..MERIDIAN_COUNT)
        .map(|k| {
            let phi = k as f64 / MERIDIAN_COUNT as f64 * TAU;
            let points = (0..RING_SEGMENTS)
                .map(|j| {
                    let t = -PI / 2.0 + j as f64 / (RING_SEGMENTS - 1) as f64 * PI;
                    Vec3::new(t.cos() * phi.cos(), t.cos() * phi.sin(), t.sin())
                })
                .collect();
            ring_line(points)
        })
        .collect()
}

fn axis(direction: Vec3, color: Rgb, labels: Vec<(&str, Vec3)>) -> Axis {
    Axis {
        line: Polyline {
            points: vec![direction * -AXIS_LENGTH, direction * AXIS_LENGTH],
            color,
            width: 1.5,
            opacity: 1.0,
        },
        labels: labels
            .into_iter()
            .map(|(text, anchor)| Label {
                text: text.to_string(),
                anchor,
                color,
            })
            .collect(),
    }
}

fn axes() -> Vec<Axis> {
    vec![
        axis(Vec3::X, Rgb::RED, vec![("+X", Vec3::X * LABEL_DISTANCE)]),
        axis(Vec3::Y, Rgb::GREEN, vec![("+Y", Vec3::Y * LABEL_DISTANCE)]),
        axis(
            Vec3::Z,
            Rgb::BLUE,
            vec![
                ("+Z (|0⟩)", Vec3::Z * LABEL_DISTANCE),
                ("-Z (|1⟩)", Vec3::Z * -LABEL_DISTANCE),
            ],
        ),
    ]
}
