//! Canvas geometry constants.

use serde::{Deserialize, Serialize};

/// Geometry rules applied while editing.
///
/// The defaults match a canvas whose wire labels occupy the first 100
/// units of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasLayout {
    /// Lowest allowed wire coordinate.
    pub wire_min_y: f64,
    /// Highest allowed wire coordinate.
    pub wire_max_y: f64,
    /// Smallest allowed gate `x`; the space before it holds wire labels.
    pub label_gutter: f64,
    /// How far a dragged gate may leave its wire vertically.
    pub gate_play: f64,
    /// Maximum distance between a palette drop and the nearest wire.
    pub snap_tolerance: f64,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            wire_min_y: 50.0,
            wire_max_y: 800.0,
            label_gutter: 100.0,
            gate_play: 5.0,
            snap_tolerance: 40.0,
        }
    }
}

impl CanvasLayout {
    /// Keep a wire inside the vertical band.
    pub fn clamp_wire_y(&self, y: f64) -> f64 {
        y.clamp(self.wire_min_y, self.wire_max_y)
    }

    /// Keep a gate out of the label gutter.
    pub fn clamp_gate_x(&self, x: f64) -> f64 {
        x.max(self.label_gutter)
    }

    /// Keep a gate within `gate_play` of its wire.
    pub fn clamp_gate_y(&self, y: f64, wire_y: f64) -> f64 {
        y.clamp(wire_y - self.gate_play, wire_y + self.gate_play)
    }

    /// Whether a vertical distance is close enough to snap.
    pub fn within_snap(&self, distance: f64) -> bool {
        distance <= self.snap_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_band() {
        let layout = CanvasLayout::default();
        assert_eq!(layout.clamp_wire_y(10.0), 50.0);
        assert_eq!(layout.clamp_wire_y(900.0), 800.0);
        assert_eq!(layout.clamp_wire_y(300.0), 300.0);
    }

    #[test]
    fn test_gate_clamps() {
        let layout = CanvasLayout::default();
        assert_eq!(layout.clamp_gate_x(20.0), 100.0);
        assert_eq!(layout.clamp_gate_x(250.0), 250.0);
        assert_eq!(layout.clamp_gate_y(130.0, 100.0), 105.0);
        assert_eq!(layout.clamp_gate_y(60.0, 100.0), 95.0);
    }

    #[test]
    fn test_snap_boundary_is_inclusive() {
        let layout = CanvasLayout::default();
        assert!(layout.within_snap(40.0));
        assert!(!layout.within_snap(40.01));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let layout: CanvasLayout = serde_yaml_ng::from_str("snap_tolerance: 25.0\n").unwrap();
        assert_eq!(layout.snap_tolerance, 25.0);
        assert_eq!(layout.label_gutter, 100.0);
    }
}
