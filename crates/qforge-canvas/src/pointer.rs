//! Pointer input.

use std::ops::Sub;

/// A pointer coordinate in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Displacement between two pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    /// Whether the pointer actually moved.
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, rhs: Point) -> Delta {
        Delta {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

/// Pointer buttons. Only [`PointerButton::Primary`] starts a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

impl PointerButton {
    /// Map a DOM-style button number (0 = primary).
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => PointerButton::Primary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Auxiliary,
        }
    }
}
