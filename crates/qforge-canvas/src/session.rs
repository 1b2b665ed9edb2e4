//! Per-element drag sessions.
//!
//! Each session follows `Idle → Dragging → Idle`: [`begin`] captures the
//! pointer origin and the element's starting position, every [`update`]
//! recomputes the position from the total pointer delta, and [`end`]
//! returns to idle. An idle session never touches the circuit.
//!
//! [`begin`]: WireDragSession::begin
//! [`update`]: WireDragSession::update
//! [`end`]: WireDragSession::end

use qforge_ir::{CircuitState, GateId, Position, WireId};
use tracing::trace;

use crate::layout::CanvasLayout;
use crate::pointer::{Point, PointerButton};

/// Lifecycle phase of a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer position at press time.
        origin: Point,
        /// Element position at press time.
        start: Position,
        /// Whether any update moved the pointer away from `origin`.
        moved: bool,
    },
}

impl DragPhase {
    fn begin(origin: Point, start: Position) -> Self {
        DragPhase::Dragging {
            origin,
            start,
            moved: false,
        }
    }
}

/// What ended a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// The session was idle.
    NotDragging,
    /// Press and release without any movement.
    Click,
    /// The element was moved.
    Moved,
}

fn finish(phase: &mut DragPhase) -> DragEnd {
    let end = match *phase {
        DragPhase::Idle => DragEnd::NotDragging,
        DragPhase::Dragging { moved: false, .. } => DragEnd::Click,
        DragPhase::Dragging { moved: true, .. } => DragEnd::Moved,
    };
    *phase = DragPhase::Idle;
    end
}

// =============================================================================
// Wires
// =============================================================================

/// Vertical drag of one qubit wire.
#[derive(Debug, Clone, PartialEq)]
pub struct WireDragSession {
    wire: WireId,
    phase: DragPhase,
}

impl WireDragSession {
    pub fn new(wire: WireId) -> Self {
        Self {
            wire,
            phase: DragPhase::Idle,
        }
    }

    pub fn wire(&self) -> &WireId {
        &self.wire
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Start dragging. Ignored for non-primary buttons, unknown wires and
    /// sessions that are already dragging.
    pub fn begin(&mut self, state: &CircuitState, point: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary || self.is_dragging() {
            return false;
        }
        match state.wire_by_id(&self.wire) {
            Some(wire) => {
                self.phase = DragPhase::begin(point, Position::new(0.0, wire.y));
                true
            }
            None => false,
        }
    }

    /// Move the wire by the total pointer delta, clamped to the wire band.
    pub fn update(&mut self, state: &CircuitState, point: Point, layout: &CanvasLayout) -> Option<CircuitState> {
        let DragPhase::Dragging { origin, start, moved } = &mut self.phase else {
            return None;
        };
        let delta = point - *origin;
        *moved |= !delta.is_zero();

        let y = layout.clamp_wire_y(start.y + delta.dy);
        trace!(wire = %self.wire, y, "wire drag");
        Some(state.move_wire(&self.wire, y))
    }

    /// Stop dragging.
    pub fn end(&mut self) -> DragEnd {
        finish(&mut self.phase)
    }
}

// =============================================================================
// Gates
// =============================================================================

/// Drag of one placed gate along its wire.
#[derive(Debug, Clone, PartialEq)]
pub struct GateDragSession {
    gate: GateId,
    phase: DragPhase,
}

impl GateDragSession {
    pub fn new(gate: GateId) -> Self {
        Self {
            gate,
            phase: DragPhase::Idle,
        }
    }

    pub fn gate(&self) -> GateId {
        self.gate
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Start dragging. Ignored for non-primary buttons, unknown gates and
    /// sessions that are already dragging.
    pub fn begin(&mut self, state: &CircuitState, point: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary || self.is_dragging() {
            return false;
        }
        match state.gate(self.gate) {
            Some(gate) => {
                self.phase = DragPhase::begin(point, gate.position);
                true
            }
            None => false,
        }
    }

    /// Move the gate by the total pointer delta.
    ///
    /// `x` stays out of the label gutter; `y` stays within the layout's
    /// play of the owning wire's current position, so the gate never
    /// changes wires. Without an owning wire the start `y` is the anchor.
    pub fn update(&mut self, state: &CircuitState, point: Point, layout: &CanvasLayout) -> Option<CircuitState> {
        let DragPhase::Dragging { origin, start, moved } = &mut self.phase else {
            return None;
        };
        let gate = state.gate(self.gate)?;
        let delta = point - *origin;
        *moved |= !delta.is_zero();

        let anchor = gate
            .refs
            .primary()
            .and_then(|index| state.wire(index))
            .map_or(start.y, |wire| wire.y);
        let position = Position::new(
            layout.clamp_gate_x(start.x + delta.dx),
            layout.clamp_gate_y(start.y + delta.dy, anchor),
        );
        trace!(gate = %self.gate, x = position.x, y = position.y, "gate drag");
        Some(state.move_gate(self.gate, position))
    }

    /// Stop dragging.
    pub fn end(&mut self) -> DragEnd {
        finish(&mut self.phase)
    }
}
