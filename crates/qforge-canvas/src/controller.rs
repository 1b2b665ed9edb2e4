//! Routes pointer input to drag sessions and palette drops.

use qforge_ir::{CircuitState, GateId, GateKind, WireId};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::layout::CanvasLayout;
use crate::palette::{self, DropOutcome};
use crate::pointer::{Point, PointerButton};
use crate::session::{DragEnd, GateDragSession, WireDragSession};

/// The element under the pointer at press time. Hit testing belongs to the
/// host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// A wire's label handle.
    Wire(WireId),
    /// A placed gate's body.
    Gate(GateId),
}

/// Canvas interaction controller.
///
/// Sessions exist only between a press and the following release, one per
/// element being dragged. The controller never owns the circuit: each call
/// takes the current state and, when something changed, returns the next
/// one for the caller to adopt.
#[derive(Debug, Default)]
pub struct CanvasController {
    layout: CanvasLayout,
    wires: FxHashMap<WireId, WireDragSession>,
    gates: FxHashMap<GateId, GateDragSession>,
}

impl CanvasController {
    pub fn new(layout: CanvasLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Number of live drag sessions.
    pub fn active_sessions(&self) -> usize {
        self.wires.len() + self.gates.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_sessions() > 0
    }

    /// Pointer pressed on `target`. Returns whether a drag started.
    pub fn press(
        &mut self,
        state: &CircuitState,
        target: HitTarget,
        point: Point,
        button: PointerButton,
    ) -> bool {
        match target {
            HitTarget::Wire(id) => {
                let mut session = WireDragSession::new(id.clone());
                let started = session.begin(state, point, button);
                if started {
                    debug!(wire = %id, "wire drag started");
                    self.wires.insert(id, session);
                }
                started
            }
            HitTarget::Gate(id) => {
                let mut session = GateDragSession::new(id);
                let started = session.begin(state, point, button);
                if started {
                    debug!(gate = %id, "gate drag started");
                    self.gates.insert(id, session);
                }
                started
            }
        }
    }

    /// Pointer moved. Every live session is updated; returns the new state
    /// if any session applied a move.
    pub fn pointer_move(&mut self, state: &CircuitState, point: Point) -> Option<CircuitState> {
        let layout = self.layout;
        let mut current: Option<CircuitState> = None;

        for session in self.wires.values_mut() {
            let base = current.as_ref().unwrap_or(state);
            if let Some(next) = session.update(base, point, &layout) {
                current = Some(next);
            }
        }
        for session in self.gates.values_mut() {
            let base = current.as_ref().unwrap_or(state);
            if let Some(next) = session.update(base, point, &layout) {
                current = Some(next);
            }
        }
        current
    }

    /// Pointer released. All sessions end and are dropped. A gate that was
    /// pressed and released without moving toggles its selection.
    pub fn release(&mut self, state: &CircuitState) -> Option<CircuitState> {
        let mut current: Option<CircuitState> = None;

        for (_, mut session) in self.wires.drain() {
            session.end();
        }
        for (id, mut session) in self.gates.drain() {
            if session.end() == DragEnd::Click {
                let base = current.as_ref().unwrap_or(state);
                current = Some(base.select_gate(id));
                debug!(gate = %id, "gate selection toggled");
            }
        }
        current
    }

    /// A palette gate was dropped at `point`.
    pub fn drop_gate(
        &self,
        state: &CircuitState,
        kind: GateKind,
        point: Point,
    ) -> (CircuitState, DropOutcome) {
        palette::drop_gate(state, kind, point, &self.layout)
    }

    /// Delete the selected gate, if any.
    pub fn delete_selected(&self, state: &CircuitState) -> Option<CircuitState> {
        state.selected_gate().map(|id| state.delete_gate(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qforge_ir::Position;

    fn circuit() -> CircuitState {
        CircuitState::new().add_qubit(0).unwrap().add_qubit(1).unwrap()
    }

    #[test]
    fn test_drag_gate_then_release() {
        let mut controller = CanvasController::default();
        let (state, _) = controller.drop_gate(&circuit(), GateKind::H, Point::new(150.0, 100.0));
        let id = state.gates()[0].id;

        assert!(controller.press(&state, HitTarget::Gate(id), Point::new(150.0, 100.0), PointerButton::Primary));
        let state = controller.pointer_move(&state, Point::new(300.0, 100.0)).unwrap();
        let state = controller.release(&state).unwrap_or(state);

        assert!(!controller.is_dragging());
        assert_eq!(state.gate(id).unwrap().position, Position::new(300.0, 100.0));
        assert_eq!(state.selected_gate(), None);
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut controller = CanvasController::default();
        let (state, _) = controller.drop_gate(&circuit(), GateKind::H, Point::new(150.0, 100.0));
        let id = state.gates()[0].id;
        let at = Point::new(150.0, 100.0);

        controller.press(&state, HitTarget::Gate(id), at, PointerButton::Primary);
        let state = controller.release(&state).unwrap();
        assert_eq!(state.selected_gate(), Some(id));

        controller.press(&state, HitTarget::Gate(id), at, PointerButton::Primary);
        let state = controller.release(&state).unwrap();
        assert_eq!(state.selected_gate(), None);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut controller = CanvasController::default();
        let (state, _) = controller.drop_gate(&circuit(), GateKind::H, Point::new(150.0, 100.0));
        let (state, _) = controller.drop_gate(&state, GateKind::X, Point::new(150.0, 180.0));
        let (a, b) = (state.gates()[0].id, state.gates()[1].id);

        controller.press(&state, HitTarget::Gate(a), Point::new(150.0, 100.0), PointerButton::Primary);
        let state = controller.release(&state).unwrap();
        controller.press(&state, HitTarget::Gate(b), Point::new(150.0, 180.0), PointerButton::Primary);
        let state = controller.release(&state).unwrap();
        assert_eq!(state.selected_gate(), Some(b));

        let state = controller.delete_selected(&state).unwrap();
        assert!(state.gate(b).is_none());
        assert_eq!(state.selected_gate(), None);
        assert!(controller.delete_selected(&state).is_none());
    }

    #[test]
    fn test_moves_after_release_are_ignored() {
        let mut controller = CanvasController::default();
        let state = circuit();
        let wire = WireId::for_index(0);

        controller.press(&state, HitTarget::Wire(wire), Point::new(30.0, 100.0), PointerButton::Primary);
        let state = controller.pointer_move(&state, Point::new(30.0, 140.0)).unwrap();
        assert!(controller.release(&state).is_none());
        assert!(controller.pointer_move(&state, Point::new(30.0, 400.0)).is_none());
        assert_eq!(state.wire(0).unwrap().y, 140.0);
    }

    #[test]
    fn test_secondary_press_starts_nothing() {
        let mut controller = CanvasController::default();
        let state = circuit();
        assert!(!controller.press(
            &state,
            HitTarget::Wire(WireId::for_index(1)),
            Point::new(30.0, 180.0),
            PointerButton::Secondary
        ));
        assert_eq!(controller.active_sessions(), 0);
    }

    #[test]
    fn test_custom_layout() {
        let layout = CanvasLayout {
            snap_tolerance: 10.0,
            ..CanvasLayout::default()
        };
        let controller = CanvasController::new(layout);
        let (_, outcome) = controller.drop_gate(&circuit(), GateKind::T, Point::new(200.0, 125.0));
        assert_eq!(outcome, DropOutcome::TooFar { distance: 25.0 });
    }
}
