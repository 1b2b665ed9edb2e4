//! Drop-to-place for gates dragged in from the palette.

use qforge_ir::{CircuitState, GateId, GateKind, Position, QubitRefs, QubitWire};
use tracing::debug;

use crate::layout::CanvasLayout;
use crate::pointer::Point;

/// Result of dropping a palette gate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// A gate was created on the wire with this index.
    Placed { gate: GateId, wire: u32 },
    /// The circuit has no wires.
    NoWires,
    /// The nearest wire is farther away than the snap tolerance.
    TooFar { distance: f64 },
}

impl DropOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, DropOutcome::Placed { .. })
    }
}

/// The wire closest to `y` and its vertical distance. Ties go to the lower
/// index.
pub fn nearest_wire(state: &CircuitState, y: f64) -> Option<(&QubitWire, f64)> {
    state
        .qubits()
        .iter()
        .map(|wire| (wire, (wire.y - y).abs()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Qubit references for a gate snapped onto wire `index`.
///
/// Every kind records the wire as its `qubit_index`. CNOT control and
/// target are not resolved from a drop.
pub fn drop_refs(index: u32) -> QubitRefs {
    QubitRefs::single(index)
}

/// Place a gate of `kind` where it was dropped.
///
/// The gate snaps to the nearest wire's `y` and stays out of the label
/// gutter. Drops beyond the snap tolerance leave the circuit unchanged.
pub fn drop_gate(
    state: &CircuitState,
    kind: GateKind,
    point: Point,
    layout: &CanvasLayout,
) -> (CircuitState, DropOutcome) {
    let Some((wire, distance)) = nearest_wire(state, point.y) else {
        return (state.clone(), DropOutcome::NoWires);
    };
    if !layout.within_snap(distance) {
        debug!(%kind, distance, "drop too far from any wire");
        return (state.clone(), DropOutcome::TooFar { distance });
    }

    let index = wire.index;
    let position = Position::new(layout.clamp_gate_x(point.x), wire.y);
    let (next, gate) = state.add_gate(kind, position, drop_refs(index));
    (next, DropOutcome::Placed { gate, wire: index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qforge_ir::WireId;

    fn two_wires() -> CircuitState {
        CircuitState::new().add_qubit(0).unwrap().add_qubit(1).unwrap()
    }

    #[test]
    fn test_drop_snaps_to_nearest_wire() {
        let layout = CanvasLayout::default();
        let (next, outcome) = drop_gate(&two_wires(), GateKind::X, Point::new(240.0, 170.0), &layout);

        let DropOutcome::Placed { gate, wire } = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        assert_eq!(wire, 1);
        let gate = next.gate(gate).unwrap();
        assert_eq!(gate.position, Position::new(240.0, 180.0));
        assert_eq!(gate.refs, QubitRefs::single(1));
    }

    #[test]
    fn test_drop_in_gutter_is_pushed_right() {
        let layout = CanvasLayout::default();
        let (next, outcome) = drop_gate(&two_wires(), GateKind::H, Point::new(30.0, 100.0), &layout);
        assert!(outcome.is_placed());
        assert_eq!(next.gates()[0].position.x, 100.0);
    }

    #[test]
    fn test_far_drop_is_rejected() {
        let layout = CanvasLayout::default();
        let state = two_wires();
        let (next, outcome) = drop_gate(&state, GateKind::H, Point::new(200.0, 260.0), &layout);
        assert_eq!(outcome, DropOutcome::TooFar { distance: 80.0 });
        assert_eq!(next, state);
    }

    #[test]
    fn test_drop_on_empty_canvas() {
        let layout = CanvasLayout::default();
        let (next, outcome) = drop_gate(&CircuitState::new(), GateKind::H, Point::new(200.0, 100.0), &layout);
        assert_eq!(outcome, DropOutcome::NoWires);
        assert!(next.gates().is_empty());
    }

    #[test]
    fn test_cnot_drop_records_nearest_wire() {
        let layout = CanvasLayout::default();
        let state = two_wires().add_qubit(2).unwrap();
        let (next, outcome) = drop_gate(&state, GateKind::Cnot, Point::new(200.0, 260.0), &layout);
        assert!(outcome.is_placed());
        let refs = next.gates()[0].refs;
        assert_eq!(refs.qubit_index, Some(2));
        assert_eq!(refs.control_qubit, None);
        assert_eq!(refs.target_qubit, None);
    }

    #[test]
    fn test_nearest_uses_current_wire_position() {
        let state = two_wires().move_wire(&WireId::for_index(0), 400.0);
        let (wire, distance) = nearest_wire(&state, 390.0).unwrap();
        assert_eq!(wire.index, 0);
        assert_eq!(distance, 10.0);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let state = two_wires();
        let (wire, _) = nearest_wire(&state, 140.0).unwrap();
        assert_eq!(wire.index, 0);
    }
}
