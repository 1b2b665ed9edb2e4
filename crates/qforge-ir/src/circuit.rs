//! The circuit aggregate and its pure mutation operations.
//!
//! Every operation borrows the current [`CircuitState`] and returns a new
//! one; callers replace their state wholesale so that a renderer always sees
//! a consistent snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateId, GateKind, Position, QubitRefs};
use crate::qubit::{QubitWire, WireId};

/// Qubit wires, placed gates and the current selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitState {
    /// Wires, kept sorted ascending by index.
    qubits: Vec<QubitWire>,
    /// Gates in placement order.
    gates: Vec<Gate>,
    /// The selected gate, if any.
    selected_gate: Option<GateId>,
}

impl CircuitState {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Wires, sorted by index.
    pub fn qubits(&self) -> &[QubitWire] {
        &self.qubits
    }

    /// Placed gates.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The selected gate id.
    pub fn selected_gate(&self) -> Option<GateId> {
        self.selected_gate
    }

    /// Number of wires.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Whether the circuit has neither wires nor gates.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty() && self.gates.is_empty()
    }

    /// Whether a wire with this index exists.
    pub fn contains_qubit(&self, index: u32) -> bool {
        self.qubits.iter().any(|q| q.index == index)
    }

    /// Look up a wire by index.
    pub fn wire(&self, index: u32) -> Option<&QubitWire> {
        self.qubits.iter().find(|q| q.index == index)
    }

    /// Look up a wire by id.
    pub fn wire_by_id(&self, id: &WireId) -> Option<&QubitWire> {
        self.qubits.iter().find(|q| &q.id == id)
    }

    /// Look up a gate by id.
    pub fn gate(&self, id: GateId) -> Option<&Gate> {
        self.gates.iter().find(|g| g.id == id)
    }

    /// Whether the given gate is the selected one.
    pub fn is_selected(&self, id: GateId) -> bool {
        self.selected_gate == Some(id)
    }

    // =========================================================================
    // Wire operations
    // =========================================================================

    /// Add a wire at its default position.
    ///
    /// Fails with [`IrError::DuplicateQubit`] if the index is already present;
    /// the receiver is left untouched in that case.
    pub fn add_qubit(&self, index: u32) -> IrResult<Self> {
        if self.contains_qubit(index) {
            return Err(IrError::DuplicateQubit { index });
        }

        let mut next = self.clone();
        next.qubits.push(QubitWire::new(index));
        next.qubits.sort_by_key(|q| q.index);
        debug!(index, "added qubit wire");
        Ok(next)
    }

    /// Remove a wire and every gate that references its index in any role.
    pub fn remove_qubit(&self, index: u32) -> Self {
        let mut next = self.clone();
        next.qubits.retain(|q| q.index != index);
        next.gates.retain(|g| !g.touches(index));
        next.drop_dangling_selection();
        debug!(
            index,
            removed_gates = self.gates.len() - next.gates.len(),
            "removed qubit wire"
        );
        next
    }

    /// Move a wire to a new vertical coordinate.
    pub fn move_wire(&self, id: &WireId, y: f64) -> Self {
        let mut next = self.clone();
        if let Some(wire) = next.qubits.iter_mut().find(|q| &q.id == id) {
            wire.y = y;
        }
        next
    }

    // =========================================================================
    // Gate operations
    // =========================================================================

    /// Append a gate with a fresh id. Never fails; placement legality is the
    /// caller's concern.
    pub fn add_gate(&self, kind: GateKind, position: Position, refs: QubitRefs) -> (Self, GateId) {
        let gate = Gate::new(kind, position, refs);
        let id = gate.id;
        let mut next = self.clone();
        next.gates.push(gate);
        debug!(%id, %kind, "added gate");
        (next, id)
    }

    /// Move a gate to a new position. Unknown ids leave the state unchanged.
    pub fn move_gate(&self, id: GateId, position: Position) -> Self {
        let mut next = self.clone();
        if let Some(gate) = next.gates.iter_mut().find(|g| g.id == id) {
            gate.position = position;
        }
        next
    }

    /// Delete a gate, clearing the selection if it was selected.
    pub fn delete_gate(&self, id: GateId) -> Self {
        let mut next = self.clone();
        next.gates.retain(|g| g.id != id);
        next.drop_dangling_selection();
        next
    }

    /// Toggle selection of a gate: selecting the selected gate clears the
    /// selection, selecting any other gate replaces it.
    pub fn select_gate(&self, id: GateId) -> Self {
        let mut next = self.clone();
        next.selected_gate = if self.selected_gate == Some(id) {
            None
        } else {
            Some(id)
        };
        next
    }

    /// Reset to the empty circuit.
    pub fn clear(&self) -> Self {
        Self::default()
    }

    fn drop_dangling_selection(&mut self) {
        let dangling = self
            .selected_gate
            .is_some_and(|selected| !self.gates.iter().any(|g| g.id == selected));
        if dangling {
            self.selected_gate = None;
        }
    }

    /// Build a state from parts, e.g. when importing an exported circuit.
    ///
    /// Wires are sorted by index. Duplicate indices are rejected, and so is
    /// any gate that references a wire not in `qubits`.
    pub fn from_parts(qubits: Vec<QubitWire>, gates: Vec<Gate>) -> IrResult<Self> {
        let mut sorted = qubits;
        sorted.sort_by_key(|q| q.index);
        if let Some(pair) = sorted.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(IrError::DuplicateQubit {
                index: pair[0].index,
            });
        }

        let present = |index: u32| sorted.binary_search_by_key(&index, |q| q.index).is_ok();
        let dangling = gates.iter().find_map(|g| {
            let refs = g.refs;
            [refs.qubit_index, refs.control_qubit, refs.target_qubit]
                .into_iter()
                .flatten()
                .find(|&index| !present(index))
        });
        if let Some(index) = dangling {
            return Err(IrError::QubitNotFound { index });
        }

        Ok(Self {
            qubits: sorted,
            gates,
            selected_gate: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_wires() -> CircuitState {
        CircuitState::new()
            .add_qubit(0)
            .unwrap()
            .add_qubit(1)
            .unwrap()
    }

    #[test]
    fn test_new_circuit_is_empty() {
        let state = CircuitState::new();
        assert!(state.is_empty());
        assert_eq!(state.num_qubits(), 0);
        assert_eq!(state.selected_gate(), None);
    }

    #[test]
    fn test_add_qubit_default_position() {
        let state = CircuitState::new().add_qubit(2).unwrap();
        let wire = state.wire(2).unwrap();
        assert_eq!(wire.y, 260.0);
        assert_eq!(wire.id.as_str(), "qubit-2");
    }

    #[test]
    fn test_add_qubit_keeps_order() {
        let state = CircuitState::new()
            .add_qubit(3)
            .unwrap()
            .add_qubit(0)
            .unwrap()
            .add_qubit(1)
            .unwrap();
        let indices: Vec<_> = state.qubits().iter().map(|q| q.index).collect();
        assert_eq!(indices, vec![0, 1, 3]);
    }

    #[test]
    fn test_add_duplicate_qubit_rejected() {
        let state = two_wires();
        let err = state.add_qubit(1).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { index: 1 }));
        assert_eq!(state.num_qubits(), 2);
    }

    #[test]
    fn test_remove_qubit_cascades() {
        let state = two_wires().add_qubit(2).unwrap();
        let (state, h) = state.add_gate(GateKind::H, Position::new(150.0, 100.0), QubitRefs::single(0));
        let (state, x) = state.add_gate(GateKind::X, Position::new(150.0, 180.0), QubitRefs::single(1));
        let (state, cx) = state.add_gate(
            GateKind::Cnot,
            Position::new(250.0, 260.0),
            QubitRefs::controlled(Some(2), Some(1)),
        );
        let (state, m) = state.add_gate(
            GateKind::Measure,
            Position::new(350.0, 100.0),
            QubitRefs::single(0),
        );

        let after = state.remove_qubit(1);
        assert!(!after.contains_qubit(1));
        assert!(after.gate(x).is_none());
        assert!(after.gate(cx).is_none());
        assert!(after.gate(h).is_some());
        assert!(after.gate(m).is_some());
        // receiver untouched
        assert_eq!(state.gates().len(), 4);
    }

    #[test]
    fn test_remove_qubit_clears_selection_of_removed_gate() {
        let (state, h) = two_wires().add_gate(
            GateKind::H,
            Position::new(150.0, 180.0),
            QubitRefs::single(1),
        );
        let state = state.select_gate(h);
        assert_eq!(state.remove_qubit(1).selected_gate(), None);
        assert_eq!(state.remove_qubit(0).selected_gate(), Some(h));
    }

    #[test]
    fn test_move_gate_and_wire() {
        let (state, h) = two_wires().add_gate(
            GateKind::H,
            Position::new(150.0, 100.0),
            QubitRefs::single(0),
        );
        let state = state.move_gate(h, Position::new(400.0, 102.0));
        assert_eq!(state.gate(h).unwrap().position, Position::new(400.0, 102.0));

        let state = state.move_wire(&WireId::for_index(1), 500.0);
        assert_eq!(state.wire(1).unwrap().y, 500.0);
    }

    #[test]
    fn test_select_toggles() {
        let (state, a) = two_wires().add_gate(GateKind::H, Position::default(), QubitRefs::single(0));
        let (state, b) = state.add_gate(GateKind::X, Position::default(), QubitRefs::single(1));

        let selected = state.select_gate(a);
        assert_eq!(selected.selected_gate(), Some(a));
        assert_eq!(selected.select_gate(a).selected_gate(), None);
        assert_eq!(selected.select_gate(b).selected_gate(), Some(b));
    }

    #[test]
    fn test_delete_gate_clears_selection() {
        let (state, a) = two_wires().add_gate(GateKind::H, Position::default(), QubitRefs::single(0));
        let state = state.select_gate(a).delete_gate(a);
        assert!(state.gates().is_empty());
        assert_eq!(state.selected_gate(), None);
    }

    #[test]
    fn test_clear() {
        let (state, a) = two_wires().add_gate(GateKind::H, Position::default(), QubitRefs::single(0));
        let cleared = state.select_gate(a).clear();
        assert_eq!(cleared, CircuitState::new());
    }

    #[test]
    fn test_from_parts_rejects_duplicates() {
        let result = CircuitState::from_parts(vec![QubitWire::new(1), QubitWire::new(1)], vec![]);
        assert!(matches!(result, Err(IrError::DuplicateQubit { index: 1 })));
    }

    #[test]
    fn test_from_parts_rejects_dangling_refs() {
        let wires = vec![QubitWire::new(0), QubitWire::new(1)];
        let cx = Gate::new(GateKind::Cnot, Position::default(), QubitRefs::controlled(Some(4), Some(1)));
        let result = CircuitState::from_parts(wires.clone(), vec![cx]);
        assert!(matches!(result, Err(IrError::QubitNotFound { index: 4 })));

        let h = Gate::new(GateKind::H, Position::default(), QubitRefs::single(1));
        let state = CircuitState::from_parts(wires, vec![h]).unwrap();
        assert_eq!(state.gates().len(), 1);
    }
}
