//! The circuit builder: canonical circuit state, canvas input, simulation.

use std::sync::Arc;

use qforge_canvas::{CanvasController, CanvasLayout, DropOutcome, HitTarget, Point, PointerButton};
use qforge_ir::export::to_qiskit;
use qforge_ir::{CircuitExport, CircuitState, GateId, GateKind, IrError, Position, QubitRefs, WireId};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::error::{BuilderError, BuilderResult, ClientResult};
use crate::notify::Notification;
use crate::run::{RunStatus, RunTracker};
use crate::service::{SimulationResults, SimulationService};
use crate::wire::{DEFAULT_SHOTS, SimulationRequest};

/// Qubit indices offered by the sidebar palette.
pub const QUBIT_SLOTS: std::ops::Range<u32> = 0..10;

/// What the results dashboard shows: the simulated circuit and the raw
/// backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub circuit: CircuitExport,
    pub results: SimulationResults,
}

/// Owns the circuit and everything that mutates it.
///
/// All edits replace the circuit wholesale through the model's pure
/// operations. Rejected edits leave it untouched and may queue a
/// [`Notification`].
pub struct CircuitBuilder {
    state: CircuitState,
    canvas: CanvasController,
    service: Arc<dyn SimulationService>,
    shots: u32,
    run: RunTracker,
    results: Option<ResultsView>,
    results_visible: bool,
    notifications: Vec<Notification>,
}

impl std::fmt::Debug for CircuitBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircuitBuilder")
            .field("state", &self.state)
            .field("service", &self.service.name())
            .field("shots", &self.shots)
            .field("run", &self.run.status())
            .field("results_visible", &self.results_visible)
            .finish()
    }
}

impl CircuitBuilder {
    /// Create a builder with an empty circuit.
    pub fn new(service: Arc<dyn SimulationService>) -> Self {
        Self {
            state: CircuitState::new(),
            canvas: CanvasController::default(),
            service,
            shots: DEFAULT_SHOTS,
            run: RunTracker::new(),
            results: None,
            results_visible: false,
            notifications: Vec::new(),
        }
    }

    /// Shots sent with each simulation.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Canvas geometry.
    pub fn with_layout(mut self, layout: CanvasLayout) -> Self {
        self.canvas = CanvasController::new(layout);
        self
    }

    /// Start from an existing circuit.
    pub fn with_state(mut self, state: CircuitState) -> Self {
        self.state = state;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &CircuitState {
        &self.state
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn run_status(&self) -> RunStatus {
        self.run.status()
    }

    /// Whether a simulation is outstanding (the run trigger is disabled).
    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Last successful results, whether or not they are shown.
    pub fn results(&self) -> Option<&ResultsView> {
        self.results.as_ref()
    }

    /// Results currently shown on the dashboard.
    pub fn results_view(&self) -> Option<&ResultsView> {
        self.results.as_ref().filter(|_| self.results_visible)
    }

    /// Dismiss the dashboard. The results are kept.
    pub fn hide_results(&mut self) {
        self.results_visible = false;
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take all pending notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // =========================================================================
    // Circuit editing
    // =========================================================================

    /// Palette indices without a wire yet.
    pub fn available_qubit_slots(&self) -> Vec<u32> {
        QUBIT_SLOTS
            .filter(|&i| !self.state.contains_qubit(i))
            .collect()
    }

    /// Add a wire. A duplicate index is rejected with a notification.
    pub fn add_qubit(&mut self, index: u32) -> BuilderResult<()> {
        match self.state.add_qubit(index) {
            Ok(next) => {
                self.state = next;
                info!(index, "Qubit added");
                self.notify(Notification::qubit_added(index));
                Ok(())
            }
            Err(e @ IrError::DuplicateQubit { .. }) => {
                warn!(index, "Qubit already exists");
                self.notify(Notification::qubit_exists(index));
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a wire and every gate on it.
    pub fn remove_qubit(&mut self, index: u32) {
        self.state = self.state.remove_qubit(index);
        info!(index, "Qubit removed");
    }

    /// Move a wire, clamped to the canvas band.
    pub fn move_wire(&mut self, id: &WireId, y: f64) {
        let y = self.canvas.layout().clamp_wire_y(y);
        self.state = self.state.move_wire(id, y);
    }

    /// Place a gate directly, bypassing wire snapping.
    pub fn add_gate(&mut self, kind: GateKind, position: Position, refs: QubitRefs) -> GateId {
        let (next, id) = self.state.add_gate(kind, position, refs);
        self.state = next;
        id
    }

    pub fn move_gate(&mut self, id: GateId, position: Position) {
        self.state = self.state.move_gate(id, position);
    }

    pub fn delete_gate(&mut self, id: GateId) {
        self.state = self.state.delete_gate(id);
    }

    pub fn select_gate(&mut self, id: GateId) {
        self.state = self.state.select_gate(id);
    }

    /// Reset to the empty circuit.
    pub fn clear(&mut self) {
        self.state = self.state.clear();
        info!("Circuit cleared");
    }

    // =========================================================================
    // Canvas input
    // =========================================================================

    /// A palette gate was dropped on the canvas. Drops too far from any
    /// wire are ignored without notification.
    pub fn drop_gate(&mut self, kind: GateKind, point: Point) -> DropOutcome {
        let (next, outcome) = self.canvas.drop_gate(&self.state, kind, point);
        self.state = next;
        outcome
    }

    pub fn pointer_down(&mut self, target: HitTarget, point: Point, button: PointerButton) -> bool {
        self.canvas.press(&self.state, target, point, button)
    }

    pub fn pointer_move(&mut self, point: Point) {
        if let Some(next) = self.canvas.pointer_move(&self.state, point) {
            self.state = next;
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(next) = self.canvas.release(&self.state) {
            self.state = next;
        }
    }

    /// Delete the selected gate (the selection's delete affordance).
    pub fn delete_selected(&mut self) -> bool {
        match self.canvas.delete_selected(&self.state) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Start a run and return the request to send.
    ///
    /// Fails with [`BuilderError::NoQubits`] (and a notification) for an
    /// empty circuit, or [`BuilderError::AlreadyRunning`] while a request is
    /// outstanding. Neither case contacts the service.
    pub fn begin_run(&mut self) -> BuilderResult<SimulationRequest> {
        if self.run.is_running() {
            return Err(BuilderError::AlreadyRunning);
        }
        if self.state.num_qubits() == 0 {
            warn!("Simulation requested without qubits");
            self.notify(Notification::no_qubits());
            return Err(BuilderError::NoQubits);
        }
        self.run.start()?;
        Ok(SimulationRequest::from_state(&self.state, self.shots))
    }

    /// Complete the outstanding run.
    ///
    /// On success the results are published for the dashboard. On failure
    /// the previous results stay as they were. Either way the run leaves
    /// `Running`.
    pub fn finish_run(&mut self, outcome: ClientResult<SimulationResults>) -> BuilderResult<&ResultsView> {
        match outcome {
            Ok(results) => {
                self.run.finish(Ok(()))?;
                info!(service = self.service.name(), "Simulation complete");
                self.notify(Notification::simulation_complete());
                self.results_visible = true;
                let view = self.results.insert(ResultsView {
                    circuit: CircuitExport::from_state(&self.state),
                    results,
                });
                Ok(view)
            }
            Err(e) => {
                self.run.finish(Err(e.to_string()))?;
                error!(service = self.service.name(), "Simulation failed: {}", e);
                self.notify(Notification::simulation_failed());
                Err(e.into())
            }
        }
    }

    /// Send the circuit to the simulation service and publish the results.
    #[instrument(skip(self), fields(qubits = self.state.num_qubits(), gates = self.state.gates().len()))]
    pub async fn run_simulation(&mut self) -> BuilderResult<&ResultsView> {
        let request = self.begin_run()?;
        let service = Arc::clone(&self.service);
        let outcome = service.simulate(&request).await;
        self.finish_run(outcome)
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// The circuit in its download format.
    pub fn export(&self) -> CircuitExport {
        CircuitExport::from_state(&self.state)
    }

    /// Pretty-printed circuit JSON.
    pub fn export_json(&mut self) -> BuilderResult<String> {
        let json = self.export().to_json_pretty()?;
        info!("Circuit JSON: {}", json);
        self.notify(Notification::code_exported());
        Ok(json)
    }

    /// Qiskit script reproducing the circuit.
    pub fn export_code(&self) -> String {
        to_qiskit(&self.export())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::notify::Level;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every request; answers with a canned outcome. Calls from
    /// `fail_from` onwards are rejected.
    #[derive(Default)]
    struct MockService {
        calls: AtomicUsize,
        fail_from: Option<usize>,
        seen: Mutex<Vec<SimulationRequest>>,
    }

    impl MockService {
        fn failing() -> Self {
            Self::failing_after(0)
        }

        fn failing_after(successes: usize) -> Self {
            Self {
                fail_from: Some(successes),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SimulationService for MockService {
        fn name(&self) -> &str {
            "mock"
        }

        async fn simulate(&self, request: &SimulationRequest) -> ClientResult<SimulationResults> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            if self.fail_from.is_some_and(|from| call >= from) {
                Err(ClientError::ApiError {
                    status: 500,
                    message: "backend down".into(),
                })
            } else {
                Ok(json!({ "counts": { "00": 512, "11": 488 } }))
            }
        }
    }

    fn builder(service: &Arc<MockService>) -> CircuitBuilder {
        CircuitBuilder::new(Arc::clone(service) as Arc<dyn SimulationService>)
    }

    #[test]
    fn test_add_qubit_notifies() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);

        b.add_qubit(0).unwrap();
        let before = b.state().clone();
        assert!(b.add_qubit(0).is_err());
        assert_eq!(b.state(), &before);

        let notes = b.drain_notifications();
        assert_eq!(notes[0], Notification::qubit_added(0));
        assert_eq!(notes[1], Notification::qubit_exists(0));
        assert_eq!(notes[1].level, Level::Destructive);
        assert!(b.notifications().is_empty());
    }

    #[test]
    fn test_available_slots() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();
        b.add_qubit(3).unwrap();
        assert_eq!(b.available_qubit_slots(), vec![1, 2, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_far_drop_is_silent() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();
        b.drain_notifications();

        let outcome = b.drop_gate(GateKind::H, Point::new(200.0, 400.0));
        assert!(!outcome.is_placed());
        assert!(b.state().gates().is_empty());
        assert!(b.notifications().is_empty());
    }

    #[test]
    fn test_click_select_and_delete() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();
        let DropOutcome::Placed { gate, .. } = b.drop_gate(GateKind::X, Point::new(200.0, 100.0)) else {
            panic!("drop rejected");
        };

        assert!(b.pointer_down(HitTarget::Gate(gate), Point::new(200.0, 100.0), PointerButton::Primary));
        b.pointer_up();
        assert_eq!(b.state().selected_gate(), Some(gate));
        assert!(b.delete_selected());
        assert!(b.state().gates().is_empty());
    }

    #[tokio::test]
    async fn test_zero_qubits_never_calls_service() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);

        let err = b.run_simulation().await.unwrap_err();
        assert!(matches!(err, BuilderError::NoQubits));
        assert_eq!(service.calls(), 0);
        assert_eq!(b.notifications(), &[Notification::no_qubits()]);
        assert_eq!(b.run_status(), RunStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_run_publishes_results() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service).with_shots(256);
        b.add_qubit(0).unwrap();
        b.add_qubit(1).unwrap();
        b.add_gate(GateKind::H, Position::new(150.0, 100.0), QubitRefs::single(0));

        let view = b.run_simulation().await.unwrap();
        assert_eq!(view.results["counts"]["00"], 512);
        assert_eq!(view.circuit.qubits.len(), 2);

        assert_eq!(service.calls(), 1);
        let sent = service.seen.lock().unwrap()[0].clone();
        assert_eq!(sent.shots, 256);
        assert_eq!(sent.qubits, 2);
        assert_eq!(b.run_status(), RunStatus::Succeeded);
        assert!(b.results_view().is_some());
        assert_eq!(b.notifications().last(), Some(&Notification::simulation_complete()));

        b.hide_results();
        assert!(b.results_view().is_none());
        assert!(b.results().is_some());
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_results() {
        let service = Arc::new(MockService::failing_after(1));
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();
        b.run_simulation().await.unwrap();
        let previous = b.results().cloned();
        assert!(previous.is_some());
        assert_eq!(b.run_status(), RunStatus::Succeeded);

        b.add_qubit(1).unwrap();
        let err = b.run_simulation().await.unwrap_err();
        assert!(matches!(err, BuilderError::Rejected { status: 500, .. }));
        assert_eq!(service.calls(), 2);
        assert_eq!(b.results().cloned(), previous);
        assert!(b.results_view().is_some());
        assert!(!b.is_running());
        assert_eq!(b.run_status(), RunStatus::Failed);
        assert_eq!(b.notifications().last(), Some(&Notification::simulation_failed()));
    }

    #[test]
    fn test_split_run_rejects_second_start() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();

        b.begin_run().unwrap();
        assert!(b.is_running());
        assert!(matches!(b.begin_run(), Err(BuilderError::AlreadyRunning)));

        let err = ClientError::ApiError {
            status: 502,
            message: "bad gateway".into(),
        };
        assert!(b.finish_run(Err(err)).is_err());
        assert!(!b.is_running());
        assert!(b.begin_run().is_ok());
    }

    #[test]
    fn test_exports() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();
        b.add_gate(GateKind::H, Position::new(150.0, 100.0), QubitRefs::single(0));
        b.drain_notifications();

        let json = b.export_json().unwrap();
        assert!(json.contains("\"type\": \"H\""));
        assert_eq!(b.notifications(), &[Notification::code_exported()]);
        assert!(b.export_code().contains("qc.h(0)"));
    }

    #[test]
    fn test_move_wire_is_clamped() {
        let service = Arc::new(MockService::default());
        let mut b = builder(&service);
        b.add_qubit(0).unwrap();
        let id = WireId::for_index(0);

        b.move_wire(&id, 2000.0);
        assert_eq!(b.state().wire(0).unwrap().y, 800.0);
        b.move_wire(&id, 10.0);
        assert_eq!(b.state().wire(0).unwrap().y, 50.0);
    }
}
