//! Canvas interaction for the qforge circuit builder.
//!
//! Translates pointer input into [`qforge_ir::CircuitState`] operations:
//!
//! - dragging a wire label moves the wire within a vertical band
//! - dragging a gate moves it along its wire, never onto another one
//! - dropping a palette gate snaps it to the nearest wire, or is ignored
//!   when no wire is close enough
//! - clicking a gate toggles its selection
//!
//! Drags are modelled as explicit sessions with a `begin → update* → end`
//! lifecycle ([`session`]), so the state machine can be driven without a
//! real pointer device:
//!
//! ```rust
//! use qforge_canvas::{CanvasController, HitTarget, Point, PointerButton};
//! use qforge_ir::{CircuitState, GateKind};
//!
//! let mut controller = CanvasController::default();
//! let state = CircuitState::new().add_qubit(0)?;
//!
//! let (state, outcome) = controller.drop_gate(&state, GateKind::H, Point::new(180.0, 110.0));
//! assert!(outcome.is_placed());
//! let gate = state.gates()[0].id;
//!
//! controller.press(&state, HitTarget::Gate(gate), Point::new(180.0, 100.0), PointerButton::Primary);
//! let state = controller.pointer_move(&state, Point::new(260.0, 160.0)).unwrap_or(state);
//! let state = controller.release(&state).unwrap_or(state);
//!
//! let placed = state.gate(gate).unwrap();
//! assert_eq!((placed.position.x, placed.position.y), (260.0, 105.0));
//! # Ok::<(), qforge_ir::IrError>(())
//! ```

pub mod controller;
pub mod layout;
pub mod palette;
pub mod pointer;
pub mod session;

pub use controller::{CanvasController, HitTarget};
pub use layout::CanvasLayout;
pub use palette::{DropOutcome, drop_gate, nearest_wire};
pub use pointer::{Delta, Point, PointerButton};
pub use session::{DragEnd, DragPhase, GateDragSession, WireDragSession};
