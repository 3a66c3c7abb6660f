//! Game-side collaborators of the engine
//!
//! The turn controller owns all mutable state, the wheel RNG produces the
//! spin outcomes the engine deliberately does not model, and the AI seat
//! turns recommendations into moves.

pub mod ai;
pub mod controller;
pub mod rng;

pub use ai::{AiTurn, take_turn};
pub use controller::{TurnController, TurnEvent};
pub use rng::WheelRng;
