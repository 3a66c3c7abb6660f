//! Advise command
//!
//! One-shot recommendation for a snapshot supplied on the command line or
//! as a JSON file.

use crate::core::{GameSnapshot, WheelConfiguration};
use crate::engine::{EngineError, Recommendation, Tunables, recommend};

/// Compute the recommendation for a snapshot
///
/// # Errors
/// Returns [`EngineError`] for a malformed snapshot or degenerate wheel.
pub fn advise_snapshot(
    snapshot: &GameSnapshot,
    wheel: &WheelConfiguration,
) -> Result<Recommendation, EngineError> {
    recommend(snapshot, wheel, &Tunables::default())
}

/// Render a recommendation as pretty JSON, per the wire contract
///
/// # Errors
/// Returns a serialization error; the recommendation types themselves
/// always serialize cleanly.
pub fn recommendation_to_json(recommendation: &Recommendation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(recommendation)
}
