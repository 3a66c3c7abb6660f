//! Solve-likelihood estimation
//!
//! Estimates the chance that a solve attempt succeeds from how much of the
//! board is showing. This is a bucketed heuristic calibrated against play,
//! not an information-theoretic measure: the bucket edges and the fragment
//! bonus were tuned empirically, and changing them changes observable
//! player behavior.

use super::expected_value::Tunables;
use crate::core::BLANK;
use serde::{Deserialize, Serialize};

/// Completion-ratio buckets and their base probabilities, highest first.
/// Edges are inclusive: exactly 0.8 lands in the 0.9 bucket.
const COMPLETION_BUCKETS: [(f64, f64); 4] = [(0.8, 0.9), (0.6, 0.7), (0.4, 0.4), (0.2, 0.2)];

/// Base probability below every bucket edge
const FLOOR_PROBABILITY: f64 = 0.05;

/// Fragments whose presence makes a puzzle noticeably easier to read
const RECOGNIZABLE_FRAGMENTS: [&str; 3] = ["THE", "AND", "ING"];

/// Bonus applied once when any recognizable fragment is showing
const FRAGMENT_BONUS: f64 = 0.1;

/// Upper clamp on the final estimate
const MAX_PROBABILITY: f64 = 0.95;

/// Heuristic solve estimate for one board state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveLikelihood {
    /// Estimated chance a solve attempt succeeds
    pub probability: f64,
    /// Fraction of letter cells already revealed
    pub completion_ratio: f64,
    /// Whether the policy should consider solving now
    pub should_attempt: bool,
}

/// Estimate solve likelihood from the revealed mask
///
/// `should_attempt` fires when the estimate clears the solve threshold, or
/// when the board is mostly revealed and the player has meaningful money at
/// risk. It is a hint for the decision policy, not the decision itself.
#[must_use]
pub fn estimate(mask: &str, round_score: i64, tunables: &Tunables) -> SolveLikelihood {
    let total = mask
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == BLANK)
        .count();
    let revealed = mask.chars().filter(char::is_ascii_uppercase).count();

    let completion_ratio = if total == 0 {
        0.0
    } else {
        revealed as f64 / total as f64
    };

    let base = COMPLETION_BUCKETS
        .iter()
        .find(|(edge, _)| completion_ratio >= *edge)
        .map_or(FLOOR_PROBABILITY, |(_, probability)| *probability);

    let bonus = if RECOGNIZABLE_FRAGMENTS
        .iter()
        .any(|fragment| mask.contains(fragment))
    {
        FRAGMENT_BONUS
    } else {
        0.0
    };

    let probability = (base + bonus).min(MAX_PROBABILITY);

    let should_attempt = probability > tunables.solve_threshold
        || (completion_ratio > tunables.forced_solve_completion
            && round_score > tunables.forced_solve_score);

    SolveLikelihood {
        probability,
        completion_ratio,
        should_attempt,
    }
}
