//! Analyze command
//!
//! Produces the full intermediate breakdown for a snapshot: every figure
//! the decision policy looked at, not just the final action.

use crate::core::{GameSnapshot, WheelConfiguration};
use crate::engine::{
    EngineError, LetterRanking, Recommendation, RiskAssessment, SolveLikelihood, Tunables,
    WheelProbabilities, rank_letters, recommend, solve,
};
use serde::{Deserialize, Serialize};

/// Everything the engine derived for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub wheel: WheelProbabilities,
    /// Full rankings, not just the suggestions the recommendation carries
    pub letters: LetterRanking,
    pub likelihood: SolveLikelihood,
    pub risk: RiskAssessment,
    pub recommendation: Recommendation,
}

/// Analyze a snapshot end to end
///
/// # Errors
/// Returns [`EngineError`] for a malformed snapshot or degenerate wheel.
pub fn analyze_snapshot(
    snapshot: &GameSnapshot,
    wheel_config: &WheelConfiguration,
) -> Result<AnalysisReport, EngineError> {
    let tunables = Tunables::default();
    let recommendation = recommend(snapshot, wheel_config, &tunables)?;

    let letters = rank_letters(
        &snapshot.revealed_mask,
        &snapshot.used_set(),
        &snapshot.category,
    );
    let likelihood = solve::estimate(&snapshot.revealed_mask, snapshot.round_score, &tunables);

    Ok(AnalysisReport {
        wheel: recommendation.wheel,
        letters,
        likelihood,
        risk: recommendation.risk,
        recommendation,
    })
}
