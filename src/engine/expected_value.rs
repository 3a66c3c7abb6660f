//! Expected-value calculation for candidate actions
//!
//! Converts wheel, letter, and solve probabilities into expected monetary
//! value for spinning, buying a vowel, and attempting a solve. Every
//! calibrated constant lives in [`Tunables`] so the whole engine is tuned
//! in one place.

use super::letters::LetterScore;
use super::solve::SolveLikelihood;
use super::wheel_model::WheelProbabilities;
use serde::{Deserialize, Serialize};

/// Calibrated constants for the decision engine
///
/// Defaults reproduce the engine's tuned behavior; adjust individual fields
/// with struct-update syntax to experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tunables {
    /// Flat price of a vowel purchase
    pub vowel_cost: i64,
    /// Monetary stand-in for keeping the turn after a vowel hit
    pub retention_benefit: f64,
    /// Round-score multiplier applied to a successful solve
    pub solve_multiplier: f64,
    /// Assumed consonant hit odds when no candidates remain
    pub default_letter_odds: f64,
    /// Solve estimate above which the policy solves outright
    pub solve_threshold: f64,
    /// Completion ratio for the money-backed solve arm
    pub forced_solve_completion: f64,
    /// Round score for the money-backed solve arm
    pub forced_solve_score: i64,
    /// Vowel hit odds required before buying
    pub vowel_threshold: f64,
    /// Potential-loss share of the round score that reads as high risk
    pub high_risk_ratio: f64,
    /// Potential-loss share of the round score that reads as medium risk
    pub medium_risk_ratio: f64,
    /// Lead size worth playing conservatively to protect
    pub lead_protect_score: i64,
    /// Deficit to the best opponent that reads as far behind
    pub far_behind_gap: i64,
    /// Score gap under which the game reads as close
    pub close_gap: i64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            vowel_cost: 250,
            retention_benefit: 100.0,
            solve_multiplier: 1.5,
            default_letter_odds: 0.6,
            solve_threshold: 0.6,
            forced_solve_completion: 0.7,
            forced_solve_score: 500,
            vowel_threshold: 0.6,
            high_risk_ratio: 0.15,
            medium_risk_ratio: 0.08,
            lead_protect_score: 1000,
            far_behind_gap: 1000,
            close_gap: 500,
        }
    }
}

/// Expected value of spinning, with its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinValue {
    pub expected_value: f64,
    /// Money-probability-weighted gain from a consonant hit
    pub expected_gain: f64,
    /// Bankruptcy-probability-weighted loss of the round score
    pub expected_loss: f64,
    /// Hit odds of the consonant the gain assumes
    pub letter_probability: f64,
}

/// Expected value of buying a vowel, with its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VowelValue {
    pub expected_value: f64,
    /// Hit odds of the best remaining vowel, 0 when none remain
    pub hit_probability: f64,
    /// Whether the round score covers the vowel cost
    pub can_afford: bool,
}

/// Expected value of attempting a solve, with its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveValue {
    pub expected_value: f64,
    /// The solve estimate the value is weighted by
    pub probability: f64,
    /// Round score after the solve multiplier
    pub potential_payout: f64,
}

/// Expected value of spinning for a consonant
///
/// A negative round score carries no bankruptcy exposure, so the loss term
/// treats it as zero.
#[must_use]
pub fn spin_value(
    wheel: &WheelProbabilities,
    best_consonant: Option<&LetterScore>,
    round_score: i64,
    tunables: &Tunables,
) -> SpinValue {
    let letter_probability =
        best_consonant.map_or(tunables.default_letter_odds, |score| score.probability);

    let expected_gain =
        wheel.money_probability * letter_probability * wheel.average_money_value;
    let expected_loss = wheel.bankrupt_probability * round_score.max(0) as f64;

    SpinValue {
        expected_value: expected_gain - expected_loss,
        expected_gain,
        expected_loss,
        letter_probability,
    }
}

/// Expected value of buying a vowel
///
/// The cost is subtracted unconditionally: with no vowel left the value is
/// exactly `-vowel_cost`.
#[must_use]
pub fn vowel_value(
    top_vowel: Option<&LetterScore>,
    round_score: i64,
    tunables: &Tunables,
) -> VowelValue {
    let hit_probability = top_vowel.map_or(0.0, |score| score.probability);

    VowelValue {
        expected_value: hit_probability * tunables.retention_benefit - tunables.vowel_cost as f64,
        hit_probability,
        can_afford: round_score >= tunables.vowel_cost,
    }
}

/// Expected value of attempting a solve
#[must_use]
pub fn solve_value(
    likelihood: &SolveLikelihood,
    round_score: i64,
    tunables: &Tunables,
) -> SolveValue {
    let potential_payout = round_score as f64 * tunables.solve_multiplier;

    SolveValue {
        expected_value: likelihood.probability * potential_payout,
        probability: likelihood.probability,
        potential_payout,
    }
}
