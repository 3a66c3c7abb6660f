//! Risk and competitive-position assessment
//!
//! Classifies bankruptcy exposure relative to the round score and the
//! player's standing against the best opponent, and distills both into a
//! play-style hint for the decision policy.

use super::expected_value::Tunables;
use super::wheel_model::WheelProbabilities;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bankruptcy exposure relative to the current round score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Standing against the best opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategicPosition {
    Leading,
    Competitive,
    FarBehind,
}

impl fmt::Display for StrategicPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leading => write!(f, "LEADING"),
            Self::Competitive => write!(f, "COMPETITIVE"),
            Self::FarBehind => write!(f, "FAR_BEHIND"),
        }
    }
}

/// Play-style hint distilled from risk and position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyHint {
    Conservative,
    Aggressive,
    Balanced,
    Spin,
}

impl fmt::Display for StrategyHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "CONSERVATIVE"),
            Self::Aggressive => write!(f, "AGGRESSIVE"),
            Self::Balanced => write!(f, "BALANCED"),
            Self::Spin => write!(f, "SPIN"),
        }
    }
}

/// Risk classification for one decision point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub position: StrategicPosition,
    /// Round score minus the best opponent's effective score
    pub score_difference: i64,
    /// Expected round-score loss to a bankrupt landing
    pub potential_loss: f64,
    /// Spin expected value per dollar of potential loss
    pub risk_reward_ratio: f64,
    pub hint: StrategyHint,
}

/// Assess risk and standing for the acting player
///
/// A missing or empty opponent list compares against zero. A non-positive
/// round score carries nothing to lose and always classifies as low risk.
/// The risk/reward ratio guards its denominator at 1 so a zero potential
/// loss never produces an infinity in the reasoning trail.
#[must_use]
pub fn assess(
    round_score: i64,
    opponent_scores: &[i64],
    spin_expected_value: f64,
    wheel: &WheelProbabilities,
    tunables: &Tunables,
) -> RiskAssessment {
    let best_opponent = opponent_scores.iter().copied().max().unwrap_or(0);
    let score_difference = round_score - best_opponent;

    let at_risk = round_score.max(0) as f64;
    let potential_loss = at_risk * wheel.bankrupt_probability;

    let risk_level = if round_score <= 0 {
        RiskLevel::Low
    } else if potential_loss > tunables.high_risk_ratio * at_risk {
        RiskLevel::High
    } else if potential_loss > tunables.medium_risk_ratio * at_risk {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let position = if score_difference > 0 {
        StrategicPosition::Leading
    } else if score_difference < -tunables.far_behind_gap {
        StrategicPosition::FarBehind
    } else {
        StrategicPosition::Competitive
    };

    let risk_reward_ratio = spin_expected_value / potential_loss.max(1.0);

    let hint = if position == StrategicPosition::Leading
        && round_score > tunables.lead_protect_score
    {
        StrategyHint::Conservative
    } else if position == StrategicPosition::FarBehind {
        StrategyHint::Aggressive
    } else if score_difference.abs() < tunables.close_gap {
        StrategyHint::Balanced
    } else if spin_expected_value > 0.0 {
        StrategyHint::Spin
    } else {
        StrategyHint::Conservative
    };

    RiskAssessment {
        risk_level,
        position,
        score_difference,
        potential_loss,
        risk_reward_ratio,
        hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Segment, WheelConfiguration};

    fn standard_probs() -> WheelProbabilities {
        WheelProbabilities::derive(&WheelConfiguration::standard()).unwrap()
    }

    fn assess_plain(round_score: i64, opponents: &[i64]) -> RiskAssessment {
        assess(
            round_score,
            opponents,
            300.0,
            &standard_probs(),
            &Tunables::default(),
        )
    }

    #[test]
    fn standard_wheel_exposure_is_medium() {
        // 2000 × 8.33% ≈ 166.7: above the 8% line, below the 15% line
        let risk = assess_plain(2000, &[500]);

        assert!((risk.potential_loss - 2000.0 * 2.0 / 24.0).abs() < 1e-9);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn bankrupt_heavy_wheel_reads_high() {
        // A quarter of this wheel is bankrupt
        let wheel = WheelProbabilities::derive(&WheelConfiguration::new(vec![
            Segment::Bankrupt,
            Segment::Money(500),
            Segment::Money(600),
            Segment::Money(700),
        ]))
        .unwrap();

        let risk = assess(1000, &[], 300.0, &wheel, &Tunables::default());
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn zero_round_score_is_low_risk() {
        let risk = assess_plain(0, &[1000]);

        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert!(risk.potential_loss.abs() < 1e-12);
    }

    #[test]
    fn negative_round_score_is_low_risk() {
        let risk = assess_plain(-200, &[]);

        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert!(risk.potential_loss.abs() < 1e-12);
    }

    #[test]
    fn position_classification() {
        assert_eq!(assess_plain(800, &[500]).position, StrategicPosition::Leading);
        assert_eq!(
            assess_plain(500, &[500]).position,
            StrategicPosition::Competitive
        );
        assert_eq!(
            assess_plain(0, &[1000]).position,
            StrategicPosition::Competitive
        );
        assert_eq!(
            assess_plain(0, &[1001]).position,
            StrategicPosition::FarBehind
        );
    }

    #[test]
    fn no_opponents_compares_against_zero() {
        let risk = assess_plain(300, &[]);

        assert_eq!(risk.score_difference, 300);
        assert_eq!(risk.position, StrategicPosition::Leading);
    }

    #[test]
    fn risk_reward_ratio_guards_zero_loss() {
        let risk = assess(0, &[], 300.0, &standard_probs(), &Tunables::default());

        assert!(risk.risk_reward_ratio.is_finite());
        assert!((risk.risk_reward_ratio - 300.0).abs() < 1e-12);
    }

    #[test]
    fn hint_conservative_when_protecting_a_lead() {
        let risk = assess_plain(1500, &[400]);
        assert_eq!(risk.hint, StrategyHint::Conservative);
    }

    #[test]
    fn hint_aggressive_when_far_behind() {
        let risk = assess_plain(100, &[2000]);
        assert_eq!(risk.hint, StrategyHint::Aggressive);
    }

    #[test]
    fn hint_balanced_in_a_close_game() {
        let risk = assess_plain(600, &[400]);
        // Leading but below the protect threshold; gap under 500
        assert_eq!(risk.hint, StrategyHint::Balanced);
    }

    #[test]
    fn hint_spin_with_positive_ev_gap() {
        // Leading by 800 with a modest score: not protecting, not close
        let risk = assess(900, &[100], 250.0, &standard_probs(), &Tunables::default());
        assert_eq!(risk.hint, StrategyHint::Spin);
    }

    #[test]
    fn hint_conservative_with_negative_ev() {
        let risk = assess(900, &[100], -50.0, &standard_probs(), &Tunables::default());
        assert_eq!(risk.hint, StrategyHint::Conservative);
    }

    #[test]
    fn serializes_to_spec_tokens() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).unwrap(),
            "\"MEDIUM\""
        );
        assert_eq!(
            serde_json::to_string(&StrategicPosition::FarBehind).unwrap(),
            "\"FAR_BEHIND\""
        );
        assert_eq!(
            serde_json::to_string(&StrategyHint::Conservative).unwrap(),
            "\"CONSERVATIVE\""
        );
    }
}
