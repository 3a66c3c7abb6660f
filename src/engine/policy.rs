//! Decision policy
//!
//! Combines the wheel model, letter rankings, solve estimate, expected
//! values, and risk assessment into exactly one recommended action with an
//! ordered reasoning trail. Rule order encodes the priority: secure the
//! win, then safer incremental progress, then protect a lead, then the
//! default spin.

use super::expected_value::{
    SolveValue, SpinValue, Tunables, VowelValue, solve_value, spin_value, vowel_value,
};
use super::letters::{LetterScore, rank_letters};
use super::risk::{RiskAssessment, RiskLevel, StrategicPosition, assess};
use super::solve::{SolveLikelihood, estimate};
use super::wheel_model::WheelProbabilities;
use super::EngineError;
use crate::core::{GameSnapshot, WheelConfiguration};
use serde::{Deserialize, Serialize};

/// The three actions a player can take on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Spin,
    BuyVowel,
    Solve,
}

/// One recommendation, produced fresh per call
///
/// Carries every intermediate figure so callers can explain or second-guess
/// the decision without re-running the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: Action,
    /// Human-readable reasoning, most important first
    pub reasoning: Vec<String>,
    pub spin: SpinValue,
    pub vowel: VowelValue,
    pub solve: SolveValue,
    pub likelihood: SolveLikelihood,
    pub risk: RiskAssessment,
    pub wheel: WheelProbabilities,
    /// Up to two best consonants for a spin guess
    pub suggested_consonants: Vec<LetterScore>,
    /// Best vowel for a purchase
    pub suggested_vowel: Option<LetterScore>,
}

/// Recommend an action for one decision point
///
/// Pure function: identical snapshots, wheels, and tunables always yield
/// identical recommendations. The snapshot is only read; nothing is
/// retained across calls.
///
/// # Errors
/// Returns [`EngineError::InvalidState`] for a malformed snapshot and
/// [`EngineError::Configuration`] for a degenerate wheel.
///
/// # Examples
/// ```
/// use wheel_advisor::core::{GameSnapshot, WheelConfiguration};
/// use wheel_advisor::engine::{Action, Tunables, recommend};
///
/// let snapshot = GameSnapshot {
///     phrase: None,
///     revealed_mask: "____ ____".to_string(),
///     used_letters: Vec::new(),
///     round_score: 0,
///     opponent_scores: vec![300],
///     rounds_remaining: 1,
///     category: "PHRASE".to_string(),
/// };
///
/// let wheel = WheelConfiguration::standard();
/// let rec = recommend(&snapshot, &wheel, &Tunables::default()).unwrap();
/// assert_eq!(rec.action, Action::Spin);
/// ```
pub fn recommend(
    snapshot: &GameSnapshot,
    wheel_config: &WheelConfiguration,
    tunables: &Tunables,
) -> Result<Recommendation, EngineError> {
    snapshot.validate()?;
    let wheel = WheelProbabilities::derive(wheel_config)?;

    let used = snapshot.used_set();
    let ranking = rank_letters(&snapshot.revealed_mask, &used, &snapshot.category);
    let likelihood = estimate(&snapshot.revealed_mask, snapshot.round_score, tunables);

    let spin = spin_value(
        &wheel,
        ranking.best_consonant(),
        snapshot.round_score,
        tunables,
    );
    let vowel = vowel_value(ranking.top_vowel(), snapshot.round_score, tunables);
    let solve = solve_value(&likelihood, snapshot.round_score, tunables);
    let risk = assess(
        snapshot.round_score,
        &snapshot.opponent_scores,
        spin.expected_value,
        &wheel,
        tunables,
    );

    let mut reasoning = Vec::new();
    let top_vowel = ranking.top_vowel();
    let vowel_buyable = vowel.can_afford && top_vowel.is_some();

    // Rule 1: secure the win
    let action = if likelihood.should_attempt {
        reasoning.push(format!(
            "Solve attempt estimated at {:.0}% with the board {:.0}% revealed",
            likelihood.probability * 100.0,
            likelihood.completion_ratio * 100.0,
        ));
        reasoning.push(format!(
            "Solving now is worth an expected ${:.0}",
            solve.expected_value
        ));
        Action::Solve
    }
    // Rule 2: safer incremental progress
    else if vowel_buyable
        && vowel.expected_value > spin.expected_value
        && vowel.hit_probability > tunables.vowel_threshold
    {
        let best = top_vowel.map_or('E', |score| score.letter);
        reasoning.push(format!(
            "Vowel {best} has {:.0}% odds of appearing",
            vowel.hit_probability * 100.0
        ));
        reasoning.push(format!(
            "Vowel value ${:.0} beats spin value ${:.0}",
            vowel.expected_value, spin.expected_value
        ));
        Action::BuyVowel
    }
    // Rule 3: protect a lead
    else if risk.risk_level == RiskLevel::High
        && risk.position == StrategicPosition::Leading
        && vowel_buyable
    {
        reasoning.push(format!(
            "Bankruptcy would cost ${:.0} of a leading score",
            risk.potential_loss
        ));
        reasoning.push("Buying a vowel avoids the wheel entirely".to_string());
        Action::BuyVowel
    }
    // Rule 4: default action
    else {
        reasoning.push(format!(
            "Spinning is worth an expected ${:.0} ({} risk)",
            spin.expected_value, risk.risk_level
        ));
        if let Some(best) = ranking.best_consonant() {
            reasoning.push(format!(
                "Best consonant {} has {:.0}% odds of appearing",
                best.letter,
                best.probability * 100.0
            ));
        }
        Action::Spin
    };

    reasoning.push(position_note(&risk));

    Ok(Recommendation {
        action,
        reasoning,
        spin,
        vowel,
        solve,
        likelihood,
        risk,
        wheel,
        suggested_consonants: ranking.top_consonants().to_vec(),
        suggested_vowel: ranking.top_vowel().copied(),
    })
}

/// Closing line on competitive standing
fn position_note(risk: &RiskAssessment) -> String {
    match risk.position {
        StrategicPosition::Leading => {
            format!(
                "Leading the best opponent by ${} - worth preserving",
                risk.score_difference
            )
        }
        StrategicPosition::FarBehind => {
            format!(
                "Trailing the best opponent by ${} - higher risk is justified",
                -risk.score_difference
            )
        }
        StrategicPosition::Competitive => {
            format!("Close game - current gap ${}", risk.score_difference.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::risk::StrategyHint;

    fn snapshot(mask: &str, round_score: i64) -> GameSnapshot {
        GameSnapshot {
            phrase: None,
            revealed_mask: mask.to_string(),
            used_letters: Vec::new(),
            round_score,
            opponent_scores: vec![400],
            rounds_remaining: 1,
            category: String::new(),
        }
    }

    fn recommend_default(snap: &GameSnapshot) -> Recommendation {
        recommend(snap, &WheelConfiguration::standard(), &Tunables::default()).unwrap()
    }

    #[test]
    fn fresh_board_spins() {
        let rec = recommend_default(&snapshot("____ ____", 0));

        assert_eq!(rec.action, Action::Spin);
        assert_eq!(rec.suggested_consonants[0].letter, 'T');
        assert_eq!(rec.suggested_vowel.unwrap().letter, 'E');
    }

    #[test]
    fn mostly_revealed_board_solves() {
        // 8 of 10 letters showing puts the estimate at 0.9
        let rec = recommend_default(&snapshot("BCDFGHJK__", 0));

        assert_eq!(rec.action, Action::Solve);
        assert!(rec.reasoning[0].contains("90%"));
    }

    #[test]
    fn solve_beats_a_better_spin_value() {
        // Zero round score makes the solve value $0 while the spin value is
        // strongly positive; rule 1 still wins
        let rec = recommend_default(&snapshot("BCDFGHJK__", 0));

        assert!(rec.spin.expected_value > rec.solve.expected_value);
        assert_eq!(rec.action, Action::Solve);
    }

    #[test]
    fn affordable_strong_vowel_is_bought() {
        // E with all four neighbors showing scores 12 → capped 0.8 odds,
        // while the mostly-blank board keeps the solve rule quiet. A
        // bankrupt-heavy wheel drags the spin value under the vowel value.
        let wheel = WheelConfiguration::new(vec![
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Money(100),
        ]);

        let mut snap = snapshot("R_S__N_D____", 800);
        snap.used_letters = vec!['R', 'S', 'N', 'D'];

        let rec = recommend(&snap, &wheel, &Tunables::default()).unwrap();

        // Vowel: 0.8 × 100 − 250 = −170
        // Spin: 0.25 × p × 100 − 0.75 × 800 ≈ −580
        assert_eq!(rec.action, Action::BuyVowel);
        assert!(rec.vowel.expected_value > rec.spin.expected_value);
        assert!(rec.vowel.hit_probability > 0.6);
    }

    #[test]
    fn unaffordable_vowel_falls_through_to_spin() {
        let wheel = WheelConfiguration::new(vec![
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Money(100),
        ]);

        let mut snap = snapshot("R_S__N_D____", 200);
        snap.used_letters = vec!['R', 'S', 'N', 'D'];

        let rec = recommend(&snap, &wheel, &Tunables::default()).unwrap();
        assert_eq!(rec.action, Action::Spin);
    }

    #[test]
    fn high_risk_leader_buys_defensively() {
        // A bankrupt-heavy wheel pushes the risk level to HIGH; the leader
        // with an affordable vowel takes the defensive purchase even though
        // the vowel odds are mediocre
        let wheel = WheelConfiguration::new(vec![
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Money(500),
            crate::core::Segment::Money(600),
            crate::core::Segment::Money(700),
        ]);

        let mut snap = snapshot("____ ____", 900);
        snap.opponent_scores = vec![100];

        let rec = recommend(&snap, &wheel, &Tunables::default()).unwrap();

        assert_eq!(rec.risk.risk_level, RiskLevel::High);
        assert_eq!(rec.risk.position, StrategicPosition::Leading);
        assert_eq!(rec.action, Action::BuyVowel);
        assert!(rec.reasoning.iter().any(|line| line.contains("avoids")));
    }

    #[test]
    fn high_risk_trailer_still_spins() {
        let wheel = WheelConfiguration::new(vec![
            crate::core::Segment::Bankrupt,
            crate::core::Segment::Money(500),
            crate::core::Segment::Money(600),
            crate::core::Segment::Money(700),
        ]);

        let mut snap = snapshot("____ ____", 900);
        snap.opponent_scores = vec![5000];

        let rec = recommend(&snap, &wheel, &Tunables::default()).unwrap();

        assert_eq!(rec.risk.risk_level, RiskLevel::High);
        assert_eq!(rec.action, Action::Spin);
    }

    #[test]
    fn identical_snapshots_yield_identical_recommendations() {
        let snap = snapshot("T_E _U_C_", 800);
        let wheel = WheelConfiguration::standard();
        let tunables = Tunables::default();

        let first = recommend(&snap, &wheel, &tunables).unwrap();
        let second = recommend(&snap, &wheel, &tunables).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let snap = snapshot("", 0);

        let result = recommend(&snap, &WheelConfiguration::standard(), &Tunables::default());
        assert!(matches!(result, Err(EngineError::InvalidState(_))));
    }

    #[test]
    fn degenerate_wheel_is_rejected() {
        let snap = snapshot("____", 0);
        let wheel = WheelConfiguration::new(vec![crate::core::Segment::Bankrupt]);

        let result = recommend(&snap, &wheel, &Tunables::default());
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn reasoning_ends_with_a_position_note() {
        let rec = recommend_default(&snapshot("____ ____", 600));

        let last = rec.reasoning.last().unwrap();
        assert!(last.contains("Leading") || last.contains("Trailing") || last.contains("Close"));
    }

    #[test]
    fn hint_is_exposed_for_callers() {
        let mut snap = snapshot("____ ____", 1500);
        snap.opponent_scores = vec![200];

        let rec = recommend_default(&snap);
        assert_eq!(rec.risk.hint, StrategyHint::Conservative);
    }

    #[test]
    fn action_serializes_to_spec_tokens() {
        assert_eq!(serde_json::to_string(&Action::Spin).unwrap(), "\"SPIN\"");
        assert_eq!(
            serde_json::to_string(&Action::BuyVowel).unwrap(),
            "\"BUY_VOWEL\""
        );
        assert_eq!(serde_json::to_string(&Action::Solve).unwrap(), "\"SOLVE\"");
    }

    #[test]
    fn recommendation_round_trips_through_json() {
        let rec = recommend_default(&snapshot("T_E _U_C_", 800));

        let json = serde_json::to_string(&rec).unwrap();
        let back: Recommendation = serde_json::from_str(&json).unwrap();

        assert_eq!(back, rec);
    }
}
