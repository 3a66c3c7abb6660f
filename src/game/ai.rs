//! Automated seat driven by the decision engine
//!
//! Follows the engine's recommendation and its ranked letter suggestions.
//! The seat cannot see the hidden phrase, so a solve attempt succeeds with
//! probability equal to the engine's own estimate, drawn from the game RNG;
//! the engine itself stays free of randomness.

use super::controller::{TurnController, TurnEvent};
use super::rng::WheelRng;
use crate::core::WheelConfiguration;
use crate::engine::{Action, EngineError, Recommendation, Tunables, is_vowel, recommend};
use rand::Rng;

/// One completed AI turn
#[derive(Debug, Clone)]
pub struct AiTurn {
    /// What the engine advised
    pub recommendation: Recommendation,
    /// What actually happened on the board
    pub event: TurnEvent,
}

/// Play one turn for the acting player
///
/// # Errors
/// Returns [`EngineError`] if the controller produced a snapshot the engine
/// rejects, which would be a programming bug rather than a game outcome.
pub fn take_turn<R: Rng>(
    game: &mut TurnController,
    wheel: &WheelConfiguration,
    rng: &mut WheelRng<R>,
    tunables: &Tunables,
) -> Result<AiTurn, EngineError> {
    let snapshot = game.snapshot();
    let recommendation = recommend(&snapshot, wheel, tunables)?;

    let event = match recommendation.action {
        Action::Spin => spin_turn(game, wheel, rng, &recommendation, &snapshot.used_letters),
        // The policy only buys when a ranked vowel exists
        Action::BuyVowel => match recommendation.suggested_vowel {
            Some(score) => game.buy_vowel(score.letter),
            None => solve_turn(game, rng, &recommendation),
        },
        Action::Solve => solve_turn(game, rng, &recommendation),
    };

    Ok(AiTurn {
        recommendation,
        event,
    })
}

fn spin_turn<R: Rng>(
    game: &mut TurnController,
    wheel: &WheelConfiguration,
    rng: &mut WheelRng<R>,
    recommendation: &Recommendation,
    used: &[char],
) -> TurnEvent {
    let consonant = recommendation
        .suggested_consonants
        .first()
        .map(|score| score.letter)
        .or_else(|| fallback_consonant(used));

    match consonant {
        Some(letter) => {
            let outcome = rng.spin(wheel);
            game.apply_spin(outcome, letter)
        }
        // Consonants exhausted; solving is the only move left
        None => solve_turn(game, rng, recommendation),
    }
}

fn solve_turn<R: Rng>(
    game: &mut TurnController,
    rng: &mut WheelRng<R>,
    recommendation: &Recommendation,
) -> TurnEvent {
    let phrase = game.puzzle().phrase().to_string();

    if rng.chance() < recommendation.likelihood.probability {
        game.attempt_solve(&phrase)
    } else {
        game.attempt_solve("")
    }
}

/// First unused consonant, for the rare board where every ranked one is gone
fn fallback_consonant(used: &[char]) -> Option<char> {
    ('A'..='Z').find(|letter| !is_vowel(*letter) && !used.contains(letter))
}
