//! Player money bookkeeping
//!
//! Round scores are forfeited on bankrupt and banked into the running total
//! when a round is won.

use serde::{Deserialize, Serialize};

/// Money state for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMoneyState {
    round_score: i64,
    total_score: i64,
}

impl PlayerMoneyState {
    /// Start a player at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            round_score: 0,
            total_score: 0,
        }
    }

    /// Money accumulated in the current round
    #[inline]
    #[must_use]
    pub const fn round_score(&self) -> i64 {
        self.round_score
    }

    /// Money banked across completed rounds
    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Banked total plus the at-risk round score
    #[inline]
    #[must_use]
    pub const fn effective_score(&self) -> i64 {
        self.total_score + self.round_score
    }

    /// Add winnings to the round score
    pub const fn award(&mut self, amount: i64) {
        self.round_score += amount;
    }

    /// Forfeit the round score
    pub const fn go_bankrupt(&mut self) {
        self.round_score = 0;
    }

    /// Deduct a cost from the round score if affordable
    ///
    /// Returns `false` (leaving the score untouched) when the player cannot
    /// pay.
    pub const fn spend(&mut self, cost: i64) -> bool {
        if self.round_score < cost {
            return false;
        }
        self.round_score -= cost;
        true
    }

    /// Move the round score into the banked total
    pub const fn bank_round(&mut self) {
        self.total_score += self.round_score;
        self.round_score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_accumulates_round_score() {
        let mut player = PlayerMoneyState::new();
        player.award(500);
        player.award(250);

        assert_eq!(player.round_score(), 750);
        assert_eq!(player.total_score(), 0);
    }

    #[test]
    fn bankrupt_forfeits_round_but_not_total() {
        let mut player = PlayerMoneyState::new();
        player.award(800);
        player.bank_round();
        player.award(600);
        player.go_bankrupt();

        assert_eq!(player.round_score(), 0);
        assert_eq!(player.total_score(), 800);
    }

    #[test]
    fn spend_requires_funds() {
        let mut player = PlayerMoneyState::new();
        player.award(200);

        assert!(!player.spend(250));
        assert_eq!(player.round_score(), 200);

        player.award(100);
        assert!(player.spend(250));
        assert_eq!(player.round_score(), 50);
    }

    #[test]
    fn bank_round_moves_money() {
        let mut player = PlayerMoneyState::new();
        player.award(1200);
        player.bank_round();

        assert_eq!(player.round_score(), 0);
        assert_eq!(player.total_score(), 1200);
        assert_eq!(player.effective_score(), 1200);
    }

    #[test]
    fn effective_score_includes_at_risk_money() {
        let mut player = PlayerMoneyState::new();
        player.award(500);
        player.bank_round();
        player.award(300);

        assert_eq!(player.effective_score(), 800);
    }
}
