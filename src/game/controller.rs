//! Turn controller
//!
//! Owns the puzzle and player money state for one round, applies actions,
//! and hands the engine fresh snapshots. The engine never mutates any of
//! this; the controller is the only writer.

use crate::core::{GameSnapshot, PlayerMoneyState, PuzzleState, Segment};

/// What happened when an action was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// Landed on bankrupt, round score forfeited
    Bankrupt,
    /// Landed on lose-a-turn
    LoseTurn,
    /// Consonant guess revealed cells and earned money
    LetterHit {
        letter: char,
        count: usize,
        earned: i64,
    },
    /// Consonant guess found nothing
    LetterMiss { letter: char },
    /// Letter was already guessed; turn forfeited
    AlreadyUsed { letter: char },
    /// Vowel purchase revealed cells
    VowelHit { letter: char, count: usize },
    /// Vowel purchase found nothing
    VowelMiss { letter: char },
    /// Not enough money to buy a vowel
    CannotAfford,
    /// Correct solve; round banked
    Solved { banked: i64 },
    /// Incorrect solve attempt
    WrongSolve,
}

impl TurnEvent {
    /// Whether this event passes the turn to the next player
    #[must_use]
    pub const fn passes_turn(&self) -> bool {
        !matches!(
            self,
            Self::LetterHit { .. } | Self::VowelHit { .. } | Self::Solved { .. }
        )
    }
}

/// One round of play: a puzzle plus the players competing on it
pub struct TurnController {
    puzzle: PuzzleState,
    players: Vec<PlayerMoneyState>,
    current: usize,
    rounds_remaining: u32,
    vowel_cost: i64,
    solved: bool,
}

impl TurnController {
    /// Start a round
    ///
    /// `rounds_remaining` counts the current round and is surfaced to the
    /// engine through snapshots.
    #[must_use]
    pub fn new(
        puzzle: PuzzleState,
        players: Vec<PlayerMoneyState>,
        rounds_remaining: u32,
        vowel_cost: i64,
    ) -> Self {
        Self {
            puzzle,
            players,
            current: 0,
            rounds_remaining,
            vowel_cost,
            solved: false,
        }
    }

    /// The player whose turn it is
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current
    }

    /// Whether the round has been solved
    #[inline]
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.solved
    }

    /// Read access to the board
    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    /// Read access to the players
    #[inline]
    #[must_use]
    pub fn players(&self) -> &[PlayerMoneyState] {
        &self.players
    }

    /// Take the players back, e.g. to carry totals into the next round
    #[must_use]
    pub fn into_players(self) -> Vec<PlayerMoneyState> {
        self.players
    }

    /// Build a fresh snapshot for the acting player
    ///
    /// Called once per decision point; the controller knows the phrase, so
    /// snapshots carry it for validation.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut used: Vec<char> = self.puzzle.used_letters().iter().copied().collect();
        used.sort_unstable();

        let opponent_scores = self
            .players
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != self.current)
            .map(|(_, player)| player.effective_score())
            .collect();

        GameSnapshot {
            phrase: Some(self.puzzle.phrase().to_string()),
            revealed_mask: self.puzzle.mask(),
            used_letters: used,
            round_score: self.players[self.current].round_score(),
            opponent_scores,
            rounds_remaining: self.rounds_remaining,
            category: self.puzzle.category().to_string(),
        }
    }

    /// Apply a spin outcome and, on money, a consonant guess
    pub fn apply_spin(&mut self, outcome: Segment, consonant: char) -> TurnEvent {
        let event = match outcome {
            Segment::Bankrupt => {
                self.players[self.current].go_bankrupt();
                TurnEvent::Bankrupt
            }
            Segment::LoseTurn => TurnEvent::LoseTurn,
            Segment::Money(amount) => self.guess_consonant(consonant, amount),
        };

        self.finish_turn(&event);
        event
    }

    /// Buy a vowel and reveal its occurrences
    pub fn buy_vowel(&mut self, vowel: char) -> TurnEvent {
        let event = if self.puzzle.is_used(vowel) {
            TurnEvent::AlreadyUsed { letter: vowel }
        } else if !self.players[self.current].spend(self.vowel_cost) {
            TurnEvent::CannotAfford
        } else {
            let count = self.puzzle.guess_letter(vowel);
            if count == 0 {
                TurnEvent::VowelMiss { letter: vowel }
            } else {
                TurnEvent::VowelHit {
                    letter: vowel,
                    count,
                }
            }
        };

        self.finish_turn(&event);
        event
    }

    /// Attempt to solve; success banks the round score and ends the round
    pub fn attempt_solve(&mut self, attempt: &str) -> TurnEvent {
        let event = if self.puzzle.matches(attempt) {
            self.puzzle.reveal_all();
            let banked = self.players[self.current].round_score();
            self.players[self.current].bank_round();
            self.solved = true;
            TurnEvent::Solved { banked }
        } else {
            TurnEvent::WrongSolve
        };

        self.finish_turn(&event);
        event
    }

    fn guess_consonant(&mut self, consonant: char, amount: u32) -> TurnEvent {
        if self.puzzle.is_used(consonant) {
            return TurnEvent::AlreadyUsed { letter: consonant };
        }

        let count = self.puzzle.guess_letter(consonant);
        if count == 0 {
            TurnEvent::LetterMiss { letter: consonant }
        } else {
            let earned = i64::from(amount) * count as i64;
            self.players[self.current].award(earned);
            TurnEvent::LetterHit {
                letter: consonant,
                count,
                earned,
            }
        }
    }

    fn finish_turn(&mut self, event: &TurnEvent) {
        if !self.solved && event.passes_turn() {
            self.current = (self.current + 1) % self.players.len();
        }
    }
}
