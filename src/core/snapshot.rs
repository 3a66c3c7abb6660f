//! Read-only game snapshot
//!
//! The sole input to the decision engine. The caller rebuilds it fresh for
//! every decision point; the engine never retains it across calls.

use super::puzzle::{BLANK, InvalidStateError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Everything the engine needs to know about one decision point
///
/// Serializes to camelCase JSON; see the crate docs for the wire contract.
///
/// # Examples
/// ```
/// use wheel_advisor::core::GameSnapshot;
///
/// let snapshot = GameSnapshot {
///     phrase: None,
///     revealed_mask: "T_E _U_C_".to_string(),
///     used_letters: vec!['T', 'E', 'C'],
///     round_score: 800,
///     opponent_scores: vec![600, 400],
///     rounds_remaining: 2,
///     category: "PHRASE".to_string(),
/// };
/// assert!(snapshot.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Full answer when the caller knows it (turn controllers do, a human
    /// asking for advice does not)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    /// Revealed board, hidden letter cells as `_`
    pub revealed_mask: String,
    /// Letters already guessed; order is display-only
    pub used_letters: Vec<char>,
    /// Acting player's at-risk money this round
    pub round_score: i64,
    /// Opponents' effective scores (banked total plus round)
    pub opponent_scores: Vec<i64>,
    /// Rounds left in the game, counting the current one
    pub rounds_remaining: u32,
    /// Puzzle category, free text
    pub category: String,
}

impl GameSnapshot {
    /// Check the snapshot for caller bugs
    ///
    /// # Errors
    /// Returns `InvalidStateError::EmptyMask` for an empty revealed mask, or
    /// `InvalidStateError::MaskMismatch` when a known phrase and the mask are
    /// not aligned 1:1.
    pub fn validate(&self) -> Result<(), InvalidStateError> {
        if self.revealed_mask.is_empty() {
            return Err(InvalidStateError::EmptyMask);
        }

        if let Some(phrase) = &self.phrase {
            let mask_cells = self.revealed_mask.chars().count();
            let phrase_cells = phrase.chars().count();
            if mask_cells != phrase_cells {
                return Err(InvalidStateError::MaskMismatch {
                    mask: mask_cells,
                    phrase: phrase_cells,
                });
            }
        }

        Ok(())
    }

    /// Used letters as a set, uppercased
    #[must_use]
    pub fn used_set(&self) -> FxHashSet<char> {
        self.used_letters
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    /// Number of letter cells in the mask (revealed letters plus blanks)
    #[must_use]
    pub fn total_letter_cells(&self) -> usize {
        self.revealed_mask
            .chars()
            .filter(|c| c.is_ascii_uppercase() || *c == BLANK)
            .count()
    }

    /// Number of revealed letter cells in the mask
    #[must_use]
    pub fn revealed_letter_cells(&self) -> usize {
        self.revealed_mask
            .chars()
            .filter(char::is_ascii_uppercase)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(mask: &str) -> GameSnapshot {
        GameSnapshot {
            phrase: None,
            revealed_mask: mask.to_string(),
            used_letters: Vec::new(),
            round_score: 0,
            opponent_scores: Vec::new(),
            rounds_remaining: 1,
            category: String::new(),
        }
    }

    #[test]
    fn validate_rejects_empty_mask() {
        let snap = snapshot("");
        assert_eq!(snap.validate(), Err(InvalidStateError::EmptyMask));
    }

    #[test]
    fn validate_rejects_mask_phrase_mismatch() {
        let mut snap = snapshot("____");
        snap.phrase = Some("GOOD LUCK".to_string());

        assert_eq!(
            snap.validate(),
            Err(InvalidStateError::MaskMismatch { mask: 4, phrase: 9 })
        );
    }

    #[test]
    fn validate_accepts_aligned_phrase() {
        let mut snap = snapshot("____ ____");
        snap.phrase = Some("GOOD LUCK".to_string());

        assert!(snap.validate().is_ok());
    }

    #[test]
    fn cell_counts_ignore_punctuation() {
        let snap = snapshot("_O__ & R___");

        assert_eq!(snap.total_letter_cells(), 8);
        assert_eq!(snap.revealed_letter_cells(), 2);
    }

    #[test]
    fn used_set_uppercases() {
        let mut snap = snapshot("____");
        snap.used_letters = vec!['t', 'E'];

        let set = snap.used_set();
        assert!(set.contains(&'T'));
        assert!(set.contains(&'E'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let snap = snapshot("T__");
        let json = serde_json::to_string(&snap).unwrap();

        assert!(json.contains("\"revealedMask\""));
        assert!(json.contains("\"usedLetters\""));
        assert!(json.contains("\"roundScore\""));
        assert!(json.contains("\"opponentScores\""));
        assert!(json.contains("\"roundsRemaining\""));
        assert!(!json.contains("\"phrase\""));
    }

    #[test]
    fn round_trips_through_json() {
        let mut snap = snapshot("T_E _U_C_");
        snap.used_letters = vec!['T', 'E', 'C'];
        snap.round_score = 800;
        snap.opponent_scores = vec![600, 400];
        snap.category = "PHRASE".to_string();

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snap);
    }
}
