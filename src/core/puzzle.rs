//! Puzzle board state
//!
//! A `PuzzleState` tracks the hidden phrase, its category, which cells are
//! revealed, and which letters have been guessed. Non-letter cells (spaces,
//! `&`, `'`, `-`) are revealed from the start.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder character for hidden cells in a revealed mask
pub const BLANK: char = '_';

/// Error type for malformed puzzle or snapshot state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    /// The phrase has no characters
    EmptyPhrase,
    /// The phrase contains a character outside `A-Z &'-`
    InvalidCharacter(char),
    /// The phrase has leading, trailing, or doubled spaces
    MalformedSpacing,
    /// The revealed mask has no cells
    EmptyMask,
    /// The revealed mask is not aligned 1:1 with the phrase
    MaskMismatch { mask: usize, phrase: usize },
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhrase => write!(f, "Puzzle phrase is empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Puzzle phrase contains invalid character '{c}'")
            }
            Self::MalformedSpacing => {
                write!(f, "Puzzle phrase must separate words with single spaces")
            }
            Self::EmptyMask => write!(f, "Revealed mask is empty"),
            Self::MaskMismatch { mask, phrase } => {
                write!(
                    f,
                    "Revealed mask has {mask} cells but phrase has {phrase}"
                )
            }
        }
    }
}

impl std::error::Error for InvalidStateError {}

/// Check that a phrase is uppercase `A-Z &'-` with single-space words
///
/// # Errors
/// Returns `InvalidStateError` describing the first violation found.
pub fn validate_phrase(phrase: &str) -> Result<(), InvalidStateError> {
    if phrase.is_empty() {
        return Err(InvalidStateError::EmptyPhrase);
    }

    if let Some(bad) = phrase
        .chars()
        .find(|c| !(c.is_ascii_uppercase() || matches!(c, ' ' | '&' | '\'' | '-')))
    {
        return Err(InvalidStateError::InvalidCharacter(bad));
    }

    if phrase.starts_with(' ') || phrase.ends_with(' ') || phrase.contains("  ") {
        return Err(InvalidStateError::MalformedSpacing);
    }

    Ok(())
}

/// Board state for one puzzle round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleState {
    phrase: String,
    category: String,
    revealed: Vec<bool>,
    used_letters: FxHashSet<char>,
}

impl PuzzleState {
    /// Create a fresh puzzle with all letters hidden
    ///
    /// # Errors
    /// Returns `InvalidStateError` if the phrase is empty, contains a
    /// character outside `A-Z &'-`, or has malformed spacing.
    pub fn new(
        phrase: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, InvalidStateError> {
        let phrase: String = phrase.into();
        validate_phrase(&phrase)?;

        // Non-letter cells are visible from the start
        let revealed = phrase.chars().map(|c| !c.is_ascii_uppercase()).collect();

        Ok(Self {
            phrase,
            category: category.into(),
            revealed,
            used_letters: FxHashSet::default(),
        })
    }

    /// The hidden phrase
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The puzzle category
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Letters guessed so far (consonants and vowels)
    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> &FxHashSet<char> {
        &self.used_letters
    }

    /// Whether a letter has already been guessed
    #[inline]
    #[must_use]
    pub fn is_used(&self, letter: char) -> bool {
        self.used_letters.contains(&letter.to_ascii_uppercase())
    }

    /// Guess a letter, revealing every cell holding it
    ///
    /// Marks the letter used and returns the number of cells revealed.
    /// Returns 0 for a letter that does not appear (the guess still counts
    /// as used).
    pub fn guess_letter(&mut self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.used_letters.insert(letter);

        let mut count = 0;
        for (cell, revealed) in self.phrase.chars().zip(self.revealed.iter_mut()) {
            if cell == letter && !*revealed {
                *revealed = true;
                count += 1;
            }
        }

        count
    }

    /// Reveal every cell, e.g. after a successful solve
    pub fn reveal_all(&mut self) {
        for cell in &mut self.revealed {
            *cell = true;
        }
    }

    /// Render the revealed mask, hidden cells as [`BLANK`]
    #[must_use]
    pub fn mask(&self) -> String {
        self.phrase
            .chars()
            .zip(self.revealed.iter())
            .map(|(c, &revealed)| if revealed { c } else { BLANK })
            .collect()
    }

    /// Whether an attempted solution matches the phrase
    #[must_use]
    pub fn matches(&self, attempt: &str) -> bool {
        attempt.trim().eq_ignore_ascii_case(&self.phrase)
    }

    /// Whether every letter cell is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Number of letter cells in the phrase
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.phrase.chars().filter(char::is_ascii_uppercase).count()
    }

    /// Number of letter cells currently revealed
    #[must_use]
    pub fn revealed_letter_count(&self) -> usize {
        self.phrase
            .chars()
            .zip(self.revealed.iter())
            .filter(|(c, revealed)| c.is_ascii_uppercase() && **revealed)
            .count()
    }
}
