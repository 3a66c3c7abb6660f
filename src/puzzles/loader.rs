//! Puzzle loading utilities
//!
//! Provides functions to load puzzles from files or use the embedded list.

use super::PuzzleEntry;
use crate::core::validate_phrase;
use std::fs;
use std::io;
use std::path::Path;

/// Longest accepted phrase
const MAX_PHRASE_LEN: usize = 50;

/// Build an entry from raw text, normalizing case and rejecting bad phrases
fn entry_from_parts(phrase: &str, category: &str) -> Option<PuzzleEntry> {
    let phrase = phrase.trim().to_ascii_uppercase();
    let category = category.trim().to_ascii_uppercase();

    if phrase.len() > MAX_PHRASE_LEN || validate_phrase(&phrase).is_err() {
        return None;
    }

    Some(PuzzleEntry { phrase, category })
}

/// Load puzzles from a `PHRASE,CATEGORY` file
///
/// Returns the valid entries, silently skipping lines that are blank, have
/// no category column, or fail phrase validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wheel_advisor::puzzles::loader::load_from_file;
///
/// let puzzles = load_from_file("data/puzzles.csv").unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<PuzzleEntry>> {
    let content = fs::read_to_string(path)?;

    let entries = content
        .lines()
        .filter_map(|line| {
            let (phrase, category) = line.split_once(',')?;
            entry_from_parts(phrase, category)
        })
        .collect();

    Ok(entries)
}

/// Convert the embedded pair list to owned entries
///
/// # Examples
/// ```
/// use wheel_advisor::puzzles::PUZZLES;
/// use wheel_advisor::puzzles::loader::entries_from_slice;
///
/// let puzzles = entries_from_slice(PUZZLES);
/// assert_eq!(puzzles.len(), PUZZLES.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<PuzzleEntry> {
    slice
        .iter()
        .filter_map(|(phrase, category)| entry_from_parts(phrase, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_from_slice_converts_valid_pairs() {
        let input = &[("GOOD LUCK", "PHRASE"), ("POCKET WATCH", "THING")];
        let entries = entries_from_slice(input);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].phrase, "GOOD LUCK");
        assert_eq!(entries[0].category, "PHRASE");
    }

    #[test]
    fn entries_from_slice_normalizes_case() {
        let input = &[("good luck", "phrase")];
        let entries = entries_from_slice(input);

        assert_eq!(entries[0].phrase, "GOOD LUCK");
        assert_eq!(entries[0].category, "PHRASE");
    }

    #[test]
    fn entries_from_slice_skips_invalid_phrases() {
        let over_long = "A".repeat(60);
        let pairs = vec![
            ("GOOD LUCK", "PHRASE"),
            ("BAD!PHRASE", "PHRASE"),
            (over_long.as_str(), "PHRASE"),
            ("", "PHRASE"),
        ];
        let entries = entries_from_slice(&pairs);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].phrase, "GOOD LUCK");
    }

    #[test]
    fn embedded_list_is_fully_valid() {
        use crate::puzzles::{PUZZLES, PUZZLE_COUNT};

        let entries = entries_from_slice(PUZZLES);
        assert_eq!(entries.len(), PUZZLE_COUNT);
    }
}
