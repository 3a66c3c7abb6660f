//! Puzzle source
//!
//! Embedded default puzzles plus a `PHRASE,CATEGORY` file loader. The
//! engine never queries this module directly; turn controllers draw
//! puzzles here and hand the engine snapshots.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLE_COUNT};
use serde::{Deserialize, Serialize};

/// One loadable puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleEntry {
    /// Uppercase phrase, words separated by single spaces
    pub phrase: String,
    /// Uppercase category, free text
    pub category: String,
}
