//! Letter probability estimation
//!
//! Scores every unused letter by how likely it is to appear in the puzzle,
//! combining a fixed English-frequency base with boosts from the category,
//! from recognizable fragments in the revealed pattern, and from letters
//! commonly adjacent to ones already showing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Score divisor and probability cap for consonants
const CONSONANT_SCALE: f64 = 15.0;
const CONSONANT_CAP: f64 = 0.9;

/// Score divisor and probability cap for vowels
const VOWEL_SCALE: f64 = 12.0;
const VOWEL_CAP: f64 = 0.8;

/// Boost added when the category names a known puzzle type
const CATEGORY_BOOST: f64 = 2.0;

/// Boost added for `_ING` / `TH_` fragments in the revealed pattern
const FRAGMENT_BOOST: f64 = 3.0;

/// Per-letter English frequency weight (percent of running text)
///
/// Monotonically decreasing from T down to Z. Letters absent from the
/// table score a default weight of 1.
fn consonant_frequency(letter: char) -> Option<f64> {
    let weight = match letter {
        'T' => 9.056,
        'N' => 6.749,
        'S' => 6.327,
        'H' => 6.094,
        'R' => 5.987,
        'D' => 4.253,
        'L' => 4.025,
        'C' => 2.782,
        'M' => 2.406,
        'W' => 2.360,
        'F' => 2.228,
        'G' => 2.015,
        'Y' => 1.974,
        'P' => 1.929,
        'B' => 1.292,
        'V' => 0.978,
        'K' => 0.772,
        'J' => 0.153,
        'X' => 0.150,
        'Q' => 0.095,
        'Z' => 0.074,
        _ => return None,
    };
    Some(weight)
}

/// Fixed base score per vowel
fn vowel_base(letter: char) -> f64 {
    match letter {
        'E' => 8.0,
        'A' => 6.0,
        'I' | 'O' => 4.0,
        _ => 2.0, // U
    }
}

/// Letters commonly adjacent to the given one in English text
///
/// Distilled from common-bigram data; the context boost adds one point per
/// adjacent letter already showing in the revealed pattern.
fn adjacent_letters(letter: char) -> &'static [char] {
    match letter {
        'A' => &['N', 'T', 'R', 'L'],
        'B' => &['E', 'L', 'A', 'R'],
        'C' => &['H', 'E', 'A', 'K'],
        'D' => &['E', 'N', 'A', 'I'],
        'E' => &['R', 'S', 'N', 'D'],
        'F' => &['O', 'R', 'E', 'A'],
        'G' => &['N', 'I', 'E', 'H'],
        'H' => &['T', 'E', 'A', 'I'],
        'I' => &['N', 'T', 'S', 'O'],
        'K' => &['E', 'C', 'I', 'N'],
        'L' => &['E', 'A', 'I', 'Y'],
        'M' => &['E', 'A', 'O', 'P'],
        'N' => &['G', 'D', 'E', 'A'],
        'O' => &['N', 'R', 'U', 'F'],
        'P' => &['E', 'R', 'A', 'L'],
        'R' => &['E', 'A', 'O', 'T'],
        'S' => &['T', 'E', 'H', 'I'],
        'T' => &['H', 'E', 'S', 'R'],
        'U' => &['R', 'N', 'S', 'T'],
        'V' => &['E', 'I', 'A', 'O'],
        'W' => &['H', 'A', 'I', 'E'],
        'Y' => &['O', 'E', 'L', 'T'],
        _ => &[],
    }
}

/// Consonants favored by a category keyword
fn category_boost_set(category: &str) -> &'static [char] {
    if category.contains("PHRASE") {
        &['T', 'H', 'E', 'R', 'S']
    } else if category.contains("PERSON") {
        &['N', 'R', 'S', 'T']
    } else if category.contains("PLACE") {
        &['N', 'R', 'S', 'L']
    } else {
        &[]
    }
}

/// One scored letter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterScore {
    pub letter: char,
    /// Raw additive score before scaling
    pub score: f64,
    /// Capped estimate that the letter appears in the puzzle
    pub probability: f64,
}

/// Ranked consonants and vowels for one board state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterRanking {
    /// Unused consonants, best first
    pub consonants: Vec<LetterScore>,
    /// Unused vowels, best first
    pub vowels: Vec<LetterScore>,
}

impl LetterRanking {
    /// The single best consonant, if any remain
    #[must_use]
    pub fn best_consonant(&self) -> Option<&LetterScore> {
        self.consonants.first()
    }

    /// The two best consonants, fewer if the alphabet is running out
    #[must_use]
    pub fn top_consonants(&self) -> &[LetterScore] {
        &self.consonants[..self.consonants.len().min(2)]
    }

    /// The single best vowel, if any remain
    #[must_use]
    pub fn top_vowel(&self) -> Option<&LetterScore> {
        self.vowels.first()
    }
}

/// Whether a letter is one of the five vowels
#[inline]
#[must_use]
pub const fn is_vowel(letter: char) -> bool {
    matches!(letter, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Rank every unused letter for the given board state
///
/// Pure function of its inputs: identical masks, used sets, and categories
/// always produce identical rankings. Ties break alphabetically so the
/// ordering is reproducible.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wheel_advisor::engine::rank_letters;
///
/// let ranking = rank_letters("____ ____", &FxHashSet::default(), "");
/// assert_eq!(ranking.best_consonant().unwrap().letter, 'T');
/// assert_eq!(ranking.top_vowel().unwrap().letter, 'E');
/// ```
#[must_use]
pub fn rank_letters(mask: &str, used: &FxHashSet<char>, category: &str) -> LetterRanking {
    let mut consonants = Vec::new();
    let mut vowels = Vec::new();

    for letter in 'A'..='Z' {
        if used.contains(&letter) {
            continue;
        }

        if is_vowel(letter) {
            let score = vowel_base(letter) + context_boost(letter, mask);
            vowels.push(LetterScore {
                letter,
                score,
                probability: (score / VOWEL_SCALE).min(VOWEL_CAP),
            });
        } else {
            let base = consonant_frequency(letter).unwrap_or(1.0);
            let score = base + pattern_boost(letter, mask, category) + context_boost(letter, mask);
            consonants.push(LetterScore {
                letter,
                score,
                probability: (score / CONSONANT_SCALE).min(CONSONANT_CAP),
            });
        }
    }

    sort_ranked(&mut consonants);
    sort_ranked(&mut vowels);

    LetterRanking { consonants, vowels }
}

/// Descending score, alphabetical within ties
fn sort_ranked(scores: &mut [LetterScore]) {
    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.letter.cmp(&b.letter))
    });
}

/// Boost from the category and from recognizable fragments on the board
fn pattern_boost(letter: char, mask: &str, category: &str) -> f64 {
    let mut boost = 0.0;

    if category_boost_set(category).contains(&letter) {
        boost += CATEGORY_BOOST;
    }

    if mask.contains("_ING") && matches!(letter, 'T' | 'S' | 'R') {
        boost += FRAGMENT_BOOST;
    }

    if mask.contains("TH_") && matches!(letter, 'E' | 'A' | 'I') {
        boost += FRAGMENT_BOOST;
    }

    boost
}

/// One point per commonly-adjacent letter already showing on the board
fn context_boost(letter: char, mask: &str) -> f64 {
    adjacent_letters(letter)
        .iter()
        .filter(|neighbor| mask.contains(**neighbor))
        .count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(letters: &[char]) -> FxHashSet<char> {
        letters.iter().copied().collect()
    }

    #[test]
    fn fresh_board_ranks_t_and_e_first() {
        let ranking = rank_letters("____ ____", &FxHashSet::default(), "");

        assert_eq!(ranking.best_consonant().unwrap().letter, 'T');
        assert_eq!(ranking.top_vowel().unwrap().letter, 'E');
    }

    #[test]
    fn fresh_board_probabilities() {
        let ranking = rank_letters("____ ____", &FxHashSet::default(), "");

        // T: 9.056 / 15, E: 8 / 12, neither hits its cap
        let t = ranking.best_consonant().unwrap();
        assert!((t.probability - 9.056 / 15.0).abs() < 1e-12);

        let e = ranking.top_vowel().unwrap();
        assert!((e.probability - 8.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn used_letters_are_excluded() {
        let ranking = rank_letters("____", &used(&['T', 'E']), "");

        assert!(ranking.consonants.iter().all(|s| s.letter != 'T'));
        assert!(ranking.vowels.iter().all(|s| s.letter != 'E'));
        assert_eq!(ranking.best_consonant().unwrap().letter, 'N');
        assert_eq!(ranking.top_vowel().unwrap().letter, 'A');
    }

    #[test]
    fn all_letters_used_gives_empty_ranking() {
        let everything: FxHashSet<char> = ('A'..='Z').collect();
        let ranking = rank_letters("____", &everything, "");

        assert!(ranking.consonants.is_empty());
        assert!(ranking.vowels.is_empty());
        assert!(ranking.best_consonant().is_none());
        assert!(ranking.top_vowel().is_none());
        assert!(ranking.top_consonants().is_empty());
    }

    #[test]
    fn phrase_category_boosts_its_consonants() {
        let plain = rank_letters("____", &FxHashSet::default(), "");
        let phrase = rank_letters("____", &FxHashSet::default(), "PHRASE");

        let score_of = |ranking: &LetterRanking, letter: char| {
            ranking
                .consonants
                .iter()
                .find(|s| s.letter == letter)
                .map(|s| s.score)
                .unwrap()
        };

        assert!((score_of(&phrase, 'T') - score_of(&plain, 'T') - 2.0).abs() < 1e-12);
        assert!((score_of(&phrase, 'H') - score_of(&plain, 'H') - 2.0).abs() < 1e-12);
        // B is in no boost set
        assert!((score_of(&phrase, 'B') - score_of(&plain, 'B')).abs() < 1e-12);
    }

    #[test]
    fn unknown_category_applies_no_boost() {
        let plain = rank_letters("____", &FxHashSet::default(), "");
        let odd = rank_letters("____", &FxHashSet::default(), "AROUND THE HOUSE");

        assert_eq!(plain, odd);
    }

    #[test]
    fn ing_fragment_boosts_t_s_r() {
        // _ING present; S picks up +3 over its frequency-only score,
        // plus context from the visible I/N/G
        let ranking = rank_letters("____ _ING", &used(&['I', 'N', 'G']), "");

        let s = ranking
            .consonants
            .iter()
            .find(|score| score.letter == 'S')
            .unwrap();
        // base 6.327 + fragment 3 + context (I of T,E,H,I visible → 1)
        assert!((s.score - (6.327 + 3.0 + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn context_boost_counts_visible_neighbors() {
        // R's neighbors are E, A, O, T; E and T are showing
        let boost = context_boost('R', "T_E ____");
        assert!((boost - 2.0).abs() < 1e-12);

        // Nothing showing, nothing boosted
        let none = context_boost('R', "___ ____");
        assert!(none.abs() < 1e-12);
    }

    #[test]
    fn probability_is_capped() {
        // Stack every boost on T: category +2, _ING +3, context
        let ranking = rank_letters("TH_ _ING", &used(&['I', 'N', 'G', 'H']), "PHRASE");

        let t = ranking
            .consonants
            .iter()
            .find(|score| score.letter == 'T')
            .unwrap();
        assert!(t.score > 13.5);
        assert!((t.probability - 0.9).abs() < 1e-12);
    }

    #[test]
    fn vowel_probability_is_capped() {
        // E with enough visible neighbors crosses the 0.8 cap
        let ranking = rank_letters("R_SN_D TH_", &used(&['R', 'S', 'N', 'D', 'T', 'H']), "");

        let e = ranking.top_vowel().unwrap();
        assert_eq!(e.letter, 'E');
        // base 8 + all four neighbors visible = 12 → 1.0 before the cap
        assert!((e.probability - 0.8).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_deterministic() {
        let first = rank_letters("T_E _U_C_", &used(&['T', 'E', 'C']), "PHRASE");
        let second = rank_letters("T_E _U_C_", &used(&['T', 'E', 'C']), "PHRASE");

        assert_eq!(first, second);
    }

    #[test]
    fn ties_break_alphabetically() {
        // I and O share the same vowel base; with no context both score 4
        let ranking = rank_letters("____", &used(&['E', 'A']), "");

        let letters: Vec<char> = ranking.vowels.iter().map(|s| s.letter).collect();
        assert_eq!(letters, vec!['I', 'O', 'U']);
    }

    #[test]
    fn top_consonants_returns_at_most_two() {
        let ranking = rank_letters("____", &FxHashSet::default(), "");

        let top = ranking.top_consonants();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].letter, 'T');
        assert_eq!(top[1].letter, 'N');
    }
}
