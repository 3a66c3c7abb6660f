//! Formatting utilities for terminal output

use crate::engine::Action;

/// Create a progress bar string
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = (probability.clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a probability as a percentage
#[must_use]
pub fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Format a dollar value, negatives with the sign before the symbol
#[must_use]
pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.0}", -value)
    } else {
        format!("${value:.0}")
    }
}

/// Banner label for an action
#[must_use]
pub const fn action_label(action: Action) -> &'static str {
    match action {
        Action::Spin => "SPIN THE WHEEL",
        Action::BuyVowel => "BUY A VOWEL",
        Action::Solve => "SOLVE THE PUZZLE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_empty() {
        assert_eq!(probability_bar(0.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn bar_full() {
        assert_eq!(probability_bar(1.0, 10), "██████████");
    }

    #[test]
    fn bar_half() {
        assert_eq!(probability_bar(0.5, 10), "█████░░░░░");
    }

    #[test]
    fn bar_clamps_out_of_range() {
        assert_eq!(probability_bar(1.5, 4), "████");
        assert_eq!(probability_bar(-0.5, 4), "░░░░");
    }

    #[test]
    fn percent_formats_one_decimal() {
        assert_eq!(percent(0.875), "87.5%");
        assert_eq!(percent(0.0833333), "8.3%");
    }

    #[test]
    fn money_handles_sign() {
        assert_eq!(money(678.57), "$679");
        assert_eq!(money(-183.3), "-$183");
        assert_eq!(money(0.0), "$0");
    }

    #[test]
    fn action_labels() {
        assert_eq!(action_label(Action::Spin), "SPIN THE WHEEL");
        assert_eq!(action_label(Action::BuyVowel), "BUY A VOWEL");
        assert_eq!(action_label(Action::Solve), "SOLVE THE PUZZLE");
    }
}
