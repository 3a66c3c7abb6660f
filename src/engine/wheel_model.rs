//! Static wheel probability model
//!
//! Derives outcome probabilities and money statistics from a wheel
//! configuration. Purely positional: every segment is equally likely, so
//! the model involves no randomness and re-deriving it is idempotent.

use crate::core::{ConfigurationError, Segment, WheelConfiguration};
use serde::{Deserialize, Serialize};

/// Outcome probabilities and money statistics for a wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelProbabilities {
    /// Chance of landing on a bankrupt segment
    pub bankrupt_probability: f64,
    /// Chance of landing on a lose-a-turn segment
    pub lose_turn_probability: f64,
    /// Chance of landing on any money segment
    pub money_probability: f64,
    /// Arithmetic mean over money segments only
    pub average_money_value: f64,
    /// Smallest money amount on the wheel
    pub min_money_value: u32,
    /// Largest money amount on the wheel
    pub max_money_value: u32,
}

impl WheelProbabilities {
    /// Derive the model from a configuration
    ///
    /// The three probabilities always sum to 1.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::EmptyWheel`] for a wheel with no
    /// segments, or [`ConfigurationError::NoMoneySegments`] for a wheel
    /// without a single money segment. Every expected-value formula
    /// downstream divides by money statistics, so this is unrecoverable
    /// and must not be defaulted away.
    ///
    /// # Examples
    /// ```
    /// use wheel_advisor::core::WheelConfiguration;
    /// use wheel_advisor::engine::WheelProbabilities;
    ///
    /// let wheel = WheelConfiguration::standard();
    /// let probs = WheelProbabilities::derive(&wheel).unwrap();
    /// assert!((probs.money_probability - 0.875).abs() < 1e-12);
    /// ```
    pub fn derive(config: &WheelConfiguration) -> Result<Self, ConfigurationError> {
        if config.is_empty() {
            return Err(ConfigurationError::EmptyWheel);
        }

        let total = config.len() as f64;
        let mut bankrupts = 0usize;
        let mut lose_turns = 0usize;
        let mut money_sum = 0u64;
        let mut money_count = 0usize;
        let mut min_money = u32::MAX;
        let mut max_money = 0u32;

        for segment in config.segments() {
            match *segment {
                Segment::Bankrupt => bankrupts += 1,
                Segment::LoseTurn => lose_turns += 1,
                Segment::Money(amount) => {
                    money_sum += u64::from(amount);
                    money_count += 1;
                    min_money = min_money.min(amount);
                    max_money = max_money.max(amount);
                }
            }
        }

        if money_count == 0 {
            return Err(ConfigurationError::NoMoneySegments);
        }

        Ok(Self {
            bankrupt_probability: bankrupts as f64 / total,
            lose_turn_probability: lose_turns as f64 / total,
            money_probability: money_count as f64 / total,
            average_money_value: money_sum as f64 / money_count as f64,
            min_money_value: min_money,
            max_money_value: max_money,
        })
    }
}
