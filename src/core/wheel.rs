//! Wheel segments and configuration
//!
//! A wheel is an ordered, immutable sequence of segments. All probability
//! math in the engine is derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    /// Forfeits the entire round score and passes the turn
    Bankrupt,
    /// Passes the turn, keeps the round score
    LoseTurn,
    /// Awards the amount per revealed letter on a correct consonant
    Money(u32),
}

impl Segment {
    /// Check whether this segment pays money
    #[inline]
    #[must_use]
    pub const fn is_money(self) -> bool {
        matches!(self, Self::Money(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bankrupt => write!(f, "BANKRUPT"),
            Self::LoseTurn => write!(f, "LOSE_TURN"),
            Self::Money(amount) => write!(f, "${amount}"),
        }
    }
}

/// Error type for degenerate or malformed wheel configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The wheel has no segments at all
    EmptyWheel,
    /// The wheel has no money segments, so no value statistics exist
    NoMoneySegments,
    /// A segment token in a wheel file could not be parsed
    InvalidSegment { line: usize, token: String },
    /// A money segment with a non-positive amount
    NonPositiveAmount { line: usize },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWheel => write!(f, "Wheel configuration has no segments"),
            Self::NoMoneySegments => {
                write!(f, "Wheel configuration has no money segments")
            }
            Self::InvalidSegment { line, token } => {
                write!(f, "Invalid segment '{token}' on line {line}")
            }
            Self::NonPositiveAmount { line } => {
                write!(f, "Money amount on line {line} must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// An ordered, immutable wheel configuration
///
/// Static for the lifetime of a game. Invariant: a usable wheel carries at
/// least one [`Segment::Money`]; deriving probabilities from a wheel without
/// one fails with [`ConfigurationError::NoMoneySegments`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelConfiguration {
    segments: Vec<Segment>,
}

impl WheelConfiguration {
    /// Create a configuration from an ordered segment list
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The standard 24-segment wheel
    ///
    /// Two bankrupts, one lose-a-turn, and money values from $500 to $900
    /// in $50 steps.
    #[must_use]
    pub fn standard() -> Self {
        use Segment::{Bankrupt, LoseTurn, Money};

        Self::new(vec![
            LoseTurn,
            Bankrupt,
            Money(500),
            Money(550),
            Money(600),
            Money(650),
            Money(700),
            Money(750),
            Money(800),
            Money(850),
            Money(900),
            Bankrupt,
            Money(500),
            Money(550),
            Money(600),
            Money(650),
            Money(700),
            Money(750),
            Money(800),
            Money(850),
            Money(900),
            Money(500),
            Money(550),
            Money(600),
        ])
    }

    /// Parse a configuration from segment tokens, one per line
    ///
    /// Accepted tokens: `BANKRUPT`, `LOSE_TURN`, or a positive money amount.
    /// Blank lines are skipped.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if a token is unrecognized, an amount is
    /// not positive, or no segments remain after parsing.
    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        let mut segments = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            let segment = match token {
                "BANKRUPT" => Segment::Bankrupt,
                "LOSE_TURN" => Segment::LoseTurn,
                _ => match token.parse::<u32>() {
                    Ok(0) => {
                        return Err(ConfigurationError::NonPositiveAmount { line: index + 1 });
                    }
                    Ok(amount) => Segment::Money(amount),
                    Err(_) => {
                        return Err(ConfigurationError::InvalidSegment {
                            line: index + 1,
                            token: token.to_string(),
                        });
                    }
                },
            };

            segments.push(segment);
        }

        if segments.is_empty() {
            return Err(ConfigurationError::EmptyWheel);
        }

        Ok(Self::new(segments))
    }

    /// Ordered view of the segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments on the wheel
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the wheel has no segments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
