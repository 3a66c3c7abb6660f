//! The strategic decision engine
//!
//! Every component here is a pure computation over a read-only snapshot:
//! no I/O, no randomness, no state between calls. Multiple recommendations
//! may be computed independently and in parallel.

pub mod expected_value;
pub mod letters;
pub mod policy;
pub mod risk;
pub mod solve;
pub mod wheel_model;

pub use expected_value::{SolveValue, SpinValue, Tunables, VowelValue};
pub use letters::{LetterRanking, LetterScore, is_vowel, rank_letters};
pub use policy::{Action, Recommendation, recommend};
pub use risk::{RiskAssessment, RiskLevel, StrategicPosition, StrategyHint};
pub use solve::SolveLikelihood;
pub use wheel_model::WheelProbabilities;

use crate::core::{ConfigurationError, InvalidStateError};
use std::fmt;

/// Error produced by a single recommendation call
///
/// Failures are local to the call: the snapshot and wheel configuration
/// are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The wheel configuration cannot support expected-value math
    Configuration(ConfigurationError),
    /// The snapshot is malformed, indicating a caller bug
    InvalidState(InvalidStateError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "Configuration error: {e}"),
            Self::InvalidState(e) => write!(f, "Invalid game state: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::InvalidState(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for EngineError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<InvalidStateError> for EngineError {
    fn from(e: InvalidStateError) -> Self {
        Self::InvalidState(e)
    }
}
