//! Wheel Advisor
//!
//! A strategy advisor for the letter-guessing wheel game: combines a static
//! wheel-probability model, letter-frequency heuristics, and expected-value
//! modeling into one deterministic, explainable recommendation per turn.
//!
//! # Quick Start
//!
//! ```rust
//! use wheel_advisor::core::{GameSnapshot, WheelConfiguration};
//! use wheel_advisor::engine::{Tunables, recommend};
//!
//! let snapshot = GameSnapshot {
//!     phrase: None,
//!     revealed_mask: "T_E _U_C_".to_string(),
//!     used_letters: vec!['T', 'E', 'C'],
//!     round_score: 800,
//!     opponent_scores: vec![600, 400],
//!     rounds_remaining: 2,
//!     category: "PHRASE".to_string(),
//! };
//!
//! let wheel = WheelConfiguration::standard();
//! let recommendation = recommend(&snapshot, &wheel, &Tunables::default()).unwrap();
//! println!("{:?}: {}", recommendation.action, recommendation.reasoning[0]);
//! ```

// Core domain types
pub mod core;

// The strategic decision engine
pub mod engine;

// Turn controller, AI seat, and wheel RNG
pub mod game;

// Puzzle data
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
