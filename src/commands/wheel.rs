//! Wheel command
//!
//! Derives and displays the probability model for a wheel configuration.

use crate::core::{ConfigurationError, WheelConfiguration};
use crate::engine::WheelProbabilities;
use crate::output::print_wheel_statistics;

/// Derive and print the probability model
///
/// # Errors
/// Returns [`ConfigurationError`] for a degenerate wheel.
pub fn run_wheel(config: &WheelConfiguration) -> Result<(), ConfigurationError> {
    let probabilities = WheelProbabilities::derive(config)?;

    println!("\nWheel with {} segments", config.len());
    print_wheel_statistics(&probabilities);
    println!();

    Ok(())
}
