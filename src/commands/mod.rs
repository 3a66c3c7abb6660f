//! Command implementations

pub mod advise;
pub mod analyze;
pub mod play;
pub mod simulate;
pub mod wheel;

pub use advise::{advise_snapshot, recommendation_to_json};
pub use analyze::{AnalysisReport, analyze_snapshot};
pub use play::run_play;
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation};
pub use wheel::run_wheel;
