//! Showdown lineup optimizer library
//!
//! Provides the lineup construction engine (exhaustive best-lineup search and
//! randomized multi-lineup generation), the player sources that feed it, and
//! export helpers for finished lineups.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod export;
pub mod services;
pub mod traits;

// Re-export main types
pub use config::{EngineArgs, EngineConfig};
pub use crate::core::{ExhaustiveOptimizer, GenerationOutcome, LineupGenerator, RosterRules, RosterViolation};
pub use engine::{request_with_locked_ids, LineupEngine};
pub use error::{OptimizerError, OptimizerResult};
pub use services::*;
pub use traits::*;
