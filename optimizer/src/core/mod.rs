//! Lineup construction engine
//!
//! Pure, synchronous algorithms. Nothing here performs I/O or keeps state
//! between calls; the async facade in [`crate::engine`] feeds them records.

pub mod constraints;
pub mod eligibility;
pub mod exhaustive;
pub mod generator;
pub mod uniqueness;

pub use constraints::{RosterRules, RosterViolation};
pub use eligibility::{candidate_slice, eligible_players};
pub use exhaustive::ExhaustiveOptimizer;
pub use generator::{GenerationOutcome, LineupGenerator};
pub use uniqueness::{is_duplicate, LineupSignature, UniquenessStats, UniquenessTracker};
