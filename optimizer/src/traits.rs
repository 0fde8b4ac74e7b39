//! Optimizer trait definitions for dependency injection

use async_trait::async_trait;

use shared::PlayerRecord;
use crate::error::OptimizerResult;

/// Supplier of the candidate players for one slate
///
/// Called once per engine operation; implementations must not assume the
/// engine caches anything between calls.
#[mockall::automock]
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Fetch every candidate record for the current slate
    async fn fetch_players(&self) -> OptimizerResult<Vec<PlayerRecord>>;

    /// Short human-readable origin for logs
    fn describe(&self) -> String;
}
