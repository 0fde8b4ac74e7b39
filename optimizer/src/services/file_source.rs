//! Player source backed by a JSON file on disk

use std::path::PathBuf;
use async_trait::async_trait;

use shared::{process_debug, PlayerRecord, ProcessId};
use crate::error::{OptimizerError, OptimizerResult};
use crate::traits::PlayerSource;

/// Reads a JSON array of player records on every fetch
///
/// The file is re-read each time so an updated slate export is picked up
/// without a restart.
#[derive(Debug, Clone)]
pub struct RealFilePlayerSource {
    path: PathBuf,
}

impl RealFilePlayerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PlayerSource for RealFilePlayerSource {
    async fn fetch_players(&self) -> OptimizerResult<Vec<PlayerRecord>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            OptimizerError::source_unavailable(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let records: Vec<PlayerRecord> = serde_json::from_str(&contents).map_err(|e| {
            OptimizerError::source_unavailable(format!("Malformed player file {}: {}", self.path.display(), e))
        })?;

        process_debug!(
            ProcessId::current(),
            "Loaded {} player records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
