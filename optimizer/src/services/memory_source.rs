//! Fixed in-memory player pool

use async_trait::async_trait;

use shared::PlayerRecord;
use crate::error::OptimizerResult;
use crate::traits::PlayerSource;

/// Serves the same records on every fetch
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerSource {
    records: Vec<PlayerRecord>,
}

impl InMemoryPlayerSource {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl PlayerSource for InMemoryPlayerSource {
    async fn fetch_players(&self) -> OptimizerResult<Vec<PlayerRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory pool of {} records", self.records.len())
    }
}
