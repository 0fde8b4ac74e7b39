//! Player source implementations

pub mod file_source;
pub mod http_source;
pub mod memory_source;

#[cfg(test)]
pub mod tests;

pub use file_source::*;
pub use http_source::*;
pub use memory_source::*;

use async_trait::async_trait;

use shared::PlayerRecord;
use crate::error::OptimizerResult;
use crate::traits::PlayerSource;

/// Source chosen at startup from command-line flags
pub enum ConfiguredPlayerSource {
    File(RealFilePlayerSource),
    Http(RealHttpPlayerSource),
}

#[async_trait]
impl PlayerSource for ConfiguredPlayerSource {
    async fn fetch_players(&self) -> OptimizerResult<Vec<PlayerRecord>> {
        match self {
            Self::File(source) => source.fetch_players().await,
            Self::Http(source) => source.fetch_players().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(source) => source.describe(),
            Self::Http(source) => source.describe(),
        }
    }
}
