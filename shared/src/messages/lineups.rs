//! Lineup generation request and response shapes
//!
//! Field names on the wire follow the browser client (`numLineups`,
//! `lockedMVP`, ...), Rust names follow the engine.

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::{Lineup, PlayerRecord, UTIL_SLOTS};

/// Upper bound on locked UTIL players (every UTIL slot)
pub const MAX_LOCKED_UTILS: usize = UTIL_SLOTS;

fn default_target_count() -> u32 {
    1
}

/// Input to the randomized generator
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Number of distinct lineups wanted
    #[serde(rename = "numLineups", default = "default_target_count")]
    pub target_count: u32,

    /// Contest field size; accepted and logged, not used for scoring
    #[serde(rename = "fieldSize", default)]
    pub field_size: Option<u32>,

    #[serde(rename = "lockedMVP", default)]
    pub locked_mvp: Option<PlayerRecord>,

    #[serde(rename = "lockedUTILs", default)]
    pub locked_utils: Vec<PlayerRecord>,
}

impl GenerationRequest {
    pub fn new(target_count: u32) -> Self {
        Self {
            target_count,
            field_size: None,
            locked_mvp: None,
            locked_utils: Vec::new(),
        }
    }

    pub fn with_locked_mvp(mut self, player: PlayerRecord) -> Self {
        self.locked_mvp = Some(player);
        self
    }

    pub fn with_locked_util(mut self, player: PlayerRecord) -> Self {
        self.locked_utils.push(player);
        self
    }

    pub fn with_field_size(mut self, field_size: u32) -> Self {
        self.field_size = Some(field_size);
        self
    }

    /// Reject requests that cannot be satisfied by construction
    pub fn validate(&self) -> SharedResult<()> {
        if self.target_count == 0 {
            return Err(SharedError::InvalidRequest {
                details: "numLineups must be at least 1".to_string(),
            });
        }
        if self.locked_utils.len() > MAX_LOCKED_UTILS {
            return Err(SharedError::InvalidRequest {
                details: format!(
                    "at most {MAX_LOCKED_UTILS} UTIL players can be locked, got {}",
                    self.locked_utils.len()
                ),
            });
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(default_target_count())
    }
}

/// Result of a build request; `partial` when fewer lineups than requested were found
#[derive(Serialize, Clone, Debug)]
pub struct BuildLineupsResponse {
    pub lineups: Vec<Lineup>,
    pub requested: u32,
    pub attempts_used: u32,
    pub partial: bool,
}

#[derive(Serialize, Clone, Debug)]
pub struct BestLineupResponse {
    pub lineup: Lineup,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
