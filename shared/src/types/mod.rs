//! Core types used throughout the lineup builder

pub mod lineup;
pub mod player;

pub use lineup::{Lineup, MVP_MULTIPLIER, ROSTER_SIZE, UTIL_SLOTS};
pub use player::{IneligibleReason, Player, PlayerId, PlayerRecord};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any binary in the system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Command line optimizer
    Optimizer,
    /// HTTP transport
    WebServer,
    /// Engine embedded in a host that never initialized a process ID (tests, other binaries)
    Library,
}

impl ProcessId {
    /// Initialize the global process ID for the command line optimizer
    pub fn init_optimizer() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Optimizer)
    }

    /// Initialize the global process ID for webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Get the global process ID, `Library` when no binary initialized one
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Library)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Optimizer => write!(f, "optimizer"),
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Library => write!(f, "library"),
        }
    }
}
