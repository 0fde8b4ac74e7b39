//! Shared types for the DFS lineup builder
//!
//! Contains the player and lineup records every crate agrees on, the
//! request/response messages the transport speaks, and tracing setup.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    BestLineupResponse, BuildLineupsResponse, ErrorResponse, GenerationRequest, MAX_LOCKED_UTILS,
};

// Used by the process_* macros so callers need no direct tracing import
#[doc(hidden)]
pub use tracing;
