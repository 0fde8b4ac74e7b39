//! Message types exchanged between the engine and its callers
//!
//! - `lineups`: lineup generation requests and the responses the transport returns

pub mod lineups;

pub use lineups::{
    BestLineupResponse, BuildLineupsResponse, ErrorResponse, GenerationRequest, MAX_LOCKED_UTILS,
};
