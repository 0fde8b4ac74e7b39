//! Tests for the player source adapters
//!
//! File and HTTP sources run against real temp files and a local mock feed;
//! every failure must surface as `PlayerSourceUnavailable`.


pub use crate::traits::*;
