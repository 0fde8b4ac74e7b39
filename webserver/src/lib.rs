//! Webserver library for the DFS lineup builder
//!
//! Serves the player pool, the best lineup and randomized lineup batches to
//! the browser client over a small JSON API.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::{WebServerState, DEFAULT_REQUEST_TIMEOUT};
pub use webserver_impl::WebServer;
