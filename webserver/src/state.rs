//! Webserver state management

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Default deadline around one engine call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    /// The search cannot be interrupted, so requests are bounded from outside
    pub request_timeout: Duration,
    pub is_running: AtomicBool,
    pub request_count: AtomicU64,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr, request_timeout: Duration) -> Self {
        Self {
            bind_address,
            request_timeout,
            is_running: AtomicBool::new(true),
            request_count: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count an API request, returning the running total
    pub fn record_request(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
