//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use quote_plugin_core::Dispatcher;

/// Default request body limit in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across handlers.
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub max_body_bytes: usize,
    request_count: AtomicU64,
    fault_count: AtomicU64,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_count: AtomicU64::new(0),
            fault_count: AtomicU64::new(0),
        }
    }

    /// Override the `/run` body limit.
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Plugin id stamped on envelopes when the request has none.
    pub fn default_plugin_id(&self) -> &str {
        self.dispatcher.default_plugin_id()
    }

    /// Invocations received on `/run`.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Invocations answered with a 500.
    pub fn fault_count(&self) -> u64 {
        self.fault_count.load(Ordering::Relaxed)
    }

    pub fn increment_faults(&self) {
        self.fault_count.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_plugin_core::CapabilityRegistry;

    fn state() -> AppState {
        let registry = Arc::new(CapabilityRegistry::new("get_quote"));
        AppState::new(Arc::new(Dispatcher::new(registry, "quote")))
    }

    #[test]
    fn test_counters_start_at_zero() {
        let state = state();
        assert_eq!(state.request_count(), 0);
        assert_eq!(state.fault_count(), 0);
    }

    #[test]
    fn test_counters_increment() {
        let state = state();
        state.increment_requests();
        state.increment_requests();
        state.increment_faults();
        assert_eq!(state.request_count(), 2);
        assert_eq!(state.fault_count(), 1);
    }

    #[test]
    fn test_body_limit() {
        assert_eq!(state().max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(state().with_max_body_bytes(10).max_body_bytes, 10);
    }

    #[test]
    fn test_default_plugin_id() {
        assert_eq!(state().default_plugin_id(), "quote");
    }
}
