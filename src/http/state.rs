//! Application state for the HTTP server.

use std::sync::Arc;

use crate::limits::ObservatoryLimits;
use crate::queue::TaskingQueue;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Queue backend for accepted tasking requests.
    pub queue: Arc<dyn TaskingQueue>,
    /// Platform limits every submission is validated against.
    pub platform: Arc<ObservatoryLimits>,
}

impl AppState {
    /// Create a new application state with the given queue and platform.
    pub fn new(queue: Arc<dyn TaskingQueue>, platform: ObservatoryLimits) -> Self {
        Self {
            queue,
            platform: Arc::new(platform),
        }
    }
}
