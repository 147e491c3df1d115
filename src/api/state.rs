//! Application state for the Training Report Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::pipeline::ReportEngine;

/// Shared application state.
///
/// Holds the configured report engine. The engine keeps no mutable state,
/// so concurrent requests process independently.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ReportEngine>,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: ReportEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the report engine.
    pub fn engine(&self) -> &ReportEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
