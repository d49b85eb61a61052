//! Application state for the labor calculation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::LaborTables;

/// Shared application state.
///
/// Contains the statutory table set shared across all request handlers.
/// The tables are immutable after load, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// The statutory table set.
    tables: Arc<LaborTables>,
}

impl AppState {
    /// Creates a new application state with the given table set.
    pub fn new(tables: LaborTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the table set.
    pub fn tables(&self) -> &LaborTables {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_tables() {
        let state = AppState::new(LaborTables::brazil_2023());
        assert_eq!(state.tables().metadata().year, 2023);
    }
}
