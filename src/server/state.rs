//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use mongodb::Database;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as `Database` is a reference-counted handle over the
/// driver's connection pool) for each incoming request via Axum's state
/// extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database handle for accessing persistent storage.
    ///
    /// Shared across all requests; the MongoDB driver is safe for concurrent
    /// use, so no per-request locking is needed.
    pub db: Database,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after the database
    /// connection has been established. The resulting state is then provided to
    /// the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Connected MongoDB database handle
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
