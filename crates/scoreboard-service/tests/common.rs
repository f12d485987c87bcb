//! Common test utilities for scoreboard integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use scoreboard_service::{create_router, AppState, ServiceConfig};
use scoreboard_store::{MemoryStore, MongoStore, ScoreStore};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The in-memory store behind the server, when one is used.
    pub store: Option<Arc<MemoryStore>>,
}

impl TestHarness {
    /// Create a harness backed by a fresh in-memory store.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let server = Self::server_with(store.clone(), test_config());

        Self {
            server,
            store: Some(store),
        }
    }

    /// Create a harness whose document store never connected.
    pub fn disconnected() -> Self {
        let store = Arc::new(MongoStore::new("mongodb://127.0.0.1:1/scoreboard", None));
        let server = Self::server_with(store, test_config());

        Self {
            server,
            store: None,
        }
    }

    /// Create a harness with a custom configuration.
    pub fn with_config(config: ServiceConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let server = Self::server_with(store.clone(), config);

        Self {
            server,
            store: Some(store),
        }
    }

    fn server_with(store: Arc<dyn ScoreStore>, config: ServiceConfig) -> TestServer {
        let state = AppState::new(store, config);
        let router: Router = create_router(state);
        TestServer::new(router).expect("Failed to create test server")
    }

    /// Number of records persisted in the in-memory store.
    pub async fn stored_count(&self) -> usize {
        match &self.store {
            Some(store) => store.len().await,
            None => 0,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration used by the harness.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        mongodb_uri: "mongodb://127.0.0.1:1/scoreboard".into(),
        port: 0,
        ..ServiceConfig::default()
    }
}
