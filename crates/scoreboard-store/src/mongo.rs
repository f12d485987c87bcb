//! `MongoDB` storage implementation.
//!
//! This module provides the `MongoStore` implementation of the `ScoreStore`
//! trait. The collection handle is published once `connect` succeeds; until
//! then every operation fails with `StoreError::NotConnected`.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection, Database};
use tokio::sync::OnceCell;

use scoreboard_core::{NewScore, ScoreRecord};

use crate::error::{Result, StoreError};
use crate::schema::{ScoreDocument, DEFAULT_DATABASE, SCORES_COLLECTION};
use crate::ScoreStore;

/// MongoDB-backed storage implementation.
pub struct MongoStore {
    uri: String,
    database: Option<String>,
    connection: OnceCell<Connection>,
}

struct Connection {
    database: Database,
    scores: Collection<ScoreDocument>,
}

impl MongoStore {
    /// Create a store for the given connection string.
    ///
    /// No I/O happens here. `database` overrides the database named in the
    /// connection string; when neither is set, `test` is used.
    #[must_use]
    pub fn new(uri: impl Into<String>, database: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            database,
            connection: OnceCell::new(),
        }
    }

    /// Connect to the database and verify it answers a `ping`.
    ///
    /// Calling this again after a successful connect is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the connection string is invalid
    /// or the server cannot be reached.
    pub async fn connect(&self) -> Result<()> {
        if self.is_connected() {
            return Ok(());
        }

        let client = Client::with_uri_str(&self.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let database = match &self.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::debug!(
            database = %database.name(),
            collection = SCORES_COLLECTION,
            "Database answered ping"
        );

        let scores = database.collection::<ScoreDocument>(SCORES_COLLECTION);
        // A concurrent connect may have won the race; its handle is equivalent.
        let _ = self.connection.set(Connection { database, scores });

        Ok(())
    }

    /// Whether `connect` has succeeded.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    fn connection(&self) -> Result<&Connection> {
        self.connection.get().ok_or(StoreError::NotConnected)
    }
}

#[async_trait]
impl ScoreStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<ScoreRecord>> {
        let scores = &self.connection()?.scores;

        let documents: Vec<ScoreDocument> = scores.find(doc! {}).await?.try_collect().await?;

        documents
            .into_iter()
            .map(ScoreDocument::into_record)
            .collect()
    }

    async fn create(&self, score: NewScore) -> Result<ScoreRecord> {
        let scores = &self.connection()?.scores;

        let document = ScoreDocument::from_new(ObjectId::new(), &score);
        scores.insert_one(&document).await?;

        tracing::debug!(name = %score.name, score = score.score, "Inserted score document");

        document.into_record()
    }

    async fn ping(&self) -> Result<()> {
        self.connection()?
            .database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scoreboard_core::ScoreSubmission;

    #[tokio::test]
    async fn operations_fail_before_connect() {
        let store = MongoStore::new("mongodb://127.0.0.1:1/scoreboard", None);

        assert!(!store.is_connected());
        assert!(matches!(store.find_all().await, Err(StoreError::NotConnected)));
        assert!(matches!(store.ping().await, Err(StoreError::NotConnected)));

        let candidate = ScoreSubmission::new("Alice", 10.0)
            .validate(Utc::now())
            .unwrap();
        assert!(matches!(
            store.create(candidate).await,
            Err(StoreError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn connect_rejects_malformed_uri() {
        let store = MongoStore::new("not-a-connection-string", None);

        let result = store.connect().await;

        assert!(matches!(result, Err(StoreError::Connection(_))));
        assert!(!store.is_connected());
    }
}
