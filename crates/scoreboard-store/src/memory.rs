//! In-memory storage implementation.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use scoreboard_core::{NewScore, ScoreRecord};

use crate::error::Result;
use crate::schema::object_id_to_score_id;
use crate::ScoreStore;

/// Process-local store that keeps records in insertion order.
///
/// Identifiers are generated the same way the document store generates
/// them, so records are indistinguishable on the wire.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ScoreRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<ScoreRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, score: NewScore) -> Result<ScoreRecord> {
        let record = score.into_record(object_id_to_score_id(ObjectId::new())?);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
