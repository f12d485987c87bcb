//! Document schema for the `scores` collection.
//!
//! Field names match documents already written to the collection by
//! earlier deployments, including the `__v` version key.

use chrono::{DateTime, Utc};
use mongodb::bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use scoreboard_core::{NewScore, ScoreId, ScoreRecord};

use crate::error::{Result, StoreError};

/// Collection holding score documents.
pub const SCORES_COLLECTION: &str = "scores";

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE: &str = "test";

/// A score document as stored in the `scores` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDocument {
    /// Object id, assigned before insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Player name.
    pub name: String,

    /// Submitted score. Integer-typed values in older documents widen to `f64`.
    pub score: f64,

    /// Creation time.
    pub date: bson::DateTime,

    /// Version key.
    #[serde(rename = "__v", default)]
    pub version: i32,
}

impl ScoreDocument {
    /// Build a document for a new score under the given id.
    #[must_use]
    pub fn from_new(id: ObjectId, score: &NewScore) -> Self {
        Self {
            id: Some(id),
            name: score.name.clone(),
            score: score.score,
            date: bson::DateTime::from_millis(score.date.timestamp_millis()),
            version: scoreboard_core::score::DOCUMENT_VERSION,
        }
    }

    /// Convert into the wire record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialization` if the document has no id or its
    /// date is out of range.
    pub fn into_record(self) -> Result<ScoreRecord> {
        let id = self
            .id
            .ok_or_else(|| StoreError::Serialization("score document has no _id".into()))?;
        let date = DateTime::<Utc>::from_timestamp_millis(self.date.timestamp_millis())
            .ok_or_else(|| {
                StoreError::Serialization(format!("date out of range on document {id}"))
            })?;

        Ok(ScoreRecord {
            id: object_id_to_score_id(id)?,
            name: self.name,
            score: self.score,
            date,
            version: self.version,
        })
    }
}

/// Convert a store object id into a record identifier.
///
/// # Errors
///
/// Returns `StoreError::Serialization` if the hex form is rejected.
pub fn object_id_to_score_id(id: ObjectId) -> Result<ScoreId> {
    id.to_hex()
        .parse()
        .map_err(|e: scoreboard_core::IdError| StoreError::Serialization(e.to_string()))
}
