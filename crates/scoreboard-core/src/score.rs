//! Score record types.
//!
//! A submission arrives as a `ScoreSubmission`, is checked into a `NewScore`,
//! and comes back from the store as a `ScoreRecord`.

use chrono::{DateTime, SubsecRound, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::ids::ScoreId;

/// Version key written on every new document.
pub const DOCUMENT_VERSION: i32 = 0;

/// Timestamps are kept at the store's millisecond resolution.
const TIMESTAMP_PRECISION: u16 = 3;

/// A persisted score entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Identifier assigned by the store.
    #[serde(rename = "_id")]
    pub id: ScoreId,

    /// Player name.
    pub name: String,

    /// Submitted score.
    pub score: f64,

    /// When the record was created.
    pub date: DateTime<Utc>,

    /// Document version key.
    #[serde(rename = "__v", default)]
    pub version: i32,
}

/// An unchecked score submission.
///
/// Every field is optional so that a request body with missing fields still
/// parses and can be rejected with a `ValidationError`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoreSubmission {
    /// Player name.
    #[serde(default)]
    pub name: Option<String>,

    /// Submitted score.
    #[serde(default)]
    pub score: Option<f64>,

    /// Creation time supplied by the client, if any.
    ///
    /// A value that is not an RFC 3339 timestamp is ignored and the
    /// server time is used instead.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateField {
    Timestamp(DateTime<Utc>),
    Other(IgnoredAny),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match DateField::deserialize(deserializer)? {
        DateField::Timestamp(date) => Some(date),
        DateField::Other(_) => None,
    })
}

impl ScoreSubmission {
    /// Create a submission with a name and score.
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: Some(name.into()),
            score: Some(score),
            date: None,
        }
    }

    /// Check required fields and fill in the creation time.
    ///
    /// `now` is used when the submission carries no `date`. A score of zero
    /// is a valid score.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingName` if `name` is absent or empty.
    /// - `ValidationError::MissingScore` if `score` is absent.
    /// - `ValidationError::NonFiniteScore` if `score` is NaN or infinite.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewScore, ValidationError> {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let score = self.score.ok_or(ValidationError::MissingScore)?;
        if !score.is_finite() {
            return Err(ValidationError::NonFiniteScore);
        }

        Ok(NewScore {
            name,
            score,
            date: self.date.unwrap_or(now).trunc_subsecs(TIMESTAMP_PRECISION),
        })
    }
}

/// A validated score, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScore {
    /// Player name (non-empty).
    pub name: String,

    /// Submitted score (finite).
    pub score: f64,

    /// Creation time.
    pub date: DateTime<Utc>,
}

impl NewScore {
    /// Attach a store-assigned identifier.
    #[must_use]
    pub fn into_record(self, id: ScoreId) -> ScoreRecord {
        ScoreRecord {
            id,
            name: self.name,
            score: self.score,
            date: self.date,
            version: DOCUMENT_VERSION,
        }
    }
}
