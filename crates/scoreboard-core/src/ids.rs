//! Identifier types for scoreboard records.
//!
//! Record identifiers are assigned by the store. On the wire they are the
//! 24-character hexadecimal form of a document-store object id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// Length of the hexadecimal object id representation.
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// Identifier of a stored score record.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreId(String);

impl ScoreId {
    /// Return the hexadecimal representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ScoreId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != OBJECT_ID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IdError::InvalidObjectId(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for ScoreId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScoreId> for String {
    fn from(id: ScoreId) -> Self {
        id.0
    }
}

impl fmt::Debug for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScoreId({})", self.0)
    }
}

impl fmt::Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_id_hex() {
        let id: ScoreId = "65F1C0FFEE0000000000BEEF".parse().unwrap();
        assert_eq!(id.as_str(), "65f1c0ffee0000000000beef");
        assert_eq!(id.to_string(), "65f1c0ffee0000000000beef");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("abc123".parse::<ScoreId>().is_err());
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(
            "zzzzzzzzzzzzzzzzzzzzzzzz".parse::<ScoreId>(),
            Err(IdError::InvalidObjectId("zzzzzzzzzzzzzzzzzzzzzzzz".into()))
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<ScoreId, _> = serde_json::from_str("\"65f1c0ffee0000000000beef\"");
        assert!(ok.is_ok());

        let bad: Result<ScoreId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(bad.is_err());
    }
}
