//! Member record.

use serde::{Deserialize, Serialize};

use super::{RecordId, null_as_default};

/// A hackerspace member shown on the members page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// Avatar image URL.
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
}
