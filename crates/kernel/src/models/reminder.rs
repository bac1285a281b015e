//! Reminder record.

use serde::{Deserialize, Serialize};

use super::{RecordId, null_as_default};

/// A short note listed in the reminders sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reminder {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}
