//! Frontend Models
//!
//! Data structures matching backend records. The controller only reads and
//! writes an expedition's id, name and notes; every other backend field
//! rides along untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expedition record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expedition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text notes field
    #[serde(default)]
    pub notes: String,
    /// Backend fields the controller does not model, passed through unmodified
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Expedition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notes: notes.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Shallow copy with only the notes field replaced
    pub fn with_notes(&self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self.clone()
        }
    }
}

/// Open action item belonging to one expedition (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Unique identifier within the owning expedition
    pub id: String,
    /// Display label
    pub name: String,
    /// Completion status
    pub completed: bool,
    /// Free-text findings field
    #[serde(default)]
    pub findings: String,
    /// Owning expedition (relation only; the action cache partitions by it)
    pub expedition_id: String,
}

impl ActionItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        expedition_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
            findings: String::new(),
            expedition_id: expedition_id.into(),
        }
    }
}

/// Selector entry derived from an expedition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionOption {
    pub label: String,
    pub value: String,
}

/// Pending photo selection: file name plus base64 payload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoDraft {
    pub file_name: String,
    pub content: String,
}
