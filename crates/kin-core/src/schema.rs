//! JSON schema and version handling for family record files.

use crate::person::Person;
use crate::tree::Tree;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CURRENT_VERSION: &str = "1.0.0";

/// On-disk shape of a family record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    pub people: Vec<Person>,
}

impl Record {
    /// Snapshot a tree into its serializable record form.
    pub fn from_tree(tree: &Tree) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            head: tree.head().map(|p| p.id.clone()),
            people: tree.iter().cloned().collect(),
        }
    }

    /// Rebuild the tree, running consistency saturation and validation.
    pub fn into_tree(self) -> Result<Tree> {
        let mut tree = Tree::new(self.people)?;
        if let Some(head) = self.head {
            tree.set_head(&head)?;
        }
        Ok(tree)
    }
}

/// Validate a record's schema version.
pub fn validate_version(record: &Record) -> Result<()> {
    if record.version != CURRENT_VERSION {
        anyhow::bail!(
            "record version mismatch: expected {}, found {}",
            CURRENT_VERSION,
            record.version
        );
    }
    Ok(())
}

/// Serialize a record to a pretty-printed JSON string.
pub fn to_json(record: &Record) -> Result<String> {
    serde_json::to_string_pretty(record).context("failed to serialize record to JSON")
}

/// Deserialize a record from a JSON string.
pub fn from_json(json: &str) -> Result<Record> {
    let record: Record =
        serde_json::from_str(json).context("failed to deserialize record from JSON")?;
    validate_version(&record)?;
    Ok(record)
}
