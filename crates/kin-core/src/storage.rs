//! Read/write family record files from disk.

use crate::schema::{self, Record};
use crate::tree::Tree;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a record file and build a consistent tree from it.
///
/// Consistency saturation and structural validation run as part of the
/// load, so malformed input surfaces here rather than at query time.
pub fn load(path: &Path) -> Result<Tree> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read record from {}", path.display()))?;
    schema::from_json(&json)?.into_tree()
}

/// Save a tree to a record file, creating parent directories if needed.
pub fn save(path: &Path, tree: &Tree) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    let json = schema::to_json(&Record::from_tree(tree))?;
    fs::write(path, json).with_context(|| format!("failed to write record to {}", path.display()))?;
    Ok(())
}
