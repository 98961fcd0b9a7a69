//! Snapshot documents on disk. The store itself never touches the
//! filesystem; these helpers give the caller a canonical place and format
//! for the catalog snapshot so every front end reads and writes the same
//! document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

use crate::models::Snapshot;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".stagelist";
/// Snapshot file name stored inside the application data directory.
const SNAPSHOT_FILE_NAME: &str = "catalog.json";

/// Resolve the absolute path to the snapshot document inside the user's
/// home.
pub fn default_snapshot_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(SNAPSHOT_FILE_NAME))
}

/// Read and deserialize a snapshot document. Shape problems surface here,
/// before the payload reaches the store.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
    serde_json::from_str(&raw).context("failed to parse snapshot document")
}

/// Serialize and write a snapshot document, creating the data directory
/// first so a fresh install can save without any setup step.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }
    let raw = serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot")?;
    fs::write(path, raw).with_context(|| format!("failed to write snapshot to {}", path.display()))
}
