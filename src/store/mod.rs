//! The in-memory catalog and its operations, split across logical
//! submodules. Every function here tries to encapsulate one operation of the
//! store surface so the rest of the codebase can stay focused on
//! presentation concerns. Capturing the rationale in comments keeps the
//! intent of each operation easy to rediscover when returning to the
//! project.
//!
//! Concurrency model: every mutating operation takes `&mut self`, so each
//! call runs to completion before the next one is observed and no caller can
//! see a partially applied write. Nothing here performs I/O; the `persist`
//! helpers read and write snapshot documents outside the store proper.

mod persist;
mod set_lists;
mod snapshot;
mod songs;
mod title_index;

pub use persist::{default_snapshot_path, read_snapshot, write_snapshot};
pub use songs::{SavedSong, SongDraft};
pub use title_index::normalize_title;

use std::collections::HashMap;

use crate::id::IdGenerator;
use crate::models::{SetList, Song};

use title_index::TitleIndex;

#[derive(Debug, Default)]
/// Owns every song and set list record plus the derived title index. One
/// catalog instance is one independent store; tests build as many as they
/// need in parallel without shared state.
pub struct Catalog {
    pub(crate) songs: HashMap<String, Song>,
    pub(crate) set_lists: HashMap<String, SetList>,
    pub(crate) titles: TitleIndex,
    pub(crate) ids: IdGenerator,
}

impl Catalog {
    /// Create an empty catalog with a fresh identity generator.
    pub fn new() -> Self {
        Self::default()
    }
}
