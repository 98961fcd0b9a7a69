//! Core library surface for the Stagelist catalog store.
//!
//! The public modules exposed here provide an intentionally small API so any
//! front end as well as external tooling can reuse the same pieces. Keeping
//! the glue logic documented makes it easy to recall why each re-export
//! exists when revisiting the project.
pub mod color_range;
pub mod error;
pub mod id;
pub mod models;
pub mod store;

/// The annotation type and its normalizer. Re-exported together because
/// callers that build previews run the same pass the save path runs.
pub use color_range::{normalize_ranges, ColorRange};

/// Typed failures for store operations.
pub use error::{StoreError, StoreResult};

/// Identity source, exposed so embedders can mint ids outside the catalog
/// (for example when staging a snapshot by hand).
pub use id::IdGenerator;

/// The domain types that other layers manipulate.
pub use models::{DisplaySettings, SetList, Snapshot, Song, SongPosition};

/// The catalog itself plus the save-operation types and the snapshot file
/// helpers, which together form the whole operation surface.
pub use store::{
    default_snapshot_path, normalize_title, read_snapshot, write_snapshot, Catalog, SavedSong,
    SongDraft,
};
