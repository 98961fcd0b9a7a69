//! Error taxonomy for store operations. Only genuinely fatal conditions are
//! errors here: a missing entity ends the call that referenced it. Title
//! conflicts are advisory results carried on the save outcome instead, and
//! invalid color ranges are silently dropped by the normalizer, so neither
//! appears in this enum.

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The referenced song is absent from the catalog.
    #[error("song not found: {0}")]
    SongNotFound(String),

    /// The referenced set list is absent from the catalog.
    #[error("set list not found: {0}")]
    SetListNotFound(String),

    /// The set list exists but its sequence does not contain the song.
    #[error("song {song_id} is not in set list {set_list_id}")]
    SongNotInSetList {
        set_list_id: String,
        song_id: String,
    },
}
