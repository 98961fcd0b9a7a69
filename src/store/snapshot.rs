//! Full-catalog snapshot import and export. Import is a destructive full
//! replace with no partial-failure rollback: shape validation happens at the
//! serde boundary before a payload ever reaches the store, and anything that
//! deserialized is written as-is.

use tracing::info;

use crate::models::Snapshot;

use super::title_index::normalize_title;
use super::Catalog;

impl Catalog {
    /// Read the whole catalog into a snapshot payload. Both collections are
    /// ordered by creation time (identity as the tie-breaker) so repeated
    /// exports of the same catalog serialize identically.
    pub fn export_data(&self) -> Snapshot {
        let mut songs: Vec<_> = self.songs.values().cloned().collect();
        songs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let mut set_lists: Vec<_> = self.set_lists.values().cloned().collect();
        set_lists.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Snapshot { songs, set_lists }
    }

    /// Replace the entire catalog with a snapshot payload. Clears both
    /// stores and the title index, then re-inserts every record in payload
    /// order. Title collisions inside the payload resolve last-write-wins on
    /// the index, the same rule a live proceed-anyway save follows. Set list
    /// sequences are kept verbatim; positions are derived, so nothing else
    /// needs rebuilding.
    pub fn import_data(&mut self, snapshot: Snapshot) {
        self.songs.clear();
        self.set_lists.clear();
        self.titles.clear();

        let song_count = snapshot.songs.len();
        let list_count = snapshot.set_lists.len();

        for song in snapshot.songs {
            self.titles
                .assign(normalize_title(&song.title), song.id.clone());
            self.songs.insert(song.id.clone(), song);
        }
        for list in snapshot.set_lists {
            self.set_lists.insert(list.id.clone(), list);
        }

        info!(songs = song_count, set_lists = list_count, "imported snapshot");
    }
}
