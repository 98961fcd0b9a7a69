//! Song operations, including the title conflict protocol. The save path is
//! the only place that enforces the color range invariant and the only
//! writer of the title index, so everything read back from the catalog is
//! already in canonical form.

use tracing::{debug, info};

use crate::color_range::normalize_ranges;
use crate::color_range::ColorRange;
use crate::error::{StoreError, StoreResult};
use crate::id::now_nanos;
use crate::models::{DisplaySettings, Song};

use super::title_index::normalize_title;
use super::Catalog;

#[derive(Debug, Clone, Default)]
/// Caller-supplied fields for a save. A draft with an `id` updates that song
/// in place; a draft without one creates a song, subject to the title
/// conflict protocol when the normalized title is already taken.
pub struct SongDraft {
    pub id: Option<String>,
    pub title: String,
    pub artist: String,
    pub lyrics: String,
    pub display: DisplaySettings,
    /// Annotations as the caller produced them. They are normalized against
    /// `lyrics` before anything is persisted.
    pub color_ranges: Vec<ColorRange>,
    pub audio_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a save. `conflicting_existing_id` is advisory: it names the
/// song that held the title key before this write when that was a different
/// song, so the caller can surface the collision after the fact.
pub struct SavedSong {
    pub id: String,
    pub conflicting_existing_id: Option<String>,
}

impl Catalog {
    /// Persist a song draft and return the resulting identity.
    ///
    /// With an explicit id the song is updated in place, preserving its
    /// creation timestamp; an unknown id is an error. Without an id, a
    /// normalized-title match against a different live song follows the
    /// caller's decision: `replace_existing` overwrites that song under its
    /// existing identity (again preserving the creation timestamp), while
    /// proceeding mints a fresh identity and simply repoints the title index
    /// at the newest writer. In every case the index entry for the resulting
    /// identity is written unconditionally, and a retitled song releases its
    /// previous key.
    pub fn save_song(
        &mut self,
        draft: SongDraft,
        replace_existing: bool,
    ) -> StoreResult<SavedSong> {
        let SongDraft {
            id,
            title,
            artist,
            lyrics,
            display,
            color_ranges,
            audio_ref,
        } = draft;

        let key = normalize_title(&title);
        let color_ranges = normalize_ranges(&lyrics, color_ranges);
        let now = now_nanos();

        // Current holder of the title key, ignoring entries whose song is
        // gone. Resolved before the write so the advisory result reflects
        // the state the caller decided against.
        let holder = self
            .titles
            .resolve(&key)
            .filter(|held_by| self.songs.contains_key(*held_by))
            .map(str::to_owned);

        let target_id = match id {
            Some(explicit) => {
                if !self.songs.contains_key(&explicit) {
                    return Err(StoreError::SongNotFound(explicit));
                }
                explicit
            }
            None => match &holder {
                Some(existing) if replace_existing => existing.clone(),
                _ => self.ids.generate(),
            },
        };

        let conflicting_existing_id = holder.filter(|held_by| *held_by != target_id);

        match self.songs.get_mut(&target_id) {
            Some(song) => {
                // A retitle releases the old key before the new one is
                // claimed; otherwise a stale entry would keep resolving to
                // this song under a title it no longer carries.
                let old_key = normalize_title(&song.title);
                if old_key != key {
                    self.titles.release(&old_key, &target_id);
                }
                song.title = title;
                song.artist = artist;
                song.lyrics = lyrics;
                song.display = display;
                song.color_ranges = color_ranges;
                song.audio_ref = audio_ref;
                song.updated_at = now;
                debug!(id = %target_id, "updated song");
            }
            None => {
                self.songs.insert(
                    target_id.clone(),
                    Song {
                        id: target_id.clone(),
                        title,
                        artist,
                        lyrics,
                        display,
                        color_ranges,
                        audio_ref,
                        created_at: now,
                        updated_at: now,
                    },
                );
                debug!(id = %target_id, "created song");
            }
        }

        // Unconditional index write: the conflict, if any, was surfaced and
        // the caller's decision already happened.
        self.titles.assign(key, target_id.clone());

        Ok(SavedSong {
            id: target_id,
            conflicting_existing_id,
        })
    }

    /// Fetch one song by identity.
    pub fn get_song(&self, id: &str) -> StoreResult<Song> {
        self.songs
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::SongNotFound(id.to_string()))
    }

    /// Every song in the catalog. Ordering is unspecified here; display
    /// ordering is a caller concern.
    pub fn all_songs(&self) -> Vec<Song> {
        self.songs.values().cloned().collect()
    }

    /// Remove a song and its title index entry. Set list sequences keep any
    /// reference to the deleted id; read paths skip ids that no longer
    /// resolve, so the dangling entries are harmless until the caller
    /// rewrites the sequence.
    pub fn delete_song(&mut self, id: &str) -> StoreResult<()> {
        let song = self
            .songs
            .remove(id)
            .ok_or_else(|| StoreError::SongNotFound(id.to_string()))?;
        self.titles.release(&normalize_title(&song.title), id);
        info!(id, title = %song.title, "deleted song");
        Ok(())
    }

    /// The identity currently holding a title, if any. This is the advisory
    /// pre-check of the conflict protocol: callers resolve the holder, let
    /// the user decide, and then save.
    pub fn title_holder(&self, title: &str) -> Option<String> {
        let key = normalize_title(title);
        self.titles
            .resolve(&key)
            .filter(|held_by| self.songs.contains_key(*held_by))
            .map(str::to_owned)
    }

    /// Whether no live song currently claims this title.
    pub fn is_title_unique(&self, title: &str) -> bool {
        self.title_holder(title).is_none()
    }
}
