//! Set list operations. A set list's id sequence is the single source of
//! truth for membership and order; the 1-based positions callers see are a
//! projection computed on demand, so they can never drift out of sync with
//! the sequence no matter which operation rewrote it.

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::id::now_nanos;
use crate::models::{SetList, Song, SongPosition};

use super::Catalog;

impl Catalog {
    /// Create a set list from an ordered id sequence. Always succeeds; the
    /// ids are not checked against the song store, matching the write-time
    /// referential policy of the data model.
    pub fn create_set_list(&mut self, name: &str, song_ids: Vec<String>) -> String {
        let id = self.ids.generate();
        let now = now_nanos();
        self.set_lists.insert(
            id.clone(),
            SetList {
                id: id.clone(),
                name: name.to_string(),
                song_ids,
                created_at: now,
                updated_at: now,
            },
        );
        info!(id = %id, name, "created set list");
        id
    }

    /// Replace a set list's name and entire id sequence. Positions are
    /// derived from the sequence, so they are consistent the moment this
    /// returns.
    pub fn update_set_list(
        &mut self,
        id: &str,
        name: &str,
        song_ids: Vec<String>,
    ) -> StoreResult<()> {
        let list = self
            .set_lists
            .get_mut(id)
            .ok_or_else(|| StoreError::SetListNotFound(id.to_string()))?;
        list.name = name.to_string();
        list.song_ids = song_ids;
        list.updated_at = now_nanos();
        debug!(id, "updated set list");
        Ok(())
    }

    /// Move the first occurrence of `song_id` to `new_position` (1-based,
    /// clamped to the sequence bounds). Relative order of every other entry
    /// is preserved and positions stay contiguous.
    pub fn move_song_in_set_list(
        &mut self,
        set_list_id: &str,
        song_id: &str,
        new_position: usize,
    ) -> StoreResult<()> {
        let list = self
            .set_lists
            .get_mut(set_list_id)
            .ok_or_else(|| StoreError::SetListNotFound(set_list_id.to_string()))?;

        let from = list
            .song_ids
            .iter()
            .position(|entry| entry == song_id)
            .ok_or_else(|| StoreError::SongNotInSetList {
                set_list_id: set_list_id.to_string(),
                song_id: song_id.to_string(),
            })?;

        let entry = list.song_ids.remove(from);
        let to = new_position.clamp(1, list.song_ids.len() + 1) - 1;
        list.song_ids.insert(to, entry);
        list.updated_at = now_nanos();
        debug!(set_list_id, song_id, new_position, "moved song in set list");
        Ok(())
    }

    /// Fetch one set list by identity.
    pub fn get_set_list(&self, id: &str) -> StoreResult<SetList> {
        self.set_lists
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::SetListNotFound(id.to_string()))
    }

    /// Every set list in the catalog, in unspecified order.
    pub fn all_set_lists(&self) -> Vec<SetList> {
        self.set_lists.values().cloned().collect()
    }

    /// Remove a set list. The songs it referenced are untouched.
    pub fn delete_set_list(&mut self, id: &str) -> StoreResult<()> {
        if self.set_lists.remove(id).is_none() {
            return Err(StoreError::SetListNotFound(id.to_string()));
        }
        info!(id, "deleted set list");
        Ok(())
    }

    /// The member songs in sequence order. Ids that no longer resolve are
    /// skipped silently; song deletion never rewrites a sequence, so
    /// dangling references are expected here.
    pub fn songs_in_set_list(&self, id: &str) -> StoreResult<Vec<Song>> {
        let list = self
            .set_lists
            .get(id)
            .ok_or_else(|| StoreError::SetListNotFound(id.to_string()))?;
        Ok(list
            .song_ids
            .iter()
            .filter_map(|song_id| self.songs.get(song_id))
            .cloned()
            .collect())
    }

    /// The position projection: every resolvable member in sequence order,
    /// numbered contiguously from 1.
    pub fn set_list_positions(&self, id: &str) -> StoreResult<Vec<SongPosition>> {
        let list = self
            .set_lists
            .get(id)
            .ok_or_else(|| StoreError::SetListNotFound(id.to_string()))?;
        Ok(list
            .song_ids
            .iter()
            .filter(|song_id| self.songs.contains_key(song_id.as_str()))
            .enumerate()
            .map(|(index, song_id)| SongPosition {
                song_id: song_id.clone(),
                position: index + 1,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SongDraft;

    fn catalog_with_songs(titles: &[&str]) -> (Catalog, Vec<String>) {
        let mut catalog = Catalog::new();
        let ids = titles
            .iter()
            .map(|title| {
                let draft = SongDraft {
                    title: title.to_string(),
                    lyrics: "la".to_string(),
                    ..SongDraft::default()
                };
                catalog.save_song(draft, false).unwrap().id
            })
            .collect();
        (catalog, ids)
    }

    fn position_pairs(catalog: &Catalog, list_id: &str) -> Vec<(String, usize)> {
        catalog
            .set_list_positions(list_id)
            .unwrap()
            .into_iter()
            .map(|entry| (entry.song_id, entry.position))
            .collect()
    }

    #[test]
    fn test_create_projects_sequential_positions() {
        let (mut catalog, ids) = catalog_with_songs(&["One", "Two"]);
        let list_id = catalog.create_set_list("Sunday", ids.clone());

        assert_eq!(
            position_pairs(&catalog, &list_id),
            vec![(ids[0].clone(), 1), (ids[1].clone(), 2)]
        );
        let titles: Vec<String> = catalog
            .songs_in_set_list(&list_id)
            .unwrap()
            .into_iter()
            .map(|song| song.title)
            .collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_move_song_renumbers_contiguously() {
        let (mut catalog, ids) = catalog_with_songs(&["One", "Two", "Three"]);
        let list_id = catalog.create_set_list("Sunday", ids.clone());

        catalog.move_song_in_set_list(&list_id, &ids[2], 1).unwrap();
        assert_eq!(
            position_pairs(&catalog, &list_id),
            vec![
                (ids[2].clone(), 1),
                (ids[0].clone(), 2),
                (ids[1].clone(), 3),
            ]
        );
    }

    #[test]
    fn test_move_clamps_out_of_range_positions() {
        let (mut catalog, ids) = catalog_with_songs(&["One", "Two", "Three"]);
        let list_id = catalog.create_set_list("Sunday", ids.clone());

        catalog.move_song_in_set_list(&list_id, &ids[0], 99).unwrap();
        let order: Vec<String> = catalog.get_set_list(&list_id).unwrap().song_ids;
        assert_eq!(order, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);

        catalog.move_song_in_set_list(&list_id, &ids[0], 0).unwrap();
        let order: Vec<String> = catalog.get_set_list(&list_id).unwrap().song_ids;
        assert_eq!(order, vec![ids[0].clone(), ids[1].clone(), ids[2].clone()]);
    }

    #[test]
    fn test_move_reports_missing_list_and_missing_song() {
        let (mut catalog, ids) = catalog_with_songs(&["One"]);
        let list_id = catalog.create_set_list("Sunday", ids);

        assert_eq!(
            catalog.move_song_in_set_list("missing", "whatever", 1),
            Err(StoreError::SetListNotFound("missing".to_string()))
        );
        assert_eq!(
            catalog.move_song_in_set_list(&list_id, "stranger", 1),
            Err(StoreError::SongNotInSetList {
                set_list_id: list_id,
                song_id: "stranger".to_string(),
            })
        );
    }

    #[test]
    fn test_deleted_song_is_skipped_but_stays_in_sequence() {
        let (mut catalog, ids) = catalog_with_songs(&["One", "Two"]);
        let list_id = catalog.create_set_list("Sunday", ids.clone());

        catalog.delete_song(&ids[0]).unwrap();

        let remaining: Vec<String> = catalog
            .songs_in_set_list(&list_id)
            .unwrap()
            .into_iter()
            .map(|song| song.id)
            .collect();
        assert_eq!(remaining, vec![ids[1].clone()]);
        assert_eq!(
            position_pairs(&catalog, &list_id),
            vec![(ids[1].clone(), 1)]
        );
        // The sequence itself still carries the dangling reference.
        assert_eq!(catalog.get_set_list(&list_id).unwrap().song_ids, ids);
    }

    #[test]
    fn test_update_replaces_name_and_sequence() {
        let (mut catalog, ids) = catalog_with_songs(&["One", "Two"]);
        let list_id = catalog.create_set_list("Sunday", ids.clone());

        let reversed = vec![ids[1].clone(), ids[0].clone()];
        catalog
            .update_set_list(&list_id, "Evening", reversed.clone())
            .unwrap();

        let list = catalog.get_set_list(&list_id).unwrap();
        assert_eq!(list.name, "Evening");
        assert_eq!(list.song_ids, reversed);
        assert_eq!(
            position_pairs(&catalog, &list_id),
            vec![(ids[1].clone(), 1), (ids[0].clone(), 2)]
        );
        assert_eq!(
            catalog.update_set_list("missing", "x", Vec::new()),
            Err(StoreError::SetListNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_duplicate_members_are_allowed_and_move_targets_first() {
        let (mut catalog, ids) = catalog_with_songs(&["One", "Two"]);
        let sequence = vec![ids[0].clone(), ids[0].clone(), ids[1].clone()];
        let list_id = catalog.create_set_list("Sunday", sequence);

        assert_eq!(catalog.set_list_positions(&list_id).unwrap().len(), 3);

        catalog.move_song_in_set_list(&list_id, &ids[0], 3).unwrap();
        assert_eq!(
            catalog.get_set_list(&list_id).unwrap().song_ids,
            vec![ids[0].clone(), ids[1].clone(), ids[0].clone()]
        );
    }

    #[test]
    fn test_delete_set_list() {
        let (mut catalog, ids) = catalog_with_songs(&["One"]);
        let list_id = catalog.create_set_list("Sunday", ids.clone());

        catalog.delete_set_list(&list_id).unwrap();
        assert_eq!(
            catalog.get_set_list(&list_id),
            Err(StoreError::SetListNotFound(list_id.clone()))
        );
        assert_eq!(
            catalog.delete_set_list(&list_id),
            Err(StoreError::SetListNotFound(list_id))
        );
        // Member songs survive their set list.
        assert!(catalog.get_song(&ids[0]).is_ok());
    }
}
