//! Domain models that mirror the snapshot payload and get passed throughout
//! the store. The intent is that these types stay light-weight data holders
//! so other layers can focus on catalog logic and serialization. Keeping the
//! commentary here means later refactors can reconstruct the assumptions even
//! if other context is lost.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color_range::ColorRange;

/// Serialize nanosecond timestamps as decimal strings. Snapshot documents
/// are exchanged with hosts that cannot represent integers this large
/// natively, so the wire form is text even though the in-memory form stays
/// numeric.
pub(crate) mod nanos_string {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(nanos: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&nanos.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// How a song is rendered while it is being performed. These knobs belong to
/// the song record rather than to any particular screen so they survive
/// export/import round trips.
pub struct DisplaySettings {
    /// Scroll advance rate in steps per second.
    pub scroll_speed: f64,
    /// Beats per minute used by the caller's tempo affordances.
    pub bpm: u32,
    /// Background color behind the lyric text, as raw text (`#rrggbb`).
    pub background_color: String,
    /// Default lyric text color. Color ranges override this per span.
    pub text_color: String,
    /// Lyric font size in points.
    pub text_size: u32,
    /// Render lyrics in bold.
    pub bold: bool,
    /// How many lines one scroll step advances.
    pub lines_per_step: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            scroll_speed: 1.0,
            bpm: 100,
            background_color: "#000000".to_string(),
            text_color: "#ffffff".to_string(),
            text_size: 32,
            bold: false,
            lines_per_step: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// In-memory representation of a song. Persisted `color_ranges` are always
/// in normalized form: sorted by start, mutually non-overlapping, and inside
/// the lyric text, because the save path runs the normalizer before every
/// write.
pub struct Song {
    /// Identity assigned by the catalog. We keep it on the record even
    /// though the owning map is keyed by it because edit/delete flows bubble
    /// the id back to the store.
    pub id: String,
    /// Title displayed in lists and search results. Also feeds the title
    /// index after normalization.
    pub title: String,
    /// Artist field used both for display and filtering.
    pub artist: String,
    /// Full lyric text the color ranges decorate.
    pub lyrics: String,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub color_ranges: Vec<ColorRange>,
    /// Optional reference to an attached audio asset (kept as raw text so
    /// callers can store paths, URLs, or their own keys).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<String>,
    /// Nanoseconds since epoch at creation. Preserved across updates and
    /// replace-style saves.
    #[serde(with = "nanos_string")]
    pub created_at: u128,
    /// Nanoseconds since epoch at the most recent write.
    #[serde(with = "nanos_string")]
    pub updated_at: u128,
}

impl Song {
    /// Compose a `Title - Artist` string that gracefully omits the hyphen if
    /// the artist is blank. Callers rely on this ready-to-use formatting for
    /// listings and pickers.
    pub fn display_title(&self) -> String {
        if self.artist.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// An ordered collection of song identities. The sequence is the single
/// source of truth for membership and order; positions are projected from it
/// on demand. Duplicates are allowed, and entries are not checked against
/// the song store on write, so a sequence may carry ids that no longer
/// resolve. Read paths skip those silently.
pub struct SetList {
    pub id: String,
    /// User-facing display name.
    pub name: String,
    pub song_ids: Vec<String>,
    #[serde(with = "nanos_string")]
    pub created_at: u128,
    #[serde(with = "nanos_string")]
    pub updated_at: u128,
}

impl fmt::Display for SetList {
    /// Write the set list name to any formatter so the type plays nicely
    /// with widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of the position projection: a member song and its 1-based slot
/// within the set list. Never stored; always derived from the sequence.
pub struct SongPosition {
    pub song_id: String,
    pub position: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The full catalog contents, used for bulk import/export. Field names
/// follow the snapshot document convention (`songs`/`setLists`).
pub struct Snapshot {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub set_lists: Vec<SetList>,
}
