use crate::error::Error;

/// Media kind used to filter a duplicate query. Sections declared as
/// "show" resolve to episodes, everything else to movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Episode,
}

impl MediaKind {
    pub fn from_section_type(section_type: &str) -> Self {
        if section_type == "show" {
            MediaKind::Episode
        } else {
            MediaKind::Movie
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Episode => "episode",
        }
    }
}

/// One library item the catalog has flagged as duplicated, with every
/// media variant attached to it. The grouping itself is the server's
/// job; this side only scores the members.
#[derive(Debug, Clone, Default)]
pub struct CatalogItem {
    /// Catalog key of the parent item, used to address deletes.
    pub key: String,
    pub title: String,
    pub media: Vec<MediaRecord>,
}

/// Raw media descriptor as the catalog exposes it. Every attribute
/// the server may omit is an Option; the extractor substitutes
/// defaults, so nothing downstream deals with absence.
#[derive(Debug, Clone, Default)]
pub struct MediaRecord {
    pub id: Option<i64>,
    pub bitrate: Option<i64>,
    pub video_codec: Option<String>,
    pub video_resolution: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub duration: Option<i64>,
    pub audio_codec: Option<String>,
    pub audio_channels: Option<i64>,
    pub parts: Vec<PartRecord>,
}

/// One file sub-unit backing a media record (CD1/CD2 rips have
/// several).
#[derive(Debug, Clone, Default)]
pub struct PartRecord {
    pub file: Option<String>,
    pub size: Option<i64>,
    pub audio_streams: Vec<AudioStream>,
}

#[derive(Debug, Clone, Default)]
pub struct AudioStream {
    pub channels: Option<i64>,
    pub title: Option<String>,
}

/// Catalog collaborator: resolves section kinds and enumerates
/// duplicate items. Implemented by `PlexServer`; tests supply fakes.
pub trait MediaCatalog {
    fn section_kind(&self, section: &str) -> Result<MediaKind, Error>;

    fn duplicate_items(&self, section: &str, kind: MediaKind)
        -> Result<Vec<CatalogItem>, Error>;
}

/// Deletion transport: one best-effort authenticated delete per media
/// item, never retried.
pub trait DeletionTransport {
    fn delete_media(&self, item_key: &str, media_id: i64) -> Result<(), Error>;
}
