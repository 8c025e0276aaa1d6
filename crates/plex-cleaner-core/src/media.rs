use crate::catalog::MediaRecord;
use tracing::debug;

/// Sentinel shown for absent categorical attributes and missing ids.
pub const UNKNOWN: &str = "Unknown";

/// Fully-defaulted snapshot of one media variant. Numeric fields
/// default to 0 and categorical fields to "Unknown"; only the id
/// keeps its absence visible, because a part without an id cannot be
/// deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPart {
    pub id: Option<i64>,
    pub video_bitrate: i64,
    pub video_codec: String,
    pub video_resolution: String,
    pub video_width: i64,
    pub video_height: i64,
    pub video_duration: i64,
    pub audio_codec: String,
    pub audio_channels: i64,
    pub files: Vec<String>,
    pub file_size: i64,
    pub multipart: bool,
}

impl Default for MediaPart {
    fn default() -> Self {
        MediaPart {
            id: None,
            video_bitrate: 0,
            video_codec: UNKNOWN.to_string(),
            video_resolution: UNKNOWN.to_string(),
            video_width: 0,
            video_height: 0,
            video_duration: 0,
            audio_codec: UNKNOWN.to_string(),
            audio_channels: 0,
            files: Vec::new(),
            file_size: 0,
            multipart: false,
        }
    }
}

impl MediaPart {
    /// Path shown to the user for this part.
    pub fn display_name(&self) -> &str {
        self.files.first().map(String::as_str).unwrap_or(UNKNOWN)
    }
}

/// A part together with its computed desirability score. Built after
/// extraction; the underlying record is never modified again.
#[derive(Debug, Clone)]
pub struct ScoredPart {
    pub part: MediaPart,
    pub score: i64,
}

/// Normalize a raw catalog record into a fully-defaulted `MediaPart`.
/// Absent attributes degrade to their defaults with a debug note;
/// extraction never fails.
pub fn extract_media_part(media: &MediaRecord) -> MediaPart {
    let mut part = MediaPart::default();

    match media.id {
        Some(id) => part.id = Some(id),
        None => debug!("Media item has no id"),
    }
    part.video_bitrate = media.bitrate.unwrap_or_else(|| {
        debug!("Media item has no bitrate");
        0
    });
    part.video_codec = media.video_codec.clone().unwrap_or_else(|| {
        debug!("Media item has no video codec");
        UNKNOWN.to_string()
    });
    part.video_resolution = media.video_resolution.clone().unwrap_or_else(|| {
        debug!("Media item has no video resolution");
        UNKNOWN.to_string()
    });
    part.video_width = media.width.unwrap_or_else(|| {
        debug!("Media item has no width");
        0
    });
    part.video_height = media.height.unwrap_or_else(|| {
        debug!("Media item has no height");
        0
    });
    part.video_duration = media.duration.unwrap_or_else(|| {
        debug!("Media item has no duration");
        0
    });
    part.audio_codec = media.audio_codec.clone().unwrap_or_else(|| {
        debug!("Media item has no audio codec");
        UNKNOWN.to_string()
    });

    // Prefer summing channels across every audio stream; only when no
    // stream-level data exists fall back to the item-level count.
    let mut channels = 0i64;
    for file_part in &media.parts {
        for stream in &file_part.audio_streams {
            if let Some(stream_channels) = stream.channels {
                debug!(
                    "Added {} channels for {} audio stream",
                    stream_channels,
                    stream.title.as_deref().unwrap_or(UNKNOWN)
                );
                channels += stream_channels;
            }
        }
    }
    if channels == 0 {
        channels = media.audio_channels.unwrap_or_else(|| {
            debug!("Media item has no audio channels");
            0
        });
    }
    part.audio_channels = channels;

    part.multipart = media.parts.len() > 1;
    for file_part in &media.parts {
        if let Some(file) = &file_part.file {
            part.files.push(file.clone());
        }
        part.file_size += file_part.size.unwrap_or(0);
    }

    part
}
