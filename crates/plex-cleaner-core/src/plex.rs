use crate::catalog::{
    AudioStream, CatalogItem, DeletionTransport, MediaCatalog, MediaKind, MediaRecord, PartRecord,
};
use crate::error::Error;
use crate::media::UNKNOWN;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Stream type Plex uses for audio streams.
const AUDIO_STREAM_TYPE: i64 = 2;

/// Plex media-server client: section directory, duplicate search and
/// the authenticated media delete call. All requests are synchronous;
/// payloads are JSON (Plex honors `Accept: application/json`).
pub struct PlexServer {
    base_url: String,
    token: String,
    http: Client,
}

impl PlexServer {
    /// Connect and verify the server is reachable by listing the
    /// library sections once. An unreachable or misconfigured server
    /// fails here, before any section is processed.
    pub fn connect(server: &str, token: &str) -> Result<Self, Error> {
        let server = PlexServer {
            base_url: server.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http: Client::builder().build()?,
        };
        server.sections()?;
        Ok(server)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header("X-Plex-Token", &self.token)
            .header("Accept", "application/json")
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(response.json::<T>()?)
    }

    fn sections(&self) -> Result<Vec<SectionDirectory>, Error> {
        let container: MediaContainer<SectionsPayload> =
            self.get_json("/library/sections", &[])?;
        Ok(container.media_container.directories)
    }

    fn find_section(&self, name: &str) -> Result<SectionDirectory, Error> {
        self.sections()?
            .into_iter()
            .find(|section| section.title == name)
            .ok_or_else(|| Error::SectionNotFound(name.to_string()))
    }
}

impl MediaCatalog for PlexServer {
    fn section_kind(&self, section: &str) -> Result<MediaKind, Error> {
        let directory = self.find_section(section)?;
        Ok(MediaKind::from_section_type(&directory.section_type))
    }

    fn duplicate_items(
        &self,
        section: &str,
        kind: MediaKind,
    ) -> Result<Vec<CatalogItem>, Error> {
        let directory = self.find_section(section)?;
        let search_type = match kind {
            MediaKind::Movie => "1",
            MediaKind::Episode => "4",
        };
        let path = format!("/library/sections/{}/all", directory.key);
        let container: MediaContainer<ItemsPayload> =
            self.get_json(&path, &[("type", search_type), ("duplicate", "1")])?;
        Ok(container
            .media_container
            .metadata
            .into_iter()
            .map(CatalogItem::from)
            .collect())
    }
}

impl DeletionTransport for PlexServer {
    fn delete_media(&self, item_key: &str, media_id: i64) -> Result<(), Error> {
        let url = format!("{}{}/media/{}", self.base_url, item_key, media_id);
        debug!("Sending DELETE request to {}", url);
        let response = self
            .http
            .delete(&url)
            .header("X-Plex-Token", &self.token)
            .send()?;
        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(Error::DeleteFailed {
                media_id,
                status: response.status().as_u16(),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct MediaContainer<T> {
    #[serde(rename = "MediaContainer")]
    media_container: T,
}

#[derive(Debug, Deserialize)]
struct SectionsPayload {
    #[serde(rename = "Directory", default)]
    directories: Vec<SectionDirectory>,
}

#[derive(Debug, Clone, Deserialize)]
struct SectionDirectory {
    key: String,
    title: String,
    #[serde(rename = "type")]
    section_type: String,
}

#[derive(Debug, Deserialize)]
struct ItemsPayload {
    #[serde(rename = "Metadata", default)]
    metadata: Vec<WireItem>,
}

#[derive(Debug, Deserialize)]
struct WireItem {
    key: String,
    title: Option<String>,
    #[serde(rename = "Media", default)]
    media: Vec<WireMedia>,
}

#[derive(Debug, Deserialize)]
struct WireMedia {
    id: Option<i64>,
    bitrate: Option<i64>,
    #[serde(rename = "videoCodec")]
    video_codec: Option<String>,
    #[serde(rename = "videoResolution")]
    video_resolution: Option<String>,
    width: Option<i64>,
    height: Option<i64>,
    duration: Option<i64>,
    #[serde(rename = "audioCodec")]
    audio_codec: Option<String>,
    #[serde(rename = "audioChannels")]
    audio_channels: Option<i64>,
    #[serde(rename = "Part", default)]
    parts: Vec<WirePart>,
}

#[derive(Debug, Deserialize)]
struct WirePart {
    file: Option<String>,
    size: Option<i64>,
    #[serde(rename = "Stream", default)]
    streams: Vec<WireStream>,
}

#[derive(Debug, Deserialize)]
struct WireStream {
    #[serde(rename = "streamType")]
    stream_type: Option<i64>,
    channels: Option<i64>,
    title: Option<String>,
}

impl From<WireItem> for CatalogItem {
    fn from(item: WireItem) -> Self {
        CatalogItem {
            key: item.key,
            title: item.title.unwrap_or_else(|| UNKNOWN.to_string()),
            media: item.media.into_iter().map(MediaRecord::from).collect(),
        }
    }
}

impl From<WireMedia> for MediaRecord {
    fn from(media: WireMedia) -> Self {
        MediaRecord {
            id: media.id,
            bitrate: media.bitrate,
            video_codec: media.video_codec,
            video_resolution: media.video_resolution,
            width: media.width,
            height: media.height,
            duration: media.duration,
            audio_codec: media.audio_codec,
            audio_channels: media.audio_channels,
            parts: media.parts.into_iter().map(PartRecord::from).collect(),
        }
    }
}

impl From<WirePart> for PartRecord {
    fn from(part: WirePart) -> Self {
        PartRecord {
            file: part.file,
            size: part.size,
            audio_streams: part
                .streams
                .into_iter()
                .filter(|stream| stream.stream_type == Some(AUDIO_STREAM_TYPE))
                .map(|stream| AudioStream {
                    channels: stream.channels,
                    title: stream.title,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_duplicate_search_response() {
        let body = r#"{
            "MediaContainer": {
                "size": 1,
                "Metadata": [
                    {
                        "ratingKey": "1234",
                        "key": "/library/metadata/1234",
                        "title": "Some Movie",
                        "Media": [
                            {
                                "id": 5678,
                                "bitrate": 5000,
                                "videoCodec": "hevc",
                                "videoResolution": "1080",
                                "width": 1920,
                                "height": 1080,
                                "duration": 7200000,
                                "audioCodec": "eac3",
                                "audioChannels": 6,
                                "Part": [
                                    {
                                        "file": "/media/Some Movie (2020).mkv",
                                        "size": 4000000000,
                                        "Stream": [
                                            { "streamType": 1, "channels": null },
                                            { "streamType": 2, "channels": 6, "title": "Surround" },
                                            { "streamType": 2, "channels": 2 }
                                        ]
                                    }
                                ]
                            },
                            { "id": 9999 }
                        ]
                    }
                ]
            }
        }"#;

        let container: MediaContainer<ItemsPayload> = serde_json::from_str(body).unwrap();
        let items: Vec<CatalogItem> = container
            .media_container
            .metadata
            .into_iter()
            .map(CatalogItem::from)
            .collect();

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.key, "/library/metadata/1234");
        assert_eq!(item.title, "Some Movie");
        assert_eq!(item.media.len(), 2);

        let media = &item.media[0];
        assert_eq!(media.id, Some(5678));
        assert_eq!(media.video_codec.as_deref(), Some("hevc"));
        assert_eq!(media.parts.len(), 1);
        // Only audio streams (streamType 2) survive the mapping
        assert_eq!(media.parts[0].audio_streams.len(), 2);
        assert_eq!(media.parts[0].audio_streams[0].channels, Some(6));

        // A media entry with everything missing stays default-tolerant
        let sparse = &item.media[1];
        assert_eq!(sparse.id, Some(9999));
        assert!(sparse.video_codec.is_none());
        assert!(sparse.parts.is_empty());
    }

    #[test]
    fn test_deserialize_sections_directory() {
        let body = r#"{
            "MediaContainer": {
                "Directory": [
                    { "key": "1", "title": "Movies", "type": "movie" },
                    { "key": "2", "title": "TV Shows", "type": "show" }
                ]
            }
        }"#;

        let container: MediaContainer<SectionsPayload> = serde_json::from_str(body).unwrap();
        let sections = container.media_container.directories;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Movies");
        assert_eq!(
            MediaKind::from_section_type(&sections[1].section_type),
            MediaKind::Episode
        );
    }
}
