//! Photo library JSON models and candidate filtering.

use chrono::NaiveDateTime;
use rummy_types::{Result, RummyError};
use serde::Deserialize;

/// Filename markers of synthetic multi-shot creations.
pub const COMPOSITE_MARKERS: [&str; 4] = ["PANO", "PHOTOSPHERE", "POP_OUT", "COLLAGE"];

/// Accepted capture timestamp formats, tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S%.fZ"];

/// One page of the media item listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsPage {
    /// Items on this page. Absent when the library is empty.
    #[serde(default)]
    pub media_items: Vec<MediaItem>,
    /// Continuation token, absent on the last page.
    pub next_page_token: Option<String>,
}

/// A media item as returned by the listing and detail endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Service-assigned identifier.
    pub id: String,
    /// Original filename.
    #[serde(default)]
    pub filename: String,
    /// MIME type, e.g. `image/jpeg` or `video/mp4`.
    #[serde(default)]
    pub mime_type: String,
    /// Content URL, to be suffixed with size directives.
    pub base_url: Option<String>,
    /// Capture metadata.
    #[serde(default)]
    pub media_metadata: MediaMetadata,
}

/// Capture metadata of a media item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    /// Capture time, `YYYY-MM-DDThh:mm:ss[.ffffff]Z`.
    pub creation_time: Option<String>,
}

impl MediaItem {
    /// Returns true for still images.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image")
    }

    /// Returns true if the item is a still image that is not a composite.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.is_image() && !is_composite(&self.filename)
    }
}

/// Returns true if the filename marks a panorama, photosphere, pop-out or collage.
#[must_use]
pub fn is_composite(filename: &str) -> bool {
    COMPOSITE_MARKERS
        .iter()
        .any(|marker| filename.contains(marker))
}

/// Parses a capture timestamp with or without fractional seconds.
///
/// # Errors
///
/// Returns [`RummyError::DateParse`] if neither format matches.
pub fn parse_creation_time(value: &str) -> Result<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| RummyError::DateParse {
            value: value.to_string(),
        })
}
