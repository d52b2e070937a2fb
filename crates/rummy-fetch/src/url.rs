//! Photo library URL construction.

use rummy_types::Dimensions;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://photoslibrary.googleapis.com/v1";

/// Builds the media item listing URL.
///
/// # Example
///
/// ```
/// use rummy_fetch::url::media_items_url;
///
/// let url = media_items_url("https://photoslibrary.googleapis.com/v1/");
/// assert_eq!(url, "https://photoslibrary.googleapis.com/v1/mediaItems");
/// ```
#[must_use]
pub fn media_items_url(base: &str) -> String {
    format!("{}/mediaItems", base.trim_end_matches('/'))
}

/// Builds the URL for a single media item's metadata.
#[must_use]
pub fn media_item_url(base: &str, id: &str) -> String {
    format!("{}/{}", media_items_url(base), id)
}

/// Appends the width and height directives to a media item's base URL.
///
/// # Example
///
/// ```
/// use rummy_fetch::url::content_url;
/// use rummy_types::Dimensions;
///
/// let url = content_url("https://lh3.example.com/abc", Dimensions::new(4032, 2268));
/// assert_eq!(url, "https://lh3.example.com/abc=w4032-h2268");
/// ```
#[must_use]
pub fn content_url(base_url: &str, dimensions: Dimensions) -> String {
    format!(
        "{}=w{}-h{}",
        base_url, dimensions.max_width, dimensions.max_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_items_url() {
        assert_eq!(
            media_items_url(DEFAULT_BASE_URL),
            "https://photoslibrary.googleapis.com/v1/mediaItems"
        );
    }

    #[test]
    fn test_media_item_url() {
        assert_eq!(
            media_item_url("http://127.0.0.1:8080", "AF1Qip"),
            "http://127.0.0.1:8080/mediaItems/AF1Qip"
        );
    }

    #[test]
    fn test_content_url_small() {
        let url = content_url("https://lh3.example.com/x", Dimensions::new(640, 480));
        assert!(url.ends_with("=w640-h480"));
    }
}
