//! The picture source capability.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::{DateRange, Dimensions, Picture, Result};

/// An origin of pictures: a remote photo library account, a local directory
/// tree, or anything else able to enumerate and materialize photos.
///
/// A source owns whatever session state it needs (credentials, HTTP client,
/// root path). It is created once per run and shared by every [`Picture`] it
/// yields, which call back into it for date resolution and download.
#[async_trait]
pub trait PictureSource: Send + Sync + std::fmt::Debug {
    /// Human readable label used in logs and progress output.
    fn name(&self) -> &str;

    /// Returns every picture whose capture date lies in `range`.
    ///
    /// Ordering is unspecified. No picture outside the range is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration fails or a capture timestamp cannot be
    /// interpreted.
    async fn get_pictures(self: Arc<Self>, range: DateRange) -> Result<Vec<Picture>>;

    /// Computes the capture date of one of this source's pictures.
    ///
    /// Callers go through [`Picture::date`], which memoizes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the picture carries a timestamp in an unknown format.
    fn capture_date(&self, picture: &Picture) -> Result<NaiveDateTime>;

    /// Writes the picture's content into `output_dir`, creating the directory
    /// if needed. Sources that can resize honour `dimensions` on a best-effort
    /// basis.
    ///
    /// Returns `Ok(false)` on a recoverable per-item failure.
    ///
    /// # Errors
    ///
    /// Returns an error for failures the source refuses to swallow.
    async fn resolve_and_download(
        &self,
        picture: &Picture,
        dimensions: Dimensions,
        output_dir: &Path,
    ) -> Result<bool>;
}
