//! Picture representation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::OnceCell;

use crate::{Dimensions, PictureSource, Result};

/// Opaque, source-specific picture identity (a remote media id or a file path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PictureId(String);

impl PictureId {
    /// Creates a new picture id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PictureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Path> for PictureId {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

/// A downloadable photo with a lazily computed capture date.
///
/// The date is resolved through the owning source on first access and cached;
/// subsequent calls return the same value without touching the source.
/// Concurrent first calls block until one of them has resolved it.
#[derive(Clone)]
pub struct Picture {
    id: PictureId,
    filename: Option<String>,
    captured: Option<String>,
    path: Option<PathBuf>,
    source: Arc<dyn PictureSource>,
    date: OnceCell<NaiveDateTime>,
}

impl Picture {
    /// Creates a picture belonging to `source`.
    #[must_use]
    pub fn new(id: PictureId, source: Arc<dyn PictureSource>) -> Self {
        Self {
            id,
            filename: None,
            captured: None,
            path: None,
            source,
            date: OnceCell::new(),
        }
    }

    /// Sets the original filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the raw capture timestamp reported by the source.
    #[must_use]
    pub fn with_captured(mut self, captured: impl Into<String>) -> Self {
        self.captured = Some(captured.into());
        self
    }

    /// Sets the exact filesystem location of a local picture.
    ///
    /// The id is a lossy string; this keeps file names that are not valid
    /// UTF-8 intact.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Returns the picture id.
    #[must_use]
    pub const fn id(&self) -> &PictureId {
        &self.id
    }

    /// Returns the original filename, if known.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the raw capture timestamp reported by the source, if any.
    #[must_use]
    pub fn captured(&self) -> Option<&str> {
        self.captured.as_deref()
    }

    /// Returns the filesystem location, for pictures backed by a local file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the source this picture came from.
    #[must_use]
    pub fn source(&self) -> &Arc<dyn PictureSource> {
        &self.source
    }

    /// Returns the capture date, computing it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot interpret the picture's
    /// timestamp. Failures are not cached.
    pub fn date(&self) -> Result<NaiveDateTime> {
        self.date
            .get_or_try_init(|| self.source.capture_date(self))
            .copied()
    }

    /// Returns the calendar day of the capture date.
    ///
    /// # Errors
    ///
    /// See [`Picture::date`].
    pub fn day(&self) -> Result<NaiveDate> {
        self.date().map(|date| date.date())
    }

    /// Delegates to the source to write this picture into `output_dir`.
    ///
    /// # Errors
    ///
    /// Propagates errors the source chooses to surface.
    pub async fn download(&self, dimensions: Dimensions, output_dir: &Path) -> Result<bool> {
        self.source
            .resolve_and_download(self, dimensions, output_dir)
            .await
    }
}

impl std::fmt::Debug for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picture")
            .field("id", &self.id)
            .field("filename", &self.filename)
            .field("source", &self.source.name())
            .field("date", &self.date.get())
            .finish()
    }
}
