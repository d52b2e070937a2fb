//! Local directory picture source.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rummy_types::{
    DateRange, Dimensions, Picture, PictureId, PictureSource, Result, RummyError,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{capture_date, find_images};

/// A directory tree of JPEG files.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
    name: String,
}

impl FileSource {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        Self { root, name }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl PictureSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_pictures(self: Arc<Self>, range: DateRange) -> Result<Vec<Picture>> {
        info!(root = %self.root.display(), %range, "scanning directory");
        let root = self.root.clone();
        let handle: Arc<dyn PictureSource> = self;

        // EXIF reads are blocking file I/O
        let pictures = tokio::task::spawn_blocking(move || -> Result<Vec<Picture>> {
            let paths = find_images(&root)?;
            let total = paths.len();
            let mut in_range = Vec::new();
            for path in paths {
                let mut picture = Picture::new(PictureId::from(path.as_path()), handle.clone());
                if let Some(name) = path.file_name() {
                    picture = picture.with_filename(name.to_string_lossy());
                }
                let picture = picture.with_path(path);
                if range.contains(picture.date()?) {
                    in_range.push(picture);
                }
            }
            info!(
                root = %root.display(),
                files = total,
                candidates = in_range.len(),
                "scanned directory"
            );
            Ok(in_range)
        })
        .await
        .map_err(|e| RummyError::Io(std::io::Error::other(e)))??;

        Ok(pictures)
    }

    fn capture_date(&self, picture: &Picture) -> Result<NaiveDateTime> {
        Ok(capture_date(&local_path(picture)))
    }

    async fn resolve_and_download(
        &self,
        picture: &Picture,
        _dimensions: Dimensions,
        output_dir: &Path,
    ) -> Result<bool> {
        let from = local_path(picture);
        let file_name = from.file_name().ok_or_else(|| RummyError::Metadata {
            item: picture.id().to_string(),
            field: "file name",
        })?;
        let to = output_dir.join(file_name);
        let output_dir = output_dir.to_path_buf();

        tokio::task::spawn_blocking(move || copy_preserving_mtime(&from, &output_dir, &to))
            .await
            .map_err(|e| RummyError::Io(std::io::Error::other(e)))??;

        debug!(id = %picture.id(), "copied");
        Ok(true)
    }
}

/// The file behind a picture; ids are only used for pictures built elsewhere.
fn local_path(picture: &Picture) -> PathBuf {
    picture
        .path()
        .map_or_else(|| PathBuf::from(picture.id().as_str()), Path::to_path_buf)
}

/// Copies `from` to `to` byte for byte and carries over the modification time.
fn copy_preserving_mtime(from: &Path, output_dir: &Path, to: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let modified = std::fs::metadata(from)?.modified()?;
    std::fs::copy(from, to)?;
    File::options().write(true).open(to)?.set_modified(modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::tests::{jpeg_with_capture_time, set_mtime};
    use std::fs;

    #[tokio::test]
    async fn test_get_pictures_filters_by_range() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("trip");
        fs::create_dir_all(&nested).unwrap();

        fs::write(
            dir.path().join("exif.jpg"),
            jpeg_with_capture_time("2024:07:04 10:30:05"),
        )
        .unwrap();
        fs::write(
            dir.path().join("old-exif.JPEG"),
            jpeg_with_capture_time("2019:01:01 08:00:00"),
        )
        .unwrap();
        fs::write(nested.join("mtime-2024.jpg"), b"no exif").unwrap();
        set_mtime(&nested.join("mtime-2024.jpg"), 1_718_450_000);
        fs::write(nested.join("mtime-2023.jpg"), b"no exif").unwrap();
        set_mtime(&nested.join("mtime-2023.jpg"), 1_686_800_000);
        fs::write(nested.join("ignored.png"), b"png").unwrap();

        let source = Arc::new(FileSource::new(dir.path()));
        let range = DateRange::year(2024).unwrap();
        let pictures = source.get_pictures(range).await.unwrap();

        let mut names: Vec<_> = pictures.iter().filter_map(Picture::filename).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["exif.jpg", "mtime-2024.jpg"]);
        assert!(pictures.iter().all(|p| range.contains(p.date().unwrap())));
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_non_utf8_file_name_keeps_its_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.jpg");
        let bytes = jpeg_with_capture_time("2024:07:04 10:30:05");
        fs::write(dir.path().join(name), &bytes).unwrap();

        let source = Arc::new(FileSource::new(dir.path()));
        let pictures = source
            .clone()
            .get_pictures(DateRange::year(2024).unwrap())
            .await
            .unwrap();

        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].path(), Some(dir.path().join(name).as_path()));
        assert_eq!(
            pictures[0].date().unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 7, 4)
                .unwrap()
                .and_hms_opt(10, 30, 5)
                .unwrap()
        );

        let output_dir = dir.path().join("out");
        assert!(
            pictures[0]
                .download(Dimensions::default(), &output_dir)
                .await
                .unwrap()
        );
        assert_eq!(fs::read(output_dir.join(name)).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_get_pictures_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let source = Arc::new(FileSource::new(dir.path().join("absent")));
        let result = source.get_pictures(DateRange::year(2024).unwrap()).await;
        assert!(matches!(result, Err(RummyError::Io(_))));
    }

    #[tokio::test]
    async fn test_download_copies_bytes_and_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("a.jpg");
        let bytes = jpeg_with_capture_time("2024:07:04 10:30:05");
        fs::write(&original, &bytes).unwrap();
        let mtime = set_mtime(&original, 1_718_450_000);

        let source = Arc::new(FileSource::new(dir.path()));
        let picture = Picture::new(PictureId::from(original.as_path()), source.clone());
        let output_dir = dir.path().join("out").join("2024");

        let ok = source
            .resolve_and_download(&picture, Dimensions::new(1, 1), &output_dir)
            .await
            .unwrap();

        assert!(ok);
        let copied = output_dir.join("a.jpg");
        assert_eq!(fs::read(&copied).unwrap(), bytes);
        assert_eq!(fs::metadata(&copied).unwrap().modified().unwrap(), mtime);
    }

    #[tokio::test]
    async fn test_download_surfaces_copy_errors() {
        let dir = tempfile::tempdir().unwrap();
        let source = Arc::new(FileSource::new(dir.path()));
        let picture = Picture::new(
            PictureId::from(dir.path().join("vanished.jpg").as_path()),
            source.clone(),
        );

        let result = source
            .resolve_and_download(&picture, Dimensions::default(), &dir.path().join("out"))
            .await;

        assert!(matches!(result, Err(RummyError::Io(_))));
    }
}
