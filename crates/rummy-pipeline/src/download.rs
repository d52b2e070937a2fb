//! Sample download.

use rummy_types::{Dimensions, Picture, PictureId, RummyError};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::ProgressSink;

/// Outcome of downloading a sample.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Number of pictures visited.
    pub attempted: usize,
    /// Number of pictures saved.
    pub downloaded: usize,
    /// Pictures whose download raised an error.
    pub errors: Vec<(PictureId, RummyError)>,
}

impl DownloadReport {
    /// Number of pictures that were not saved.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.attempted - self.downloaded
    }
}

/// Downloads sampled pictures into one directory.
#[derive(Debug, Clone)]
pub struct Downloader {
    dimensions: Dimensions,
    output_dir: PathBuf,
}

impl Downloader {
    /// Creates a downloader writing into `output_dir`.
    #[must_use]
    pub fn new(dimensions: Dimensions, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            dimensions,
            output_dir: output_dir.into(),
        }
    }

    /// Returns the target directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Downloads every picture of `sample`, in order.
    ///
    /// A picture that fails is counted and the loop moves on. A picture
    /// sampled twice is downloaded twice.
    pub async fn download(
        &self,
        sample: &[Picture],
        progress: &dyn ProgressSink,
    ) -> DownloadReport {
        let mut report = DownloadReport::default();
        progress.start("Downloading pictures", Some(sample.len() as u64));

        for picture in sample {
            report.attempted += 1;
            match picture.download(self.dimensions, &self.output_dir).await {
                Ok(true) => report.downloaded += 1,
                Ok(false) => {
                    warn!(
                        id = %picture.id(),
                        source = picture.source().name(),
                        "picture not downloaded"
                    );
                }
                Err(e) => {
                    error!(
                        id = %picture.id(),
                        source = picture.source().name(),
                        error = %e,
                        "download failed"
                    );
                    report.errors.push((picture.id().clone(), e));
                }
            }
            progress.advance(1);
        }

        progress.finish(&format!(
            "{} of {} downloaded",
            report.downloaded, report.attempted
        ));
        info!(
            attempted = report.attempted,
            downloaded = report.downloaded,
            output_dir = %self.output_dir.display(),
            "download finished"
        );
        report
    }
}
