//! Candidate collection across sources.

use rummy_types::{DateRange, Picture, PictureSource, Result};
use std::sync::Arc;
use tracing::info;

use crate::ProgressSink;

/// Collects the pictures of a date range from several sources.
#[derive(Debug, Clone, Default)]
pub struct DateRangeFetcher {
    sources: Vec<Arc<dyn PictureSource>>,
}

impl DateRangeFetcher {
    /// Creates a fetcher over `sources`, queried in order.
    #[must_use]
    pub const fn new(sources: Vec<Arc<dyn PictureSource>>) -> Self {
        Self { sources }
    }

    /// Returns the configured sources.
    #[must_use]
    pub fn sources(&self) -> &[Arc<dyn PictureSource>] {
        &self.sources
    }

    /// Fetches every source's pictures within `range`.
    ///
    /// Results are concatenated in source order. A picture reachable through
    /// two sources appears twice.
    ///
    /// # Errors
    ///
    /// Returns the first source error; later sources are not queried.
    pub async fn fetch(
        &self,
        range: DateRange,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Picture>> {
        progress.start("Fetching pictures", Some(self.sources.len() as u64));

        let mut candidates = Vec::new();
        for source in &self.sources {
            let pictures = Arc::clone(source).get_pictures(range).await?;
            info!(
                source = source.name(),
                count = pictures.len(),
                "fetched pictures"
            );
            candidates.extend(pictures);
            progress.advance(1);
        }

        progress.finish(&format!("{} candidates", candidates.len()));
        info!(count = candidates.len(), %range, "fetched candidates");
        Ok(candidates)
    }
}
