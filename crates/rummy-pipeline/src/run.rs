//! A complete sampling run.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rummy_sample::DaySampler;
use rummy_types::{PictureSource, RunConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::{DateRangeFetcher, Downloader, PipelineError, ProgressSink, Result};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Pictures found within the target year.
    pub candidates: usize,
    /// Pictures drawn by the sampler.
    pub selected: usize,
    /// Pictures saved to the output directory.
    pub downloaded: usize,
    /// Directory the pictures were saved to.
    pub output_dir: PathBuf,
}

/// Fetches, samples and downloads the pictures of `config.year`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, no source is given, a
/// source fails to list its pictures, or the sample cannot be drawn.
/// Individual download failures are not errors; they show up as a lower
/// `downloaded` count.
pub async fn run(
    config: &RunConfig,
    sources: Vec<Arc<dyn PictureSource>>,
    progress: &dyn ProgressSink,
) -> Result<RunSummary> {
    config.validate()?;
    if sources.is_empty() {
        return Err(PipelineError::NoSources);
    }
    let range = config.date_range()?;

    let candidates = DateRangeFetcher::new(sources).fetch(range, progress).await?;
    info!("Fetched {} candidates", candidates.len());

    let sampler = DaySampler::new(config.replacement);
    let sample = match config.seed {
        Some(seed) => sampler.sample_with_rng(
            &candidates,
            config.sample_size,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => sampler.sample(&candidates, config.sample_size)?,
    };
    info!("Selected {} random photos", sample.len());

    let report = Downloader::new(config.dimensions, &config.output_dir)
        .download(&sample, progress)
        .await;
    info!(
        "Downloaded {} photos to {}",
        report.downloaded,
        config.output_dir.display()
    );

    Ok(RunSummary {
        candidates: candidates.len(),
        selected: sample.len(),
        downloaded: report.downloaded,
        output_dir: config.output_dir.clone(),
    })
}
