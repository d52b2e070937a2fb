//! Library for sampling a year of photos from Google Photos and local folders.
//!
//! This is a facade crate that re-exports functionality from the rummy
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use rummy_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = RunConfig::new(2024);
//!     config.sample_size = 20;
//!
//!     let sources: Vec<Arc<dyn PictureSource>> = vec![Arc::new(FileSource::new("/photos"))];
//!     let summary = run(&config, sources, &NoProgress).await?;
//!     println!("Downloaded {} of {} candidates", summary.downloaded, summary.candidates);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rummy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use rummy_types::*;

// Re-export the remote library source
#[cfg(feature = "remote")]
pub use rummy_fetch::{
    AccessToken, ApiClient, ApiError, ClientConfig, MediaItem, Paginator, RemoteSource,
    StaticToken, TokenProvider, url::DEFAULT_BASE_URL,
};

// Re-export the local directory source
#[cfg(feature = "local")]
pub use rummy_local::{FileSource, capture_date, find_images};

// Re-export sampling
#[cfg(feature = "sample")]
pub use rummy_sample::{DaySampler, SampleError, date_counts};

// Re-export orchestration
#[cfg(feature = "pipeline")]
pub use rummy_pipeline::{
    DateRangeFetcher, DownloadReport, Downloader, NoProgress, PipelineError, ProgressSink,
    RunSummary, run,
};

/// Prelude module for convenient imports.
///
/// ```
/// use rummy_lib::prelude::*;
/// ```
pub mod prelude {
    pub use rummy_types::{
        DateRange, Dimensions, Picture, PictureId, PictureSource, Replacement, Result,
        RummyError, RunConfig,
    };

    #[cfg(feature = "remote")]
    pub use rummy_fetch::{ApiClient, ClientConfig, RemoteSource, StaticToken, TokenProvider};

    #[cfg(feature = "local")]
    pub use rummy_local::FileSource;

    #[cfg(feature = "sample")]
    pub use rummy_sample::DaySampler;

    #[cfg(feature = "pipeline")]
    pub use rummy_pipeline::{NoProgress, ProgressSink, RunSummary, run};
}
