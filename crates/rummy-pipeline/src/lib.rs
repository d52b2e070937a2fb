//! Fetch, sample and download orchestration for the rummy photo sampler.
//!
//! - [`DateRangeFetcher`] - Collects candidates from every source
//! - [`Downloader`] - Downloads a sample, tolerating per-picture failures
//! - [`ProgressSink`] - Progress reporting hook for front ends
//! - [`run`] - One complete sampling run

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rummy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod download;
mod error;
mod fetch;
mod progress;
mod run;

#[cfg(test)]
mod testing;

pub use download::{DownloadReport, Downloader};
pub use error::{PipelineError, Result};
pub use fetch::DateRangeFetcher;
pub use progress::{NoProgress, ProgressSink};
pub use run::{RunSummary, run};
