//! Day-balanced weighted sampling for the rummy photo sampler.
//!
//! - [`DaySampler`] - Weighted random selection of pictures
//! - [`date_counts`] - Candidates per calendar day

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rummy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod sampler;

pub use rummy_types::Replacement;
pub use sampler::{DAILY_WEIGHT, DaySampler, SampleError, UNIFORM_WEIGHT, date_counts};
