//! Core types for the rummy photo sampler.
//!
//! This crate provides the fundamental data structures used throughout rummy:
//!
//! - [`Picture`] - A photo with an identity and a lazily computed capture date
//! - [`PictureSource`] - Capability trait implemented by every photo origin
//! - [`DateRange`] - Half-open range of capture timestamps
//! - [`Dimensions`] - Maximum download size hint
//! - [`RunConfig`] - Validated configuration for one run

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rummy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod date_range;
mod error;
mod picture;
mod source;

pub use config::{DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SIZE, Dimensions, Replacement, RunConfig};
pub use date_range::DateRange;
pub use error::{ConfigError, DateRangeError, Result, RummyError};
pub use picture::{Picture, PictureId};
pub use source::PictureSource;
