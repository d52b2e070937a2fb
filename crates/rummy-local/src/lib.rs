//! Local directory picture source for the rummy photo sampler.
//!
//! - [`find_images`] - Recursive JPEG discovery
//! - [`capture_date`] - EXIF capture time with modification-time fallback
//! - [`FileSource`] - [`rummy_types::PictureSource`] implementation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rummy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capture;
mod discover;
mod source;

pub use capture::{ExifDateError, capture_date, exif_capture_date, modified_time};
pub use discover::{find_images, is_jpeg};
pub use source::FileSource;
