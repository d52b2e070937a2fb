//! Remote photo library source for the rummy photo sampler.
//!
//! This crate provides the remote acquisition pipeline:
//!
//! - [`url`] - Listing, detail, and content URL construction
//! - [`ApiClient`] - HTTP client with bearer auth and retries
//! - [`MediaItem`] - Service JSON models and candidate filtering
//! - [`Paginator`] - Page loop with the early-stop heuristic
//! - [`RemoteSource`] - [`rummy_types::PictureSource`] implementation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rummy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod auth;
mod client;
mod model;
mod paginate;
mod source;
pub mod url;

pub use auth::{AccessToken, StaticToken, TokenProvider};
pub use client::{ApiClient, ApiError, ClientConfig};
pub use model::{
    COMPOSITE_MARKERS, MediaItem, MediaItemsPage, MediaMetadata, is_composite,
    parse_creation_time,
};
pub use paginate::{Collected, MAX_PAGES, Page, Paginator};
pub use source::RemoteSource;
