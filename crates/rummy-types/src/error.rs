//! Error types for rummy.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type alias for rummy operations.
pub type Result<T> = std::result::Result<T, RummyError>;

/// Errors that can occur while fetching, sampling, and downloading pictures.
#[derive(Error, Debug)]
pub enum RummyError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The remote service answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error payload returned by the service.
        body: String,
    },

    /// A capture timestamp matched none of the accepted formats.
    #[error("Unrecognized capture timestamp: {value:?}")]
    DateParse {
        /// The offending timestamp text.
        value: String,
    },

    /// Required metadata was missing from a source's response.
    #[error("Missing metadata for {item}: {field}")]
    Metadata {
        /// The picture being resolved.
        item: String,
        /// The missing field.
        field: &'static str,
    },

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Invalid run configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Credentials could not be obtained.
    #[error("Authentication failed for {account}: {reason}")]
    Auth {
        /// The account being authenticated.
        account: String,
        /// Why authentication failed.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start is not strictly before end.
    #[error("Empty date range: {start} is not before {end}")]
    Empty {
        /// The start timestamp.
        start: NaiveDateTime,
        /// The end timestamp.
        end: NaiveDateTime,
    },

    /// Year outside the supported window.
    #[error("Year {0} is outside 1900..3000")]
    YearOutOfBounds(i32),
}

/// Error for invalid run configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Year outside the supported window.
    #[error("Year {0} is outside 1900..3000")]
    Year(i32),

    /// Sample size of zero.
    #[error("Sample size must be greater than zero")]
    SampleSize,

    /// Zero width or height.
    #[error("Maximum dimensions must be positive, got {width}x{height}")]
    Dimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Empty output directory path.
    #[error("Output directory must not be empty")]
    OutputDir,
}
