//! Run configuration and validation.

use std::path::PathBuf;

use crate::{ConfigError, DateRange};

/// Default number of pictures to select.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "photos";

/// Maximum picture dimensions requested from sources that can resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Maximum height in pixels.
    pub max_height: u32,
}

impl Dimensions {
    /// Creates a new dimension hint.
    #[must_use]
    pub const fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(4032, 2268)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.max_width, self.max_height)
    }
}

/// Whether the sampler may pick the same picture more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Replacement {
    /// Independent weighted draws; a picture can be selected repeatedly.
    #[default]
    WithReplacement,
    /// Every picture is selected at most once.
    WithoutReplacement,
}

/// Configuration for one sampling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Calendar year to sample from.
    pub year: i32,
    /// Number of pictures to select.
    pub sample_size: usize,
    /// Download size hint.
    pub dimensions: Dimensions,
    /// Directory the selected pictures are written to.
    pub output_dir: PathBuf,
    /// Sampling mode.
    pub replacement: Replacement,
    /// Optional seed for the sampler's random generator.
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Creates a configuration for the given year with default settings.
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            year,
            sample_size: DEFAULT_SAMPLE_SIZE,
            dimensions: Dimensions::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            replacement: Replacement::default(),
            seed: None,
        }
    }

    /// Checks every field before any network or filesystem work starts.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1900..3000).contains(&self.year) {
            return Err(ConfigError::Year(self.year));
        }
        if self.sample_size == 0 {
            return Err(ConfigError::SampleSize);
        }
        if self.dimensions.max_width == 0 || self.dimensions.max_height == 0 {
            return Err(ConfigError::Dimensions {
                width: self.dimensions.max_width,
                height: self.dimensions.max_height,
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::OutputDir);
        }
        Ok(())
    }

    /// Returns the half-open range covering the configured year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is out of bounds.
    pub fn date_range(&self) -> Result<DateRange, ConfigError> {
        DateRange::year(self.year).map_err(|_| ConfigError::Year(self.year))
    }
}
