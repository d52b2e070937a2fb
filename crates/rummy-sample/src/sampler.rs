//! Weighted, day-aware random selection.

use chrono::NaiveDate;
use rand::Rng;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::seq::SliceRandom;
use rummy_types::{Picture, Replacement, RummyError};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Baseline weight every candidate receives.
pub const UNIFORM_WEIGHT: f64 = 0.8;

/// Weight shared among all candidates of the same day.
pub const DAILY_WEIGHT: f64 = 0.2;

/// Errors that can occur while sampling.
#[derive(Error, Debug)]
pub enum SampleError {
    /// A candidate's capture date could not be resolved.
    #[error(transparent)]
    Date(#[from] RummyError),

    /// The weights do not form a valid distribution.
    #[error("Invalid weights: {0}")]
    Weights(#[from] WeightedError),
}

/// Counts candidates per calendar day.
#[must_use]
pub fn date_counts(days: &[NaiveDate]) -> HashMap<NaiveDate, usize> {
    let mut counts = HashMap::new();
    for day in days {
        *counts.entry(*day).or_insert(0) += 1;
    }
    counts
}

/// Draws a fixed-size sample, damping days with many pictures.
///
/// Each candidate weighs `uniform_weight + daily_weight / n`, where `n` is the
/// number of candidates sharing its calendar day. A lone picture of an
/// ordinary day gets close to the maximum weight while each shot of a busy day
/// stays near the uniform baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySampler {
    uniform_weight: f64,
    daily_weight: f64,
    replacement: Replacement,
}

impl Default for DaySampler {
    fn default() -> Self {
        Self::new(Replacement::default())
    }
}

impl DaySampler {
    /// Creates a sampler with the standard weights.
    #[must_use]
    pub const fn new(replacement: Replacement) -> Self {
        Self {
            uniform_weight: UNIFORM_WEIGHT,
            daily_weight: DAILY_WEIGHT,
            replacement,
        }
    }

    /// Overrides the uniform and per-day weights.
    #[must_use]
    pub const fn with_weights(mut self, uniform_weight: f64, daily_weight: f64) -> Self {
        self.uniform_weight = uniform_weight;
        self.daily_weight = daily_weight;
        self
    }

    /// Returns the sampling mode.
    #[must_use]
    pub const fn replacement(&self) -> Replacement {
        self.replacement
    }

    /// Returns each candidate's selection weight, in input order.
    #[must_use]
    pub fn selection_weights(&self, days: &[NaiveDate]) -> Vec<f64> {
        let counts = date_counts(days);
        days.iter()
            .map(|day| self.uniform_weight + self.daily_weight / counts[day] as f64)
            .collect()
    }

    /// Samples `sample_size` pictures using the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns an error if a capture date cannot be resolved or the weights
    /// are degenerate.
    pub fn sample(
        &self,
        pictures: &[Picture],
        sample_size: usize,
    ) -> Result<Vec<Picture>, SampleError> {
        self.sample_with_rng(pictures, sample_size, &mut rand::thread_rng())
    }

    /// Samples `sample_size` pictures using `rng`.
    ///
    /// Returns `min(sample_size, pictures.len())` pictures.
    ///
    /// # Errors
    ///
    /// Returns an error if a capture date cannot be resolved or the weights
    /// are degenerate.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        pictures: &[Picture],
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Picture>, SampleError> {
        if pictures.is_empty() {
            return Ok(Vec::new());
        }
        let days = pictures
            .iter()
            .map(Picture::day)
            .collect::<Result<Vec<_>, _>>()?;

        let indices = self.sample_indices(&days, sample_size, rng)?;
        Ok(indices.into_iter().map(|i| pictures[i].clone()).collect())
    }

    /// Samples candidate positions given each candidate's capture day.
    ///
    /// # Errors
    ///
    /// Returns an error if the weights are degenerate.
    pub fn sample_indices<R: Rng + ?Sized>(
        &self,
        days: &[NaiveDate],
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, WeightedError> {
        let amount = sample_size.min(days.len());
        if amount == 0 {
            return Ok(Vec::new());
        }
        let weights = self.selection_weights(days);

        let indices: Vec<usize> = match self.replacement {
            Replacement::WithReplacement => {
                let distribution = WeightedIndex::new(&weights)?;
                (0..amount).map(|_| distribution.sample(rng)).collect()
            }
            Replacement::WithoutReplacement => {
                let positions: Vec<usize> = (0..days.len()).collect();
                positions
                    .choose_multiple_weighted(rng, amount, |&i| weights[i])?
                    .copied()
                    .collect()
            }
        };

        let distinct = indices.iter().collect::<HashSet<_>>().len();
        if distinct < indices.len() {
            debug!(
                selected = indices.len(),
                distinct, "sample contains repeated pictures"
            );
        }
        Ok(indices)
    }
}
