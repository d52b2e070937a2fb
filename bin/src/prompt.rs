//! Interactive prompts for values missing from the command line.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, Days, Local};
use indicatif::MultiProgress;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Password, PasswordDisplayMode, Select, Text};
use rummy_lib::{AccessToken, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SIZE, RummyError, TokenProvider};
use std::path::PathBuf;

/// Source types offered by the interactive source loop.
const SOURCE_TYPES: [&str; 2] = ["google_photos", "files"];

/// Days subtracted from today to pick the default year.
///
/// Keeps the previous year as the default until late September.
const DEFAULT_YEAR_LAG: Days = Days::new(270);

/// A picture source chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SourceKind {
    /// A Google Photos account.
    Remote(String),
    /// A local directory tree.
    Local(PathBuf),
}

/// The year suggested when none is given.
pub(crate) fn default_year() -> i32 {
    (Local::now().date_naive() - DEFAULT_YEAR_LAG).year()
}

pub(crate) fn year() -> Result<i32> {
    CustomType::<i32>::new("Year:")
        .with_default(default_year())
        .with_error_message("Please type a valid year")
        .prompt()
        .context("Year prompt cancelled")
}

pub(crate) fn sample_size() -> Result<usize> {
    CustomType::<usize>::new("Sample size:")
        .with_default(DEFAULT_SAMPLE_SIZE)
        .with_error_message("Please type a whole number")
        .with_validator(|n: &usize| {
            Ok(if *n == 0 {
                Validation::Invalid("Pick at least one photo".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()
        .context("Sample size prompt cancelled")
}

pub(crate) fn output_dir() -> Result<PathBuf> {
    Text::new("Output directory:")
        .with_default(DEFAULT_OUTPUT_DIR)
        .prompt()
        .map(PathBuf::from)
        .context("Output directory prompt cancelled")
}

/// Asks for sources until the user declines to add another.
pub(crate) fn sources() -> Result<Vec<SourceKind>> {
    let mut sources = Vec::new();
    loop {
        let kind = Select::new("Source type:", SOURCE_TYPES.to_vec())
            .prompt()
            .context("Source prompt cancelled")?;
        let source = match kind {
            "google_photos" => SourceKind::Remote(
                Text::new("Account name:")
                    .prompt()
                    .context("Account prompt cancelled")?,
            ),
            _ => SourceKind::Local(PathBuf::from(
                Text::new("Directory:")
                    .prompt()
                    .context("Directory prompt cancelled")?,
            )),
        };
        sources.push(source);

        let another = Confirm::new("Add another source?")
            .with_default(false)
            .prompt()
            .context("Source prompt cancelled")?;
        if !another {
            return Ok(sources);
        }
    }
}

/// Asks for an access token on the terminal, once per source.
///
/// Progress bars are suspended while the prompt is shown.
#[derive(Debug, Clone)]
pub(crate) struct PromptToken {
    display: MultiProgress,
}

impl PromptToken {
    pub(crate) const fn new(display: MultiProgress) -> Self {
        Self { display }
    }
}

#[async_trait]
impl TokenProvider for PromptToken {
    async fn token(&self, account: &str) -> rummy_lib::Result<AccessToken> {
        let display = self.display.clone();
        let message = format!("Access token for {account}:");
        let secret = tokio::task::spawn_blocking(move || {
            display.suspend(|| {
                Password::new(&message)
                    .without_confirmation()
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .prompt()
            })
        })
        .await
        .map_err(|e| RummyError::Io(std::io::Error::other(e)))?
        .map_err(|e| RummyError::Auth {
            account: account.to_string(),
            reason: e.to_string(),
        })?;

        Ok(AccessToken::new(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_year_is_recent() {
        let this_year = Local::now().year();
        let year = default_year();
        assert!(year == this_year || year == this_year - 1);
    }
}
