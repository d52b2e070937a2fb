//! Run command implementation.
//!
//! Resolves the run configuration from flags and prompts, builds the picture
//! sources and hands them to the pipeline.

use crate::progress::BarProgress;
use crate::prompt::{self, PromptToken, SourceKind};
use anyhow::{Context, Result};
use clap::Args;
use indicatif::MultiProgress;
use rummy_lib::prelude::*;
use rummy_lib::{DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SIZE};
use std::path::PathBuf;
use std::sync::Arc;

/// Flags of `rummy run`.
#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Year to sample (prompted for when omitted)
    #[arg(long)]
    pub(crate) year: Option<i32>,

    /// Number of photos to pick (prompted for when omitted)
    #[arg(short = 'n', long)]
    pub(crate) sample_size: Option<usize>,

    /// Directory the photos are saved to (prompted for when omitted)
    #[arg(short, long)]
    pub(crate) output_dir: Option<PathBuf>,

    /// Maximum width of remote downloads
    #[arg(long, default_value_t = Dimensions::default().max_width)]
    pub(crate) max_width: u32,

    /// Maximum height of remote downloads
    #[arg(long, default_value_t = Dimensions::default().max_height)]
    pub(crate) max_height: u32,

    /// Pick every photo at most once
    #[arg(long)]
    pub(crate) without_replacement: bool,

    /// Seed for a repeatable selection
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Google Photos account to sample from (repeatable)
    #[arg(long = "remote", value_name = "ACCOUNT")]
    pub(crate) remotes: Vec<String>,

    /// Local directory to sample from (repeatable)
    #[arg(long = "path", value_name = "DIR")]
    pub(crate) paths: Vec<PathBuf>,

    /// Access token for a single Google Photos account (prompted per account when omitted)
    #[arg(long, env = "RUMMY_ACCESS_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Photos Library API base URL
    #[arg(long, default_value = rummy_lib::DEFAULT_BASE_URL)]
    pub(crate) api_base: String,

    /// Never prompt; use defaults for anything not given
    #[arg(short, long)]
    pub(crate) yes: bool,
}

impl RunArgs {
    /// Sources given on the command line, remote accounts first.
    fn sources(&self) -> Vec<SourceKind> {
        self.remotes
            .iter()
            .cloned()
            .map(SourceKind::Remote)
            .chain(self.paths.iter().cloned().map(SourceKind::Local))
            .collect()
    }
}

/// Builds the run configuration, prompting for whatever is missing.
fn resolve_config(args: &RunArgs) -> Result<RunConfig> {
    let year = match args.year {
        Some(year) => year,
        None if args.yes => prompt::default_year(),
        None => prompt::year()?,
    };
    let sample_size = match args.sample_size {
        Some(n) => n,
        None if args.yes => DEFAULT_SAMPLE_SIZE,
        None => prompt::sample_size()?,
    };
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None if args.yes => PathBuf::from(DEFAULT_OUTPUT_DIR),
        None => prompt::output_dir()?,
    };

    let mut config = RunConfig::new(year);
    config.sample_size = sample_size;
    config.output_dir = output_dir;
    config.dimensions = Dimensions::new(args.max_width, args.max_height);
    config.seed = args.seed;
    if args.without_replacement {
        config.replacement = Replacement::WithoutReplacement;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Instantiates the picture sources, one per entry.
fn build_sources(
    args: &RunArgs,
    kinds: Vec<SourceKind>,
    display: MultiProgress,
) -> Result<Vec<Arc<dyn PictureSource>>> {
    let client = ApiClient::new(ClientConfig {
        base_url: args.api_base.clone(),
        ..Default::default()
    })
    .context("Failed to create HTTP client")?;
    let remotes = kinds
        .iter()
        .filter(|kind| matches!(kind, SourceKind::Remote(_)))
        .count();
    if args.token.is_some() && remotes > 1 {
        anyhow::bail!(
            "--token / RUMMY_ACCESS_TOKEN applies to a single --remote account; \
             omit it to be prompted per account"
        );
    }
    let tokens: Arc<dyn TokenProvider> = match &args.token {
        Some(token) => Arc::new(StaticToken::new(token.as_str())),
        None => Arc::new(PromptToken::new(display)),
    };

    Ok(kinds
        .into_iter()
        .map(|kind| -> Arc<dyn PictureSource> {
            match kind {
                SourceKind::Remote(account) => {
                    Arc::new(RemoteSource::new(account, client.clone(), tokens.clone()))
                }
                SourceKind::Local(path) => Arc::new(FileSource::new(path)),
            }
        })
        .collect())
}

/// Samples a year of photos and downloads them.
pub(crate) async fn run(args: RunArgs, quiet: bool) -> Result<()> {
    let config = resolve_config(&args)?;

    let mut kinds = args.sources();
    if kinds.is_empty() {
        if args.yes {
            anyhow::bail!("No sources given; pass --remote <ACCOUNT> or --path <DIR>");
        }
        kinds = prompt::sources()?;
    }

    let progress = BarProgress::new(quiet);
    let sources = build_sources(&args, kinds, progress.multi())?;
    let summary = rummy_lib::run(&config, sources, &progress)
        .await
        .context("Sampling run failed")?;

    if !quiet {
        println!("Fetched {} candidates", summary.candidates);
        println!("Selected {} random photos", summary.selected);
        println!(
            "Downloaded {} photos to {}!",
            summary.downloaded,
            summary.output_dir.display()
        );
    }

    Ok(())
}
