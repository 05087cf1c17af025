//! Censoring CLI Application.
//!
//! Command-line interface for the censoror library: expands input globs,
//! censors each file and writes `<name>.censored` copies to an output
//! directory.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use censoror::config::{Credentials, ServiceConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use censoror::{
    select_files, BatchProcessor, GoogleLanguageClient, HeuristicPersonRecognizer,
    RedactionService, StatsDestination,
};

/// `--stats` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatsArg {
    Stdout,
    Stderr,
}

impl From<StatsArg> for StatsDestination {
    fn from(arg: StatsArg) -> Self {
        match arg {
            StatsArg::Stdout => Self::Stdout,
            StatsArg::Stderr => Self::Stderr,
        }
    }
}

/// Censor files based on specified entity types.
///
/// Redacts person names, dates, phone numbers and addresses from plain-text
/// files, writing `<name>.censored` copies to the output directory.
#[derive(Parser)]
#[command(name = "censoror")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Glob patterns representing input files
    #[arg(long, value_name = "GLOB", num_args = 1..)]
    input: Vec<String>,

    /// Directory to store censored files
    #[arg(long, value_name = "DIR")]
    output: PathBuf,

    /// Censor names
    #[arg(long)]
    names: bool,

    /// Censor dates
    #[arg(long)]
    dates: bool,

    /// Censor phone numbers
    #[arg(long)]
    phones: bool,

    /// Censor addresses
    #[arg(long)]
    address: bool,

    /// Output statistics to stdout or stderr
    #[arg(long, value_enum, default_value_t = StatsArg::Stderr)]
    stats: StatsArg,

    /// Cloud Natural Language API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OAuth2 access token, used when no API key is given
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Service-account JSON key file, used when no key or token is given
    #[arg(long, value_name = "FILE", env = "GOOGLE_APPLICATION_CREDENTIALS")]
    credentials: Option<PathBuf>,

    /// Base URL of the entity-analysis service
    #[arg(long, env = "CENSOROR_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "CENSOROR_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl Cli {
    /// Names of the censor flags that were set.
    fn censor_flags(&self) -> Vec<&'static str> {
        [
            ("names", self.names),
            ("dates", self.dates),
            ("phones", self.phones),
            ("address", self.address),
        ]
        .into_iter()
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect()
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig::default()
            .with_credentials(Credentials::resolve(
                self.api_key.clone(),
                self.access_token.clone(),
                self.credentials.clone(),
            ))
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

/// Censoring command handler.
struct CensorHandler {
    processor: BatchProcessor,
    stats: StatsDestination,
}

impl CensorHandler {
    /// Loads the recognizer once and connects the remote client.
    fn new(config: &ServiceConfig, stats: StatsDestination) -> Result<Self> {
        let analyzer =
            GoogleLanguageClient::new(config).context("Failed to create entity analysis client")?;
        let service = RedactionService::with_block_strategy(
            Box::new(HeuristicPersonRecognizer::new()),
            Box::new(analyzer),
        );
        Ok(Self {
            processor: BatchProcessor::new(service),
            stats,
        })
    }

    fn censor(&self, files: &[PathBuf], output_dir: &Path) -> Result<()> {
        let mut progress = io::stdout();
        let mut stats = self.stats.writer();

        let summary = self
            .processor
            .run(files, output_dir, &mut progress, stats.as_mut())
            .context("Failed to write progress")?;

        tracing::info!(
            succeeded = summary.succeeded.len(),
            failed = summary.failed.len(),
            "batch finished"
        );
        Ok(())
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.input.is_empty() {
        println!("Please provide input files using --input flag.");
        return Ok(());
    }

    let files = select_files(Path::new("."), &cli.input);
    if files.is_empty() {
        println!("No matching files found with the specified patterns.");
        return Ok(());
    }

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;

    let flags = cli.censor_flags();
    if flags.is_empty() {
        println!("Please specify at least one censor flag (--names, --dates, --phones, --address).");
        return Ok(());
    }
    // Flags only gate the run; every category is censored once it passes.
    tracing::debug!(?flags, files = files.len(), "starting batch");

    let handler = CensorHandler::new(&cli.service_config(), cli.stats.into())?;
    handler.censor(&files, &cli.output)
}
