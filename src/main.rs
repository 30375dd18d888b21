use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ctfwordgen::context::filter_words;
use ctfwordgen::fetch::{
    ContextSource, FetchConfig, PageFetcher, DEFAULT_USER_AGENT, ENCYCLOPEDIA_ENDPOINT,
    SEARCH_ENDPOINT,
};
use ctfwordgen::normalize::normalize_base;
use ctfwordgen::output::{default_output_path, write_wordlist};

#[derive(Parser)]
#[command(name = "ctfwordgen")]
#[command(about = "A Rust CLI tool for generating context-aware password wordlists for CTF challenges")]
struct Cli {
    /// Base word to build the wordlist around
    base: String,

    /// Output file (defaults to <base>_wordlist.txt)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Skip fetching context pages
    #[arg(long)]
    offline: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Delay before each request in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// User-Agent header sent with context requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Encyclopedia search endpoint
    #[arg(long, default_value = ENCYCLOPEDIA_ENDPOINT)]
    encyclopedia_endpoint: String,

    /// Search engine endpoint
    #[arg(long, default_value = SEARCH_ENDPOINT)]
    search_endpoint: String,

    /// Suppress progress output
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            delay: Duration::from_millis(self.delay_ms),
            user_agent: self.user_agent.clone(),
            encyclopedia_endpoint: self.encyclopedia_endpoint.clone(),
            search_endpoint: self.search_endpoint.clone(),
        }
    }
}

fn progress(quiet: bool, message: String) {
    if !quiet {
        println!("{}", message);
    }
}

async fn gather_raw(cli: &Cli, base: &str) -> anyhow::Result<Vec<String>> {
    let fetcher = PageFetcher::new(cli.fetch_config()).context("failed to build http client")?;
    let sources = [ContextSource::Encyclopedia, ContextSource::SearchEngine];

    let spinner = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };
    let names: Vec<_> = sources.iter().map(|s| s.name()).collect();
    spinner.set_message(format!("Fetching context from {}...", names.join(" and ")));

    let raw = fetcher.gather(&sources, base).await;
    spinner.finish_and_clear();

    Ok(raw)
}

const DEFAULT_LOG_FILTER: &str = "ctfwordgen=info";

// RUST_LOG wins when set; the default only applies when it is missing or invalid.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base = normalize_base(&cli.base);

    progress(cli.quiet, format!("Generating wordlist for: {}", cli.base));

    let raw = if cli.offline {
        info!("offline mode, skipping context sources");
        Vec::new()
    } else {
        gather_raw(&cli, &cli.base).await?
    };
    progress(cli.quiet, format!("Extracted {} raw words", raw.len()));

    let context = filter_words(&raw);
    progress(cli.quiet, format!("Filtered to {} context words", context.len()));

    let wordlist = ctfwordgen::generate(&base, &context);
    debug!(base = %base, context = context.len(), candidates = wordlist.len(), "generated wordlist");
    progress(cli.quiet, format!("Generated {} total combinations", wordlist.len()));

    let path = cli.output.clone().unwrap_or_else(|| default_output_path(&cli.base));
    write_wordlist(&path, &wordlist)
        .with_context(|| format!("failed to write wordlist to {}", path.display()))?;
    progress(cli.quiet, format!("Wordlist saved to {}", path.display()));

    Ok(())
}
