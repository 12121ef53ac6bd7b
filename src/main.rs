use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
#[cfg(target_family = "windows")]
use colored::control::set_virtual_terminal;
use colored::Colorize;
use mlbb_stats::config::{self, Config};
use mlbb_stats::fetch::{load_heroes, HttpSource};
use mlbb_stats::loader::Loader;
use mlbb_stats::lookup::{find_hero, ranked_matching};
use mlbb_stats::retry::{RetryEvent, RetryPolicy};
use mlbb_stats::sort::{sort_heroes, SortDirection};
use mlbb_stats::types::HeroList;
use mlbb_stats::{browse, logging, render};
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Mobile Legends: Bang Bang hero statistics in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mlbb-stats", version)]
struct Cli {
    /// Hero statistics endpoint (overrides the config file).
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Per-attempt timeout in milliseconds.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
    /// Retries after the first attempt.
    #[arg(long, global = true)]
    max_retries: Option<u32>,
    /// Config file to use instead of the XDG default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the win rate ranking.
    List {
        /// Lowest win rate first.
        #[arg(long)]
        asc: bool,
        /// Only heroes whose name matches this regex.
        #[arg(long)]
        filter: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show counters and synergies of one hero (id or name).
    Show { hero: String },
    /// Interactive viewer (default).
    Browse,
}

impl Cli {
    fn settings(&self) -> (String, RetryPolicy) {
        let cfg = match &self.config {
            Some(path) => config::load_or_init_at(path),
            None => config::load_or_init(),
        }
        .unwrap_or_else(|e| {
            tracing::warn!("using built-in defaults, config unavailable: {:#}", e);
            Config::default()
        });
        let mut policy = cfg.policy();
        if let Some(ms) = self.timeout_ms {
            policy.timeout = Duration::from_millis(ms);
        }
        if let Some(n) = self.max_retries {
            policy.max_retries = n;
        }
        let endpoint = self.endpoint.clone().unwrap_or(cfg.endpoint);
        tracing::debug!(%endpoint, ?policy, "settings resolved");
        (endpoint, policy)
    }
}

fn report_retry(e: &RetryEvent) {
    eprintln!(
        "{}",
        format!(
            "retrying ({}/{}) in {}s: {}",
            e.retry,
            e.max_retries,
            e.delay.as_secs_f32(),
            e.cause
        )
        .yellow()
    );
}

async fn fetch_once(source: &HttpSource, policy: &RetryPolicy) -> Result<HeroList> {
    tracing::debug!(url = source.url(), "fetching heroes");
    eprintln!("{}", render::render_loading(0, policy.max_retries));
    load_heroes(source, policy, report_retry)
        .await
        .map_err(|f| anyhow!("{} (after {} attempts)", f.message, f.attempts))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    #[cfg(target_family = "windows")]
    {
        if set_virtual_terminal(true).is_err() {
            eprintln!("failed to print colorfully.")
        };
    }

    let (endpoint, policy) = cli.settings();
    let client = reqwest::Client::builder()
        .user_agent(concat!("mlbb-stats/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")?;
    let source = HttpSource::new(client, endpoint);

    match cli.command.unwrap_or(Command::Browse) {
        Command::List { asc, filter, json } => {
            let filter = filter
                .as_deref()
                .map(Regex::new)
                .transpose()
                .context("invalid --filter pattern")?;
            let mut heroes = fetch_once(&source, &policy).await?;
            let direction = if asc {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };
            sort_heroes(&mut heroes, direction);
            let ranked = ranked_matching(&heroes, filter.as_ref());
            if json {
                let shown: Vec<_> = ranked.iter().map(|(_, h)| h).collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                print!("{}", render::render_list(ranked, direction));
            }
        }
        Command::Show { hero } => {
            let heroes = fetch_once(&source, &policy).await?;
            let found =
                find_hero(&heroes, &hero).ok_or_else(|| anyhow!("no hero matches {hero:?}"))?;
            print!("{}", render::render_detail(found));
        }
        Command::Browse => {
            let loader = Loader::new(Arc::new(source), policy);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse::run(loader, stdin).await?;
        }
    }

    Ok(())
}
