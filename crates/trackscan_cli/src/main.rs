//! # trackscan
//!
//! Scans web pages for trackers, advertising networks, tracking pixels,
//! hidden iframes, and other privacy-impacting resources. Targets come
//! from positional arguments, stdin, or a ranked top-sites list.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod producer;
mod report;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches, Parser};
use console::style;
use trackscan_core::prelude::*;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/trackscan/trackscan";

/// Sink path used in top-list mode when `-o` is not given.
const TOP_LIST_OUTPUT: &str = "trackscan_results.json";

#[derive(Debug, Parser)]
#[command(name = "trackscan", version, styles = ui::clap_styles())]
struct Cli {
    /// URLs or local files to scan; targets are read from stdin when omitted.
    targets: Vec<String>,

    /// Number of concurrent scan workers.
    #[arg(short = 't', long = "workers", default_value_t = DEFAULT_WORKERS, value_name = "N")]
    workers: usize,

    /// Suppress the banner, per-match output, and the summary.
    #[arg(short, long)]
    silent: bool,

    /// Include the matched value in per-match output.
    #[arg(short, long)]
    detailed: bool,

    /// Stream the ranked top-sites list instead of explicit targets.
    #[arg(short = 'm', long = "top-list")]
    top_list: bool,

    /// Percentage of the top-sites list to scan.
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_name = "PCT",
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    percent: u8,

    /// Restrict scanning to one category.
    #[arg(short, long, default_value = "all", value_name = "CATEGORY")]
    category: CategoryFilter,

    /// User agent sent with each request.
    #[arg(long, default_value = DEFAULT_USER_AGENT, value_name = "UA")]
    user_agent: String,

    /// Append each finding to this file as one JSON object per line.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let quiet = cli.silent || cli.top_list;

    if !quiet {
        ui::print_banner();
    }

    let sink_path = cli
        .output
        .clone()
        .or_else(|| cli.top_list.then(|| PathBuf::from(TOP_LIST_OUTPUT)));

    let store = Arc::new(match &sink_path {
        Some(path) => FindingStore::with_sink(path)?,
        None => FindingStore::new(),
    });
    let stats = Arc::new(ScanStats::new());
    let matcher = Arc::new(Matcher::new(RuleSet::compile(cli.category)));
    let fetcher = Fetcher::new(&cli.user_agent)?;

    let mut pipeline =
        ScanPipeline::new(matcher, Arc::clone(&store), Arc::clone(&stats), fetcher).with_workers(cli.workers);

    if !quiet {
        let detailed = cli.detailed;
        pipeline = pipeline.on_match(move |_, raw| report::print_match(raw, detailed));
    }
    if !cli.silent {
        pipeline = pipeline.on_item_error(|target, error| {
            ui::print_warning(&format!("skipping {target}: {error}"));
        });
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create async runtime: {e}"))?;

    runtime.block_on(execute(cli, Arc::new(pipeline)))?;

    store.finish()?;

    if !quiet {
        report::print_summary(&stats.snapshot());
        if let Some(path) = &sink_path {
            println!();
            ui::print_info(&format!("Results written to {}", path.display()));
        }
    }

    Ok(())
}

async fn execute(cli: Cli, pipeline: Arc<ScanPipeline>) -> anyhow::Result<()> {
    let (tx, rx) = tokio::sync::mpsc::channel(cli.workers.max(1));
    let scan = tokio::spawn(pipeline.run(rx));

    if cli.top_list {
        producer::enqueue_top_list(&tx, cli.percent, !cli.silent).await?;
    } else if cli.targets.is_empty() {
        producer::enqueue_stdin(&tx).await?;
    } else {
        producer::enqueue_args(&cli.targets, &tx).await;
    }
    drop(tx);

    scan.await??;
    Ok(())
}

fn build_about() -> String {
    format!(
        r"
  {} scans web pages for trackers, ad networks, tracking pixels,
  hidden iframes, and other privacy-impacting resources.

  Feed it URLs, local files, or a ranked top-sites list; findings are
  deduplicated, risk-rated, and optionally written out as JSON lines.",
        colors::accent().apply_to("trackscan").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    trackscan https://example.com        Scan a single site
    trackscan page.html                  Scan a local file
    cat urls.txt | trackscan             Scan targets from stdin
    trackscan -m -p 1                    Scan the top 1% of ranked sites
    trackscan -c HiddenIframe URL        Restrict to one category
    trackscan -o findings.json URL       Persist findings as JSON lines

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
