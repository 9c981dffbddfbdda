//! Target sources feeding the scan pipeline.

use std::path::Path;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::ui;

const TOP_LIST_URL: &str = "https://downloads.majestic.com/majestic_million.csv";
const TOP_LIST_SIZE: usize = 1_000_000;

/// Normalises one positional argument into a scannable target.
///
/// URLs pass through untouched; anything else is treated as a local path
/// and rewritten as an absolute `file://` URL.
#[must_use]
pub fn normalize_arg(arg: &str) -> String {
    if arg.starts_with("http://") || arg.starts_with("https://") || arg.starts_with("file://") {
        return arg.to_owned();
    }
    match std::path::absolute(Path::new(arg)) {
        Ok(abs) => format!("file://{}", abs.display()),
        Err(_) => arg.to_owned(),
    }
}

/// Enqueues explicit positional targets.
pub async fn enqueue_args(args: &[String], tx: &mpsc::Sender<String>) {
    for arg in args {
        if tx.send(normalize_arg(arg)).await.is_err() {
            break;
        }
    }
}

/// Enqueues one target per stdin line until end of input.
///
/// Lines are enqueued verbatim; only fully empty lines are skipped.
pub async fn enqueue_stdin(tx: &mpsc::Sender<String>) -> anyhow::Result<()> {
    enqueue_lines(BufReader::new(tokio::io::stdin()), tx).await
}

async fn enqueue_lines<R: AsyncBufRead + Unpin>(reader: R, tx: &mpsc::Sender<String>) -> anyhow::Result<()> {
    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read targets from stdin")?
    {
        if line.is_empty() {
            continue;
        }
        if tx.send(line).await.is_err() {
            break;
        }
    }
    Ok(())
}

/// Streams the ranked-domain CSV feed and enqueues `https://<domain>`
/// targets until `percent` of the list has been consumed.
///
/// The body is processed as it arrives; the full list is never held in
/// memory. Malformed rows are skipped.
pub async fn enqueue_top_list(tx: &mpsc::Sender<String>, percent: u8, show_progress: bool) -> anyhow::Result<()> {
    let cap = sample_cap(percent);

    let mut response = reqwest::get(TOP_LIST_URL)
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("failed to download ranked domain list from {TOP_LIST_URL}"))?;

    let pb = if show_progress {
        ui::create_domain_progress(cap)
    } else {
        indicatif::ProgressBar::hidden()
    };

    let mut buffer = String::new();
    let mut header_seen = false;
    let mut sent = 0usize;

    'stream: while let Some(chunk) = response
        .chunk()
        .await
        .context("ranked domain list transfer failed")?
    {
        buffer.push_str(&String::from_utf8_lossy(&chunk));
        while let Some(pos) = buffer.find('\n') {
            let line: String = buffer.drain(..=pos).collect();
            if !header_seen {
                header_seen = true;
                continue;
            }
            let Some(domain) = third_column(line.trim_end()) else {
                continue;
            };
            if tx.send(format!("https://{domain}")).await.is_err() {
                break 'stream;
            }
            sent += 1;
            pb.inc(1);
            if sent >= cap {
                break 'stream;
            }
        }
    }

    pb.finish_and_clear();
    Ok(())
}

/// Number of ranked-list rows to consume for a given sampling percentage.
fn sample_cap(percent: u8) -> usize {
    TOP_LIST_SIZE * usize::from(percent) / 100
}

fn third_column(line: &str) -> Option<&str> {
    let domain = line.split(',').nth(2)?.trim();
    (!domain.is_empty()).then_some(domain)
}
