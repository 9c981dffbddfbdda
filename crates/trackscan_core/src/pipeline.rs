//! Concurrent scan orchestration.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

#[cfg(feature = "tracing")]
use tracing::warn;

use crate::error::{FetchError, SinkError};
use crate::fetch::Fetcher;
use crate::matcher::{Matcher, RawMatch};
use crate::stats::ScanStats;
use crate::store::FindingStore;

/// Worker count used when the caller does not choose one.
pub const DEFAULT_WORKERS: usize = 50;

type ErrorHandler = Arc<dyn Fn(&str, &FetchError) + Send + Sync>;
type MatchHandler = Arc<dyn Fn(&str, &RawMatch) + Send + Sync>;

/// Drives fetch, match, and record across a pool of workers.
///
/// Targets arrive on a channel and are pulled by whichever worker is free,
/// so a slow target never blocks the rest of the queue. The pipeline
/// finishes when the channel closes and every in-flight target completes.
pub struct ScanPipeline {
    matcher: Arc<Matcher>,
    store: Arc<FindingStore>,
    stats: Arc<ScanStats>,
    fetcher: Fetcher,
    workers: usize,
    on_item_error: Option<ErrorHandler>,
    on_match: Option<MatchHandler>,
}

impl std::fmt::Debug for ScanPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanPipeline")
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl ScanPipeline {
    /// Creates a pipeline with [`DEFAULT_WORKERS`] workers.
    #[must_use]
    pub fn new(matcher: Arc<Matcher>, store: Arc<FindingStore>, stats: Arc<ScanStats>, fetcher: Fetcher) -> Self {
        Self {
            matcher,
            store,
            stats,
            fetcher,
            workers: DEFAULT_WORKERS,
            on_item_error: None,
            on_match: None,
        }
    }

    /// Sets the worker pool size; zero is clamped to one.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Installs a callback invoked for each target that fails to fetch.
    ///
    /// Fetch failures never stop the run; without a handler they are only
    /// visible through the missing target in the results.
    #[must_use]
    pub fn on_item_error(mut self, handler: impl Fn(&str, &FetchError) + Send + Sync + 'static) -> Self {
        self.on_item_error = Some(Arc::new(handler));
        self
    }

    /// Installs a callback invoked for every match event.
    ///
    /// Fires before deduplication, so repeated occurrences of the same
    /// artifact are each reported.
    #[must_use]
    pub fn on_match(mut self, handler: impl Fn(&str, &RawMatch) + Send + Sync + 'static) -> Self {
        self.on_match = Some(Arc::new(handler));
        self
    }

    /// Consumes targets from `rx` until the channel closes.
    ///
    /// Returns early only if the findings sink fails; fetch errors are
    /// reported through the error handler and skipped.
    pub async fn run(self: Arc<Self>, rx: mpsc::Receiver<String>) -> Result<(), SinkError> {
        let rx = Arc::new(Mutex::new(rx));
        let mut workers = JoinSet::new();
        for _ in 0..self.workers {
            let pipeline = Arc::clone(&self);
            let rx = Arc::clone(&rx);
            workers.spawn(async move {
                loop {
                    let target = {
                        let mut rx = rx.lock().await;
                        rx.recv().await
                    };
                    let Some(target) = target else { break };
                    pipeline.process(&target).await?;
                }
                Ok::<(), SinkError>(())
            });
        }

        let mut result = Ok(());
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(sink_err)) => {
                    // Keep draining so remaining workers shut down cleanly.
                    if result.is_ok() {
                        result = Err(sink_err);
                    }
                }
                Err(_join_err) => {
                    #[cfg(feature = "tracing")]
                    warn!(error = %_join_err, "scan worker terminated abnormally");
                }
            }
        }
        result
    }

    async fn process(&self, target: &str) -> Result<(), SinkError> {
        let content = match self.fetcher.fetch(target).await {
            Ok(content) => content,
            Err(error) => {
                if let Some(handler) = &self.on_item_error {
                    handler(target, &error);
                }
                return Ok(());
            }
        };

        self.stats.record_scanned(content.len() as u64);
        for raw in self.matcher.scan(&content) {
            if let Some(handler) = &self.on_match {
                handler(target, &raw);
            }
            self.stats.record_match(raw.category);
            self.store.record(target, &raw)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use trackscan_signatures::{Category, SignatureDef};

    use super::*;
    use crate::fetch::DEFAULT_USER_AGENT;
    use crate::rule::{CategoryFilter, RuleSet};

    static DEFS: &[SignatureDef] = &[SignatureDef {
        category: Category::Tracking,
        name: "Test Tracker",
        description: "test signature",
        regex: r"tracker\.js",
    }];

    fn pipeline(store: Arc<FindingStore>, stats: Arc<ScanStats>) -> ScanPipeline {
        let matcher = Arc::new(Matcher::new(RuleSet::from_defs(DEFS, CategoryFilter::All)));
        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        ScanPipeline::new(matcher, store, stats, fetcher)
    }

    fn write_page(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        format!("file://{}", path.display())
    }

    #[tokio::test]
    async fn run_scans_every_target_on_the_channel() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_page(&dir, "a.html", "uses tracker.js here");
        let b = write_page(&dir, "b.html", "clean page");

        let store = Arc::new(FindingStore::new());
        let stats = Arc::new(ScanStats::new());
        let pipeline = Arc::new(pipeline(Arc::clone(&store), Arc::clone(&stats)).with_workers(4));

        let (tx, rx) = mpsc::channel(8);
        tx.send(a.clone()).await.unwrap();
        tx.send(b).await.unwrap();
        drop(tx);

        pipeline.run(rx).await.unwrap();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.targets_scanned, 2);
        assert_eq!(snapshot.total_matches(), 1);
        assert_eq!(store.total(), 1);
        assert_eq!(store.findings()[0].target, a);
    }

    #[tokio::test]
    async fn fetch_failures_are_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_page(&dir, "good.html", "tracker.js");

        let store = Arc::new(FindingStore::new());
        let stats = Arc::new(ScanStats::new());
        let failed: Arc<StdMutex<Vec<String>>> = Arc::new(StdMutex::new(Vec::new()));
        let failed_sink = Arc::clone(&failed);

        let pipeline = Arc::new(
            pipeline(Arc::clone(&store), Arc::clone(&stats))
                .with_workers(2)
                .on_item_error(move |target, _| {
                    failed_sink.lock().unwrap().push(target.to_owned());
                }),
        );

        let (tx, rx) = mpsc::channel(8);
        tx.send("file:///nonexistent/missing.html".to_owned()).await.unwrap();
        tx.send(good).await.unwrap();
        drop(tx);

        pipeline.run(rx).await.unwrap();

        assert_eq!(failed.lock().unwrap().as_slice(), ["file:///nonexistent/missing.html"]);
        assert_eq!(stats.snapshot().targets_scanned, 1);
        assert_eq!(store.total(), 1);
    }

    #[tokio::test]
    async fn stats_count_match_events_while_store_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_page(&dir, "page.html", "tracker.js and tracker.js again");

        let store = Arc::new(FindingStore::new());
        let stats = Arc::new(ScanStats::new());
        let pipeline = Arc::new(pipeline(Arc::clone(&store), Arc::clone(&stats)));

        let (tx, rx) = mpsc::channel(1);
        tx.send(page).await.unwrap();
        drop(tx);

        pipeline.run(rx).await.unwrap();

        assert_eq!(stats.snapshot().total_matches(), 2);
        assert_eq!(store.total(), 1);
    }

    #[tokio::test]
    async fn workers_share_one_queue() {
        let dir = tempfile::tempdir().unwrap();
        let mut targets = Vec::new();
        for i in 0..20 {
            targets.push(write_page(&dir, &format!("p{i}.html"), "tracker.js"));
        }

        let store = Arc::new(FindingStore::new());
        let stats = Arc::new(ScanStats::new());
        let pipeline = Arc::new(pipeline(Arc::clone(&store), Arc::clone(&stats)).with_workers(8));

        let (tx, rx) = mpsc::channel(4);
        let producer = tokio::spawn(async move {
            for target in targets {
                tx.send(target).await.unwrap();
            }
        });

        pipeline.run(rx).await.unwrap();
        producer.await.unwrap();

        assert_eq!(stats.snapshot().targets_scanned, 20);
        assert_eq!(store.total(), 20);
    }

    #[tokio::test]
    async fn match_callback_fires_for_every_event() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_page(&dir, "page.html", "tracker.js twice: tracker.js");

        let store = Arc::new(FindingStore::new());
        let stats = Arc::new(ScanStats::new());
        let seen: Arc<StdMutex<Vec<String>>> = Arc::new(StdMutex::new(Vec::new()));
        let seen_sink = Arc::clone(&seen);

        let pipeline = Arc::new(pipeline(store, stats).on_match(move |_, raw| {
            seen_sink.lock().unwrap().push(raw.rule_name.to_string());
        }));

        let (tx, rx) = mpsc::channel(1);
        tx.send(page).await.unwrap();
        drop(tx);

        pipeline.run(rx).await.unwrap();

        assert_eq!(seen.lock().unwrap().as_slice(), ["Test Tracker", "Test Tracker"]);
    }

    #[test]
    fn zero_workers_is_clamped_to_one() {
        let store = Arc::new(FindingStore::new());
        let stats = Arc::new(ScanStats::new());
        let pipeline = pipeline(store, stats).with_workers(0);
        assert_eq!(pipeline.workers, 1);
    }
}
