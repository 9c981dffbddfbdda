//! Aggregate counters for a scan run.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use trackscan_signatures::Category;

/// Immutable view of the counters at a point in time.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    /// Targets whose content was fetched and scanned.
    pub targets_scanned: u64,
    /// Total bytes of content processed.
    pub bytes_processed: u64,
    /// Match events per category.
    ///
    /// Counts every occurrence the matcher reported, so a value that the
    /// store later deduplicated still contributes here.
    pub matches_by_category: HashMap<Category, u64>,
    /// Wall-clock time since the stats were created.
    pub elapsed: Duration,
}

impl StatsSnapshot {
    /// Total match events across all categories.
    #[must_use]
    pub fn total_matches(&self) -> u64 {
        self.matches_by_category.values().sum()
    }
}

#[derive(Debug, Default)]
struct Counters {
    targets_scanned: u64,
    bytes_processed: u64,
    matches_by_category: HashMap<Category, u64>,
}

/// Thread-safe scan counters shared across workers.
///
/// A single coarse lock guards all counters so a snapshot is internally
/// consistent. Updates are short increments, so contention stays low even
/// with the full worker pool running.
#[derive(Debug)]
pub struct ScanStats {
    counters: Mutex<Counters>,
    started: Instant,
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanStats {
    /// Creates zeroed counters; the elapsed clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
            started: Instant::now(),
        }
    }

    /// Records one scanned target and the size of its content.
    pub fn record_scanned(&self, bytes: u64) {
        let mut counters = self.lock();
        counters.targets_scanned += 1;
        counters.bytes_processed += bytes;
    }

    /// Records one match event under `category`.
    pub fn record_match(&self, category: Category) {
        let mut counters = self.lock();
        *counters.matches_by_category.entry(category).or_insert(0) += 1;
    }

    /// Returns a consistent snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let counters = self.lock();
        StatsSnapshot {
            targets_scanned: counters.targets_scanned,
            bytes_processed: counters.bytes_processed,
            matches_by_category: counters.matches_by_category.clone(),
            elapsed: self.started.elapsed(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Counters> {
        // A poisoned lock only means another worker panicked mid-increment;
        // the counters themselves are still usable.
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn new_stats_are_zeroed() {
        let snapshot = ScanStats::new().snapshot();
        assert_eq!(snapshot.targets_scanned, 0);
        assert_eq!(snapshot.bytes_processed, 0);
        assert_eq!(snapshot.total_matches(), 0);
    }

    #[test]
    fn record_scanned_accumulates_targets_and_bytes() {
        let stats = ScanStats::new();
        stats.record_scanned(1_024);
        stats.record_scanned(2_048);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.targets_scanned, 2);
        assert_eq!(snapshot.bytes_processed, 3_072);
    }

    #[test]
    fn record_match_counts_every_event() {
        let stats = ScanStats::new();
        stats.record_match(Category::Tracking);
        stats.record_match(Category::Tracking);
        stats.record_match(Category::AdNetwork);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.matches_by_category[&Category::Tracking], 2);
        assert_eq!(snapshot.matches_by_category[&Category::AdNetwork], 1);
        assert_eq!(snapshot.total_matches(), 3);
    }

    #[test]
    fn absent_categories_are_not_present_in_snapshot() {
        let stats = ScanStats::new();
        stats.record_match(Category::Cms);

        let snapshot = stats.snapshot();
        assert!(!snapshot.matches_by_category.contains_key(&Category::AiChat));
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let stats = Arc::new(ScanStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.record_match(Category::TrackingPixel);
                    stats.record_scanned(10);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_matches(), 800);
        assert_eq!(snapshot.targets_scanned, 800);
        assert_eq!(snapshot.bytes_processed, 8_000);
    }
}
