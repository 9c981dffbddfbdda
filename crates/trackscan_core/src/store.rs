//! Findings collection: dedup, enrichment, and persistence.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use trackscan_signatures::{Category, GENERIC_DESCRIPTION, RiskLevel};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::SinkError;
use crate::matcher::RawMatch;
use crate::text::clean_value;

/// A deduplicated, enriched detection ready for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Category of the matching signature.
    pub category: Category,
    /// Name of the matching signature.
    #[serde(rename = "pattern_type")]
    pub pattern: String,
    /// The matched text after cleaning.
    pub value: String,
    /// Where the match was found, as `<target>#L<line>`.
    pub location: String,
    /// What the signature detects.
    pub description: &'static str,
    /// Risk level derived from the category.
    pub risk_level: RiskLevel,
    /// Impact narrative derived from the category.
    pub impact: &'static str,
    /// Extra details extracted from the matched value, when any apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<BTreeMap<&'static str, &'static str>>,
}

/// All findings recorded for one target, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct TargetFindings {
    /// The scanned target identifier.
    pub target: String,
    /// Unique findings for this target.
    pub findings: Vec<Finding>,
}

/// Identity of a finding for deduplication.
///
/// Two matches are the same finding when they agree on target, category,
/// signature name, and cleaned value; location is deliberately excluded so
/// repeats of the same artifact on different lines collapse to one finding.
#[derive(Debug, PartialEq, Eq, Hash)]
struct FindingKey {
    target: Box<str>,
    category: Category,
    pattern: Box<str>,
    value: Box<str>,
}

struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Sink {
    fn append(&mut self, finding: &Finding) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, finding).map_err(|e| SinkError::Io {
            path: self.path.clone(),
            source: std::io::Error::from(e),
        })?;
        self.writer.write_all(b"\n").map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Default)]
struct StoreInner {
    seen: HashSet<FindingKey>,
    order: Vec<TargetFindings>,
    index: HashMap<Box<str>, usize>,
    sink: Option<Sink>,
}

/// Thread-safe collection of unique findings across all targets.
///
/// A single lock guards the dedup set, the grouped findings, and the
/// persistence sink, so each accepted finding is recorded and persisted
/// atomically with respect to other workers.
pub struct FindingStore {
    inner: Mutex<StoreInner>,
}

impl std::fmt::Debug for FindingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindingStore").finish_non_exhaustive()
    }
}

impl Default for FindingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FindingStore {
    /// Creates an in-memory store with no persistence sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Creates a store that appends each accepted finding to `path` as one
    /// JSON object per line.
    ///
    /// The file is created, or truncated if it already exists.
    pub fn with_sink(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        let inner = StoreInner {
            sink: Some(Sink {
                path,
                writer: BufWriter::new(file),
            }),
            ..StoreInner::default()
        };
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    /// Records a raw match against `target`.
    ///
    /// The matched text is cleaned before identity is computed. Returns
    /// `Ok(true)` if this was a new finding, `Ok(false)` if an equivalent
    /// finding was already recorded.
    pub fn record(&self, target: &str, raw: &RawMatch) -> Result<bool, SinkError> {
        let value = clean_value(&raw.text);
        let key = FindingKey {
            target: target.into(),
            category: raw.category,
            pattern: raw.rule_name.as_ref().into(),
            value: value.as_str().into(),
        };

        let mut guard = self.lock();
        let inner = &mut *guard;
        if !inner.seen.insert(key) {
            return Ok(false);
        }

        let finding = build_finding(target, raw, value);

        #[cfg(feature = "tracing")]
        debug!(target_id = target, pattern = %raw.rule_name, "recorded finding");

        if let Some(sink) = inner.sink.as_mut() {
            sink.append(&finding)?;
        }

        let existing = inner.index.get(target).copied();
        let slot = match existing {
            Some(i) => i,
            None => {
                let i = inner.order.len();
                inner.index.insert(target.into(), i);
                inner.order.push(TargetFindings {
                    target: target.to_owned(),
                    findings: Vec::new(),
                });
                i
            }
        };
        inner.order[slot].findings.push(finding);
        Ok(true)
    }

    /// Returns all findings grouped by target, targets in first-seen order.
    #[must_use]
    pub fn findings(&self) -> Vec<TargetFindings> {
        self.lock().order.clone()
    }

    /// Returns the number of unique findings recorded so far.
    #[must_use]
    pub fn total(&self) -> usize {
        self.lock().order.iter().map(|t| t.findings.len()).sum()
    }

    /// Flushes the persistence sink, if any.
    pub fn finish(&self) -> Result<(), SinkError> {
        match self.lock().sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // A poisoned lock means a worker panicked mid-insert; the findings
        // collected so far are still worth reporting.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn build_finding(target: &str, raw: &RawMatch, value: String) -> Finding {
    let description = if raw.description.is_empty() {
        GENERIC_DESCRIPTION
    } else {
        raw.description
    };
    let implementation = if raw.rule_name.to_ascii_lowercase().contains("iframe") {
        iframe_details(&value)
    } else {
        None
    };

    Finding {
        category: raw.category,
        pattern: raw.rule_name.to_string(),
        location: format!("{target}#L{line}", line = raw.line),
        description,
        risk_level: raw.category.risk_level(),
        impact: raw.category.impact(),
        implementation,
        value,
    }
}

/// Extracts structural details from a hidden-iframe match.
fn iframe_details(value: &str) -> Option<BTreeMap<&'static str, &'static str>> {
    let mut details = BTreeMap::new();
    if value.contains("display:none") || value.contains("visibility:hidden") {
        details.insert("visibility", "hidden");
    }
    if value.contains("width=\"0\"") || value.contains("height=\"0\"") {
        details.insert("dimensions", "zero-sized");
    }
    if value.contains("googletagmanager") {
        details.insert("type", "Google Tag Manager container");
    }
    if details.is_empty() { None } else { Some(details) }
}
