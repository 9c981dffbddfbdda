//! Property-based tests for `trackscan_core`.
//!
//! These tests verify invariants that should hold for all inputs,
//! catching edge cases that hand-written tests might miss.

use std::sync::Arc;

use proptest::prelude::*;
use trackscan_core::matcher::RawMatch;
use trackscan_core::prelude::*;
use trackscan_core::text::{clean_value, line_number_at};

proptest! {
    /// Cleaning is idempotent: a cleaned value cleans to itself.
    #[test]
    fn clean_value_is_idempotent(s in "\\PC*") {
        let once = clean_value(&s);
        prop_assert_eq!(clean_value(&once), once);
    }

    /// Cleaned values never carry surrounding or doubled whitespace.
    #[test]
    fn clean_value_is_normalised(s in ".*") {
        let cleaned = clean_value(&s);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "), "doubled space in {:?}", cleaned);
        prop_assert!(!cleaned.contains('\n'));
        prop_assert!(!cleaned.contains('\t'));
    }

    /// Line numbers start at 1 and never exceed newline count plus one.
    #[test]
    fn line_number_is_bounded(
        content in "[a-z \n]{0,200}",
        offset in 0usize..200usize
    ) {
        let offset = offset.min(content.len());
        let line = line_number_at(&content, offset);
        let newlines = content.bytes().filter(|&b| b == b'\n').count() as u32;

        prop_assert!(line >= 1);
        prop_assert!(line <= newlines + 1);
    }

    /// Line numbers never decrease as the offset advances.
    #[test]
    fn line_number_is_monotonic(content in "[a-z\n]{1,100}") {
        let mut previous = 0;
        for offset in 0..=content.len() {
            let line = line_number_at(&content, offset);
            prop_assert!(line >= previous);
            previous = line;
        }
    }

    /// Recording the same match any number of times yields one finding.
    #[test]
    fn store_collapses_repeated_matches(
        value in "[a-zA-Z0-9./]{1,40}",
        lines in prop::collection::vec(1u32..1000, 1..10)
    ) {
        let store = FindingStore::new();
        for line in lines {
            let raw = RawMatch {
                category: Category::Tracking,
                rule_name: Arc::from("Test Rule"),
                description: "test signature",
                text: value.as_str().into(),
                line,
            };
            store.record("https://example.com", &raw).unwrap();
        }
        prop_assert_eq!(store.total(), 1);
    }

    /// Total findings always equals the sum of the per-target groups.
    #[test]
    fn store_total_matches_grouped_counts(
        entries in prop::collection::vec(("[a-c]", "[a-z]{1,10}"), 0..30)
    ) {
        let store = FindingStore::new();
        for (target, value) in &entries {
            let raw = RawMatch {
                category: Category::AdNetwork,
                rule_name: Arc::from("Test Rule"),
                description: "test signature",
                text: value.as_str().into(),
                line: 1,
            };
            store.record(target, &raw).unwrap();
        }

        let grouped: usize = store.findings().iter().map(|t| t.findings.len()).sum();
        prop_assert_eq!(store.total(), grouped);
    }

    /// Every builtin signature matcher run terminates and reports valid lines.
    #[test]
    fn full_catalog_scan_reports_valid_lines(content in "[ -~\n]{0,500}") {
        let matcher = Matcher::new(RuleSet::compile(CategoryFilter::All));
        let line_count = content.bytes().filter(|&b| b == b'\n').count() as u32 + 1;

        for m in matcher.scan(&content) {
            prop_assert!(m.line >= 1);
            prop_assert!(m.line <= line_count);
            prop_assert!(content.contains(m.text.as_ref()));
        }
    }
}
