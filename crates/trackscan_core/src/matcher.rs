//! Content matching engine.

use std::sync::Arc;

use trackscan_signatures::Category;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::rule::{CompiledRule, RuleSet};
use crate::text::line_number_at;

/// A single occurrence of a rule within fetched content.
///
/// Ephemeral: produced by the matcher and consumed immediately by the
/// findings store; never persisted standalone. The matched text is kept
/// exactly as found, untrimmed.
#[derive(Debug, Clone)]
pub struct RawMatch {
    /// Category of the matching rule.
    pub category: Category,
    /// Name of the matching rule.
    pub rule_name: Arc<str>,
    /// Static description of the matching rule.
    pub description: &'static str,
    /// The matched substring, as found in the content.
    pub text: Box<str>,
    /// 1-based line number of the match start within the content.
    pub line: u32,
}

/// Applies a compiled rule set to content buffers.
///
/// Matching cost is linear in content length per rule; the rule count is
/// bounded by the catalog size, so total cost stays proportional to
/// `rules × content length`.
pub struct Matcher {
    rules: RuleSet,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").field("rules", &self.rules.len()).finish()
    }
}

impl Matcher {
    /// Creates a matcher over the given rule set.
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the number of rules this matcher applies.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Scans `content` and returns every rule occurrence.
    ///
    /// For each rule, all non-overlapping occurrences are reported
    /// independently, in rule-catalog order then occurrence order. Empty
    /// content yields no matches.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<RawMatch> {
        if content.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for rule in self.rules.rules() {
            scan_with_rule(content, rule, &mut matches);
        }

        #[cfg(feature = "tracing")]
        trace!(matches = matches.len(), size = content.len(), "scanned content");

        matches
    }
}

fn scan_with_rule(content: &str, rule: &CompiledRule, matches: &mut Vec<RawMatch>) {
    for mat in rule.regex.find_iter(content) {
        matches.push(RawMatch {
            category: rule.category,
            rule_name: Arc::clone(&rule.name),
            description: rule.description,
            text: mat.as_str().into(),
            line: line_number_at(content, mat.start()),
        });
    }
}

#[cfg(test)]
mod tests {
    use trackscan_signatures::SignatureDef;

    use super::*;
    use crate::rule::CategoryFilter;

    fn matcher_with_defs(defs: &'static [SignatureDef]) -> Matcher {
        Matcher::new(RuleSet::from_defs(defs, CategoryFilter::All))
    }

    const fn def(category: Category, name: &'static str, regex: &'static str) -> SignatureDef {
        SignatureDef {
            category,
            name,
            description: "test signature",
            regex,
        }
    }

    static PIXEL_DEFS: &[SignatureDef] = &[def(Category::TrackingPixel, "Test Pixel", r"(?i)pixel\.js")];

    #[test]
    fn scan_detects_single_occurrence() {
        let matcher = matcher_with_defs(PIXEL_DEFS);

        let matches = matcher.scan(r#"<script src="https://cdn.example/pixel.js"></script>"#);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].rule_name.as_ref(), "Test Pixel");
        assert_eq!(matches[0].category, Category::TrackingPixel);
        assert_eq!(matches[0].text.as_ref(), "pixel.js");
    }

    #[test]
    fn scan_reports_every_occurrence_independently() {
        let matcher = matcher_with_defs(PIXEL_DEFS);

        let content = "pixel.js once\npixel.js twice\npixel.js thrice";
        let matches = matcher.scan(content);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].line, 1);
        assert_eq!(matches[1].line, 2);
        assert_eq!(matches[2].line, 3);
    }

    #[test]
    fn scan_is_case_insensitive_via_inline_flag() {
        let matcher = matcher_with_defs(PIXEL_DEFS);
        assert_eq!(matcher.scan("PIXEL.JS").len(), 1);
    }

    #[test]
    fn scan_of_empty_content_returns_no_matches() {
        let matcher = matcher_with_defs(PIXEL_DEFS);
        assert!(matcher.scan("").is_empty());
    }

    #[test]
    fn scan_without_matches_returns_empty() {
        let matcher = matcher_with_defs(PIXEL_DEFS);
        assert!(matcher.scan("nothing to see here").is_empty());
    }

    #[test]
    fn scan_emits_rule_catalog_order_then_occurrence_order() {
        static DEFS: &[SignatureDef] = &[
            def(Category::AdNetwork, "First Rule", r"aaa"),
            def(Category::Tracking, "Second Rule", r"bbb"),
        ];
        let matcher = matcher_with_defs(DEFS);

        // Second rule's text appears before the first rule's in the content;
        // emission order still follows the catalog.
        let matches = matcher.scan("bbb then aaa then bbb");

        let names: Vec<&str> = matches.iter().map(|m| m.rule_name.as_ref()).collect();
        assert_eq!(names, ["First Rule", "Second Rule", "Second Rule"]);
    }

    #[test]
    fn scan_keeps_matched_text_untrimmed() {
        static DEFS: &[SignatureDef] = &[def(Category::Tracking, "Spacey", r"\s+tracker\s+")];
        let matcher = matcher_with_defs(DEFS);

        let matches = matcher.scan("a  tracker  b");
        assert_eq!(matches[0].text.as_ref(), "  tracker  ");
    }

    #[test]
    fn builtin_rules_detect_google_analytics() {
        let matcher = Matcher::new(RuleSet::compile(CategoryFilter::All));

        let content = r#"<script src="https://www.google-analytics.com/analytics.js"></script>"#;
        let matches = matcher.scan(content);

        assert!(matches.iter().any(|m| m.rule_name.as_ref() == "Google Analytics"));
    }

    #[test]
    fn builtin_rules_detect_hidden_iframe() {
        let matcher = Matcher::new(RuleSet::compile(CategoryFilter::All));

        let content = r#"<iframe src="https://evil.example" style="display:none"></iframe>"#;
        let matches = matcher.scan(content);

        assert!(matches.iter().any(|m| m.category == Category::HiddenIframe));
    }
}
