//! Signature compilation and the compiled rule set.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use regex::Regex;
use trackscan_signatures::{CatalogRegistry, Category, ParseCategoryError, SignatureDef};

#[cfg(feature = "tracing")]
use tracing::warn;

/// A signature definition paired with its compiled regular expression.
///
/// Built once during rule-set construction and held read-only by all
/// workers concurrently; never mutated after construction.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// The category this rule reports under.
    pub category: Category,
    /// Human-readable signature name (e.g. `"Facebook Pixel"`).
    pub name: Arc<str>,
    /// Compiled regular expression matched against content.
    pub regex: Regex,
    /// Static description attached to findings from this rule.
    pub description: &'static str,
}

impl CompiledRule {
    fn from_def(def: &SignatureDef) -> Option<Self> {
        match Regex::new(def.regex) {
            Ok(regex) => Some(Self {
                category: def.category,
                name: Arc::from(def.name),
                regex,
                description: def.description,
            }),
            Err(_error) => {
                // A malformed signature is a static authoring defect, never
                // a reason to abort the run.
                #[cfg(feature = "tracing")]
                warn!(signature = def.name, %_error, "skipping signature with invalid regex");
                None
            }
        }
    }
}

/// Restricts which catalog categories are compiled into a rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Compile every category.
    #[default]
    All,
    /// Compile only the named category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if rules in `category` pass this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Category::from_str(s).map(Self::Only)
        }
    }
}

/// An ordered, immutable collection of compiled rules.
///
/// Compilation preserves catalog declaration order, silently drops any
/// signature whose regex fails to compile, and is deterministic across
/// invocations; the underlying catalog is never mutated.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compiles all builtin catalog signatures passing `filter`.
    #[must_use]
    pub fn compile(filter: CategoryFilter) -> Self {
        let registry = CatalogRegistry::builtin();
        Self::from_defs(registry.all_signatures(), filter)
    }

    /// Compiles an explicit sequence of signature definitions.
    ///
    /// Exposed for callers that supply their own signatures; `compile`
    /// delegates here with the builtin catalog.
    #[must_use]
    pub fn from_defs<'a, I>(defs: I, filter: CategoryFilter) -> Self
    where
        I: IntoIterator<Item = &'a SignatureDef>,
    {
        let rules = defs
            .into_iter()
            .filter(|def| filter.matches(def.category))
            .filter_map(CompiledRule::from_def)
            .collect();

        Self { rules }
    }

    /// Returns all compiled rules as a slice, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules survived compilation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
