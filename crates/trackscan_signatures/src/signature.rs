//! Signature definition types for tracker detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    invalid_value: Box<str>,
}

impl ParseCategoryError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}': expected 'all' or one of {}",
            self.invalid_value,
            Category::ALL.map(Category::as_str).join(", ")
        )
    }
}

impl std::error::Error for ParseCategoryError {}

/// How risky the presence of a detected artifact is for the page owner
/// or its visitors.
///
/// Variants are ordered so that `Unknown < Low < Medium < High` and
/// reporting can sort findings with a plain comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// The category could not be mapped to a known risk.
    #[default]
    Unknown,
    /// Informational; discloses tooling but little else.
    Low,
    /// Enables cross-site tracking, profiling, or fingerprinting.
    Medium,
    /// May expose data or deliver third-party content invisibly.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unknown => "Unknown",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{s}")
    }
}

/// Logical grouping of signatures by the kind of artifact they detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Content management system fingerprints.
    #[serde(rename = "CMS")]
    Cms,
    /// Cloud storage endpoints and connection-string leakage.
    CloudStorage,
    /// Conversion and audience tracking pixels.
    TrackingPixel,
    /// Advertising network integrations.
    AdNetwork,
    /// Embedded chat and customer-messaging widgets.
    #[serde(rename = "AIChat")]
    AiChat,
    /// Iframes hidden through CSS or zero-sized dimensions.
    HiddenIframe,
    /// Behaviour analytics and heatmap tooling.
    Tracking,
    /// Cookie and privacy consent platforms.
    ConsentManagement,
    /// Full session replay tooling.
    SessionRecording,
    /// Client-side error and crash reporting.
    ErrorTracking,
    /// Experimentation and A/B testing frameworks.
    #[serde(rename = "ABTesting")]
    AbTesting,
}

impl Category {
    /// All categories in catalog declaration order.
    pub const ALL: [Self; 11] = [
        Self::Cms,
        Self::CloudStorage,
        Self::TrackingPixel,
        Self::AdNetwork,
        Self::AiChat,
        Self::HiddenIframe,
        Self::Tracking,
        Self::ConsentManagement,
        Self::SessionRecording,
        Self::ErrorTracking,
        Self::AbTesting,
    ];

    /// Returns the string tag used in reports and the category filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cms => "CMS",
            Self::CloudStorage => "CloudStorage",
            Self::TrackingPixel => "TrackingPixel",
            Self::AdNetwork => "AdNetwork",
            Self::AiChat => "AIChat",
            Self::HiddenIframe => "HiddenIframe",
            Self::Tracking => "Tracking",
            Self::ConsentManagement => "ConsentManagement",
            Self::SessionRecording => "SessionRecording",
            Self::ErrorTracking => "ErrorTracking",
            Self::AbTesting => "ABTesting",
        }
    }

    /// Returns the static risk level assigned to findings in this category.
    #[must_use]
    pub const fn risk_level(self) -> RiskLevel {
        match self {
            Self::CloudStorage | Self::HiddenIframe => RiskLevel::High,
            Self::TrackingPixel | Self::AdNetwork | Self::Tracking | Self::SessionRecording => RiskLevel::Medium,
            Self::Cms | Self::AiChat | Self::ConsentManagement | Self::ErrorTracking | Self::AbTesting => {
                RiskLevel::Low
            }
        }
    }

    /// Returns the static impact narrative attached to findings in this category.
    #[must_use]
    pub const fn impact(self) -> &'static str {
        match self {
            Self::Cms => "Reveals content management system information that could be used for targeting exploits",
            Self::CloudStorage => "Exposes cloud storage configurations that could lead to data access if misconfigured",
            Self::TrackingPixel => "Enables user behavior tracking and conversion monitoring across sites",
            Self::AdNetwork => "Allows targeted advertising and user profiling",
            Self::AiChat => "Enables customer interaction monitoring and data collection",
            Self::HiddenIframe => "May enable third-party tracking, data collection, or potentially malicious content",
            Self::Tracking => "Enables detailed user behavior analysis and session recording",
            Self::ConsentManagement => "Manages user privacy preferences and cookie consent",
            Self::SessionRecording => "Records and analyzes user interactions and behavior on the site",
            Self::ErrorTracking => "Collects application errors and debugging information",
            Self::AbTesting => "Enables website experimentation and user experience testing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError::new(s))
    }
}

/// Description used when a signature carries no dedicated one.
pub const GENERIC_DESCRIPTION: &str = "Generic tracking or advertising component";

/// A single signature definition for detecting one artifact type.
#[derive(Debug, Clone)]
pub struct SignatureDef {
    /// The category this signature belongs to.
    pub category: Category,
    /// Short human-readable name (e.g. `"Facebook Pixel"`). Unique within
    /// the category.
    pub name: &'static str,
    /// Longer description of what this signature detects.
    pub description: &'static str,
    /// The regular expression matched against fetched content. Signatures
    /// carry an inline `(?i)` flag; matching is case-insensitive by
    /// convention.
    pub regex: &'static str,
}

/// Creates a `SignatureDef` in struct-literal form.
#[macro_export]
macro_rules! signature {
    (
        category: $category:expr,
        name: $name:expr,
        description: $description:expr,
        regex: $regex:expr $(,)?
    ) => {
        $crate::signature::SignatureDef {
            category: $category,
            name: $name,
            description: $description,
            regex: $regex,
        }
    };
}
