//! Client-side error and crash reporting.

crate::declare_catalog!(
    ErrorTrackingCatalog,
    id: "error-tracking",
    name: "Error Tracking",
    category: Category::ErrorTracking,
    signatures: [
        crate::signature! {
            category: Category::ErrorTracking,
            name: "Sentry",
            description: "Sentry error monitoring and crash reporting platform",
            regex: r"(?i)browser\.sentry-cdn\.com|Sentry\.init|window\.SENTRY_CONFIG",
        },
        crate::signature! {
            category: Category::ErrorTracking,
            name: "Rollbar",
            description: "Rollbar error tracking and debugging platform",
            regex: r"(?i)cdn\.rollbar\.com|rollbar\.init|window\._rollbarConfig",
        },
        crate::signature! {
            category: Category::ErrorTracking,
            name: "BugSnag",
            description: "BugSnag application stability monitoring platform",
            regex: r"(?i)d2wy8f7a9ursnm\.cloudfront\.net/bugsnag|bugsnag\.init|window\.bugsnag",
        },
    ],
);
