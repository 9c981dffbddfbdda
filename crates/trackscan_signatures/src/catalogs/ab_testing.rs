//! Experimentation and A/B testing frameworks.

crate::declare_catalog!(
    AbTestingCatalog,
    id: "ab-testing",
    name: "A/B Testing",
    category: Category::AbTesting,
    signatures: [
        crate::signature! {
            category: Category::AbTesting,
            name: "Optimizely",
            description: "Optimizely A/B testing and experimentation platform",
            regex: r"(?i)cdn\.optimizely\.com|optimizely\.init|window\.optimizely",
        },
        crate::signature! {
            category: Category::AbTesting,
            name: "VWO",
            description: "Visual Website Optimizer A/B testing platform",
            regex: r"(?i)dev\.visualwebsiteoptimizer\.com|window\._vwo_code|_vwo_api\.js",
        },
        crate::signature! {
            category: Category::AbTesting,
            name: "Google Optimize",
            description: "Google Optimize A/B testing and personalization tool",
            regex: r"(?i)optimize\.google\.com|gtag\('config', 'OPT-|google_optimize",
        },
    ],
);
