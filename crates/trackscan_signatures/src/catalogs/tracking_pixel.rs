//! Conversion and audience tracking pixels.

crate::declare_catalog!(
    TrackingPixelCatalog,
    id: "tracking-pixel",
    name: "Tracking Pixels",
    category: Category::TrackingPixel,
    signatures: [
        crate::signature! {
            category: Category::TrackingPixel,
            name: "Facebook Pixel",
            description: "Facebook tracking pixel for conversion tracking and audience targeting",
            regex: r"(?i)facebook\.com/tr|facebook\.net/signals|connect\.facebook\.net|fbevents\.js|_fbq\.push",
        },
        crate::signature! {
            category: Category::TrackingPixel,
            name: "Google Analytics",
            description: "Google Analytics tracking code for website analytics and user behavior",
            regex: r"(?i)google-analytics\.com|analytics\.js|gtag|ga\.js|googletagmanager\.com|google_analytics|_ga\.push",
        },
        crate::signature! {
            category: Category::TrackingPixel,
            name: "LinkedIn Insight",
            description: "LinkedIn Insight Tag for conversion tracking and audience analytics",
            regex: r"(?i)linkedin\.com/li\.lms-analytics|linkedin\.com/insight|snap\.licdn\.com|_linkedin_data|_linkedin_partner_id",
        },
        crate::signature! {
            category: Category::TrackingPixel,
            name: "Twitter Pixel",
            description: "Twitter pixel for conversion tracking and audience targeting",
            regex: r"(?i)static\.ads-twitter\.com|ads-twitter\.com/uwt\.js|twq\(|twitter\.com/i/adsct",
        },
        crate::signature! {
            category: Category::TrackingPixel,
            name: "Pinterest Tag",
            description: "Pinterest conversion tracking and audience targeting pixel",
            regex: r"(?i)pintrk\.js|pinimg\.com/ct|pinterest-analytics|pinterest\.com/ct\.html",
        },
        crate::signature! {
            category: Category::TrackingPixel,
            name: "TikTok Pixel",
            description: "TikTok pixel for conversion tracking and audience targeting",
            regex: r"(?i)analytics\.tiktok\.com|tiktok\.com/i/pixel|ttq\.track|_tiktok\.push",
        },
    ],
);
