//! Advertising network integrations.

crate::declare_catalog!(
    AdNetworkCatalog,
    id: "ad-network",
    name: "Ad Networks",
    category: Category::AdNetwork,
    signatures: [
        crate::signature! {
            category: Category::AdNetwork,
            name: "Google AdSense",
            description: "Google AdSense advertising network integration",
            regex: r"(?i)pagead2\.googlesyndication\.com|adsbygoogle|google_ad_client|googleads|adsense\.js",
        },
        crate::signature! {
            category: Category::AdNetwork,
            name: "Amazon Ads",
            description: "Amazon advertising network integration",
            regex: r"(?i)amazon-adsystem\.com|amzn_ads|amzn\.to/ads|amazon-ads-api",
        },
        crate::signature! {
            category: Category::AdNetwork,
            name: "Media.net",
            description: "Media.net advertising network integration",
            regex: r"(?i)media\.net/dmedianet|medianet\.js|media\.net/rtb",
        },
        crate::signature! {
            category: Category::AdNetwork,
            name: "Taboola",
            description: "Taboola content recommendation and advertising network",
            regex: r"(?i)cdn\.taboola\.com|taboola\.com/libtrc|_taboola\.push|tbl\.loadRecsetScript",
        },
        crate::signature! {
            category: Category::AdNetwork,
            name: "Outbrain",
            description: "Outbrain content discovery and advertising platform",
            regex: r"(?i)outbrain\.com/widget|obcdn\.com|ob_click|OBR\.extern\.researchWidget",
        },
        crate::signature! {
            category: Category::AdNetwork,
            name: "Criteo",
            description: "Criteo retargeting and advertising network",
            regex: r"(?i)static\.criteo\.net|criteo\.com/js|criteo_q\.push|crto\.com",
        },
    ],
);
