//! Behaviour analytics and heatmap tooling.

crate::declare_catalog!(
    TrackingCatalog,
    id: "tracking",
    name: "Behaviour Analytics",
    category: Category::Tracking,
    signatures: [
        crate::signature! {
            category: Category::Tracking,
            name: "Hotjar",
            description: "Hotjar behavior analytics and user feedback platform",
            regex: r"(?i)static\.hotjar\.com|hotjar-|hj\.|hotjar\.com|window\.hjSiteSettings|_hjSettings",
        },
        crate::signature! {
            category: Category::Tracking,
            name: "Mouseflow",
            description: "Mouseflow session replay and heatmap analytics tool",
            regex: r"(?i)mouseflow\.com/projects|_mfq\.push|mouseflow\.init|mouseflowId",
        },
        crate::signature! {
            category: Category::Tracking,
            name: "FullStory",
            description: "FullStory digital experience analytics platform",
            regex: r"(?i)fullstory\.com/s/fs\.js|window\['_fs_host'\]|FS\.identify|_fs_loaded",
        },
        crate::signature! {
            category: Category::Tracking,
            name: "Lucky Orange",
            description: "Lucky Orange analytics and customer feedback platform",
            regex: r"(?i)luckyorange\.com|window\.__lo_site_id|_loq\.push",
        },
        crate::signature! {
            category: Category::Tracking,
            name: "Heap Analytics",
            description: "Heap analytics platform for user behavior tracking",
            regex: r"(?i)heapanalytics\.com|heap\.load|window\.heap|heap\.track",
        },
        crate::signature! {
            category: Category::Tracking,
            name: "Mixpanel",
            description: "Mixpanel product analytics platform",
            regex: r"(?i)cdn\.mxpnl\.com|mixpanel\.init|mixpanel\.track",
        },
    ],
);
