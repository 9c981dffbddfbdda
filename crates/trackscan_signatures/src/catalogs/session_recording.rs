//! Full session replay tooling.

crate::declare_catalog!(
    SessionRecordingCatalog,
    id: "session-recording",
    name: "Session Recording",
    category: Category::SessionRecording,
    signatures: [
        crate::signature! {
            category: Category::SessionRecording,
            name: "LogRocket",
            description: "LogRocket session replay and error tracking platform",
            regex: r"(?i)cdn\.logrocket\.com|LogRocket\.init|window\.LogRocket",
        },
        crate::signature! {
            category: Category::SessionRecording,
            name: "Smartlook",
            description: "Smartlook user session recording and analytics",
            regex: r"(?i)smartlook\.com/recorder\.js|window\.smartlook|smartlook\.init",
        },
        crate::signature! {
            category: Category::SessionRecording,
            name: "Clarity",
            description: "Microsoft Clarity behavior analytics and heatmap tool",
            regex: r"(?i)clarity\.ms/tag|microsoft\.com/clarity|clarity\.identify",
        },
    ],
);
