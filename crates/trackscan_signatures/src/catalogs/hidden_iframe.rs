//! Iframes hidden through CSS or zero-sized dimensions.

crate::declare_catalog!(
    HiddenIframeCatalog,
    id: "hidden-iframe",
    name: "Hidden Iframes",
    category: Category::HiddenIframe,
    signatures: [
        crate::signature! {
            category: Category::HiddenIframe,
            name: "Hidden Iframe",
            description: "Hidden iframe using CSS display or visibility properties",
            regex: r#"(?i)<iframe[^>]*(?:style=["'][^"']*(?:display:\s*none|visibility:\s*hidden|opacity:\s*0)[^"']*["'])[^>]*>"#,
        },
        crate::signature! {
            category: Category::HiddenIframe,
            name: "Zero Size Iframe",
            description: "Zero-sized iframe with width or height set to 0",
            regex: r#"(?i)<iframe[^>]*(?:width=["']0["']|height=["']0["']|width=["']1["']|height=["']1["'])[^>]*>"#,
        },
        crate::signature! {
            category: Category::HiddenIframe,
            name: "Dynamic Hidden Iframe",
            description: "Dynamically created hidden iframe using JavaScript",
            regex: r#"(?i)createElement\(['"]iframe['"]\)[^>]*(?:style\.display\s*=\s*['"]none['"]|style\.visibility\s*=\s*['"]hidden['"]|style\.opacity\s*=\s*['"]0['"])"#,
        },
    ],
);
