//! Embedded chat and customer-messaging widgets.

crate::declare_catalog!(
    AiChatCatalog,
    id: "ai-chat",
    name: "AI Chat Widgets",
    category: Category::AiChat,
    signatures: [
        crate::signature! {
            category: Category::AiChat,
            name: "Intercom",
            description: "Intercom customer messaging and engagement platform",
            regex: r"(?i)intercomcdn\.com|intercom\.io|widget\.intercom\.io|window\.intercomSettings|Intercom\('boot'",
        },
        crate::signature! {
            category: Category::AiChat,
            name: "Drift",
            description: "Drift conversational marketing and sales platform",
            regex: r"(?i)drift\.com/embed|js\.driftt\.com|drift\.load|driftt\.com",
        },
        crate::signature! {
            category: Category::AiChat,
            name: "Zendesk",
            description: "Zendesk customer service and engagement platform",
            regex: r"(?i)static\.zdassets\.com|zopim\.com|zendesk\.com/embeddable|zEmbed",
        },
        crate::signature! {
            category: Category::AiChat,
            name: "Crisp",
            description: "Crisp customer messaging and support platform",
            regex: r"(?i)crisp\.chat|client\.crisp\.chat|window\.CRISP_WEBSITE_ID|\$crisp\.push",
        },
        crate::signature! {
            category: Category::AiChat,
            name: "LiveChat",
            description: "LiveChat customer service and engagement platform",
            regex: r"(?i)cdn\.livechatinc\.com|livechatinc\.com/tracking|window\.__lc",
        },
        crate::signature! {
            category: Category::AiChat,
            name: "Tidio",
            description: "Tidio live chat and chatbot platform",
            regex: r"(?i)code\.tidio\.co|tidio\.com/|tidioChatCode",
        },
    ],
);
