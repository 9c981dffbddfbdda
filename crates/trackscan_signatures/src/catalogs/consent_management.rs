//! Cookie and privacy consent platforms.

crate::declare_catalog!(
    ConsentManagementCatalog,
    id: "consent-management",
    name: "Consent Management",
    category: Category::ConsentManagement,
    signatures: [
        crate::signature! {
            category: Category::ConsentManagement,
            name: "OneTrust",
            description: "OneTrust privacy and consent management platform",
            regex: r"(?i)cdn\.cookielaw\.org|optanon\.blob\.core|OneTrust|otSDKStub",
        },
        crate::signature! {
            category: Category::ConsentManagement,
            name: "CookieBot",
            description: "CookieBot GDPR/CCPA consent management solution",
            regex: r"(?i)consent\.cookiebot\.com|Cookiebot\.renew|window\.Cookiebot",
        },
        crate::signature! {
            category: Category::ConsentManagement,
            name: "TrustArc",
            description: "TrustArc privacy management and compliance platform",
            regex: r"(?i)consent\.truste\.com|truste\.com/notice|truste-svc\.net",
        },
    ],
);
