//! Content management system fingerprints.

crate::declare_catalog!(
    CmsCatalog,
    id: "cms",
    name: "Content Management Systems",
    category: Category::Cms,
    signatures: [
        crate::signature! {
            category: Category::Cms,
            name: "WordPress",
            description: "WordPress content management system components and functionality",
            regex: r"(?i)wp-content|wp-includes|wp-admin|wp-config\.php|wordpress\.com|wordpress\.org|wp_|wordpress_|/wp-json/|wp\.customize|wp\.blocks",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Drupal",
            description: "Drupal content management platform elements and configurations",
            regex: r"(?i)drupal\.org|drupal\.settings|drupal\.behaviors|/sites/default/files/|/node/\d+|/admin/content|/sites/all/themes/|/sites/all/modules/",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Joomla",
            description: "Joomla CMS core components and administrative features",
            regex: r"(?i)com_content|com_users|com_admin|joomla!|/administrator/|mosConfig_|joomla\.org|joomla\.javascript|/components/com_|/modules/mod_",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Ghost",
            description: "Ghost publishing platform elements and administrative tools",
            regex: r"(?i)ghost\.io|ghost-admin|ghost\.|ghost_root_url|ghost\-admin|ghost\.settings|/ghost/api/|@tryghost/",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Shopify",
            description: "Shopify e-commerce platform components and functionality",
            regex: r"(?i)shopify\.com|myshopify\.com|shopify\.section|shopify\.theme|shopify\.assets|\.myshopify\.|shopify\.payment|shopify-buy",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Magento",
            description: "Magento e-commerce system elements and features",
            regex: r"(?i)magento|mage\.|/skin/frontend/|/app/design/frontend/|var magento|mage/cookies\.js|Mage\.Cookies|/checkout/cart/",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Wix",
            description: "Wix website builder platform components and tools",
            regex: r"(?i)wix\.com|wixsite\.com|wix-code|wix-api|wix-dashboard|wix-locations|wix-events|wix-stores|wix-bookings",
        },
        crate::signature! {
            category: Category::Cms,
            name: "Squarespace",
            description: "Squarespace website platform elements and functionality",
            regex: r"(?i)squarespace\.com|sqsp\.com|squarespace-cdn\.com|squarespace\.config|squarespace\.bootstrap|static\.squarespace|static1\.squarespace",
        },
    ],
);
