//! Cloud storage endpoints and connection-string leakage.

crate::declare_catalog!(
    CloudStorageCatalog,
    id: "cloud-storage",
    name: "Cloud Storage",
    category: Category::CloudStorage,
    signatures: [
        crate::signature! {
            category: Category::CloudStorage,
            name: "AWS S3 Bucket",
            description: "Amazon Web Services S3 storage bucket configuration and access",
            regex: r#"(?i)(?:https?://)?(?:[a-zA-Z0-9-]+\.)?s3[.-](?:[a-zA-Z0-9-]+\.)?amazonaws\.com|(?:https?://)?s3://[a-zA-Z0-9-]+|"bucket":\s*"[a-zA-Z0-9-]+"|AWS_BUCKET|S3_BUCKET"#,
        },
        crate::signature! {
            category: Category::CloudStorage,
            name: "Azure Blob Storage",
            description: "Microsoft Azure Blob storage configuration and connection strings",
            regex: r"(?i)(?:https?://)?[a-zA-Z0-9-]+\.blob\.core\.windows\.net|DefaultEndpointsProtocol=https;AccountName=[^;]+;AccountKey=[^;]+|AZURE_STORAGE_CONNECTION_STRING|AZURE_STORAGE_ACCOUNT",
        },
        crate::signature! {
            category: Category::CloudStorage,
            name: "Google Cloud Storage",
            description: "Google Cloud Storage bucket configuration and access details",
            regex: r#"(?i)(?:https?://)?storage\.cloud\.google\.com/[a-zA-Z0-9-]+|(?:https?://)?storage\.googleapis\.com/[a-zA-Z0-9-]+|"type":\s*"service_account"|GOOGLE_CLOUD_BUCKET|GCS_BUCKET"#,
        },
    ],
);
