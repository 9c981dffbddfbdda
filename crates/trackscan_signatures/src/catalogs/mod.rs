//! Builtin signature catalogs organised by artifact category.

mod ab_testing;
mod ad_network;
mod ai_chat;
mod cloud_storage;
mod cms;
mod consent_management;
mod error_tracking;
mod hidden_iframe;
mod session_recording;
mod tracking;
mod tracking_pixel;

use crate::catalog::Catalog;

/// Returns all builtin catalogs in report declaration order.
#[must_use]
pub fn builtin_catalogs() -> Vec<&'static dyn Catalog> {
    vec![
        &cms::CmsCatalog,
        &cloud_storage::CloudStorageCatalog,
        &tracking_pixel::TrackingPixelCatalog,
        &ad_network::AdNetworkCatalog,
        &ai_chat::AiChatCatalog,
        &hidden_iframe::HiddenIframeCatalog,
        &tracking::TrackingCatalog,
        &consent_management::ConsentManagementCatalog,
        &session_recording::SessionRecordingCatalog,
        &error_tracking::ErrorTrackingCatalog,
        &ab_testing::AbTestingCatalog,
    ]
}
