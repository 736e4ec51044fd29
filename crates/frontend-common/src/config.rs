//! Frontend configuration

use liveconf_core::ClientSettings;

/// Browser-side defaults
pub struct FrontendConfig;

impl FrontendConfig {
    /// Path prefix of the admin API on the serving origin
    pub const API_PREFIX: &'static str = "/api";

    /// Default log level for the browser console
    pub const LOG_LEVEL: &'static str = "info";
}

/// Settings for an API served under `api_prefix` on the page's own origin
pub fn browser_settings(api_prefix: &str) -> ClientSettings {
    let mut settings = ClientSettings::with_base_url(format!(
        "{}{}",
        crate::client::get_base_url(),
        api_prefix
    ));
    settings.log_level = FrontendConfig::LOG_LEVEL.to_string();
    settings
}
