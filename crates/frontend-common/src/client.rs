//! Client configuration and initialization

use crate::notify::CallbackNotifier;
use crate::session::{BrowserSession, SharedSession};
use crate::storage::BrowserStorage;
pub use liveconf_client::ClientError;
use liveconf_client::HttpAuthApi;
use liveconf_core::{ClientSettings, Notice};
use web_sys::window;
use yew::Callback;

/// Get the base URL for API calls
pub fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Build the session for this page.
///
/// The returned handle is meant to be created once by the application root
/// and passed to [`crate::session::SessionProvider`].
pub fn connect_session(
    settings: &ClientSettings,
    on_notice: Callback<Notice>,
) -> Result<SharedSession, ClientError> {
    settings
        .validate()
        .map_err(|e| ClientError::Configuration(e.to_string()))?;

    let api = HttpAuthApi::from_settings(settings)?;
    let store = BrowserSession::new(
        api,
        BrowserStorage::new(),
        CallbackNotifier::new(on_notice),
        settings.session.clone(),
    );
    Ok(SharedSession::new(store, settings.api.clone()))
}
