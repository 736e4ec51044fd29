pub mod client;
pub mod config;
pub mod logging;
pub mod notify;
pub mod session;
pub mod storage;

pub use client::{connect_session, get_base_url};
pub use config::{FrontendConfig, browser_settings};
pub use logging::init_logging;
pub use notify::CallbackNotifier;
pub use session::{
    BrowserSession, RequireSession, SessionContext, SessionProvider, SharedSession,
    use_is_authenticated, use_session, use_session_state,
};
pub use storage::BrowserStorage;
