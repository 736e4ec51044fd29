//! Session module

pub mod context;
pub mod guard;

pub use context::{
    BrowserSession, SessionContext, SessionProvider, SharedSession, use_is_authenticated,
    use_session, use_session_state,
};
pub use guard::RequireSession;
