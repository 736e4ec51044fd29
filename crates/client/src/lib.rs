//! Live config admin data-access layer: typed REST clients and the session store

pub mod client;
pub mod session;

pub use client::{
    AuthApi, AuthenticatedClient, ClientError, HttpAuthApi, LiveConfigClient, PublicClient,
    TypedClientBuilder,
};
pub use session::{RegisterOutcome, SessionPhase, SessionState, SessionStore};
