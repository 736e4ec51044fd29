//! Live config HTTP client

pub mod auth;
pub mod error;
pub mod live_config;
pub mod typed;

pub use auth::{AuthApi, HttpAuthApi};
pub use error::ClientError;
pub use live_config::LiveConfigClient;
pub use typed::{AuthenticatedClient, PublicClient, TypedClientBuilder};
