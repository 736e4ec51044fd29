//! Client-side session state

pub mod store;

pub use store::{RegisterOutcome, SessionPhase, SessionState, SessionStore};
