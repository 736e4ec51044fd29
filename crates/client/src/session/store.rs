//! Session store: token, current user and roles for one browser session

use crate::client::{AuthApi, AuthenticatedClient, ClientError, TypedClientBuilder};
use liveconf_core::{
    ApiResponse, ApiSettings, CodeLoginRequest, ExpiringStorage, Notifier, PwdLoginRequest,
    RegisterRequest, Role, SessionSettings, User,
};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_info: Option<User>,
    pub roles: Option<Vec<Role>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

impl SessionState {
    /// `user_info` and `roles` are not consulted; only the token decides
    pub fn phase(&self) -> SessionPhase {
        if self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterOutcome {
    pub token: String,
}

/// Holder of authentication state for the current session.
///
/// The store is an explicit context object: the auth API, the token storage
/// and the notification sink are all injected. Every mutation is published
/// to [`SessionStore::subscribe`] receivers. Concurrent actions are not
/// coordinated; whichever response resolves last determines the state.
pub struct SessionStore<A, S, N> {
    api: A,
    storage: S,
    notifier: N,
    settings: SessionSettings,
    state: watch::Sender<SessionState>,
}

impl<A, S, N> SessionStore<A, S, N>
where
    A: AuthApi,
    S: ExpiringStorage,
    N: Notifier,
{
    /// Create an anonymous session
    pub fn new(api: A, storage: S, notifier: N, settings: SessionSettings) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            api,
            storage,
            notifier,
            settings,
            state,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Current state snapshot
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every mutation
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn user_info(&self) -> Option<User> {
        self.state.borrow().user_info.clone()
    }

    pub fn roles(&self) -> Option<Vec<Role>> {
        self.state.borrow().roles.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Pick up a token persisted by an earlier session.
    ///
    /// Returns whether a live token was found.
    pub fn restore(&self) -> bool {
        match self.storage.get(&self.settings.token_key) {
            Some(token) => {
                tracing::debug!("Restored session token from storage");
                self.state.send_modify(|state| state.token = Some(token));
                true
            }
            None => false,
        }
    }

    pub fn set_user_info(&self, user_info: Option<User>) {
        self.state.send_modify(|state| state.user_info = user_info);
    }

    /// Persist the token with the configured lifetime and hold it in memory.
    ///
    /// An empty token is refused. If persisting fails the in-memory state is
    /// left untouched.
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), ClientError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ClientError::MissingToken);
        }
        self.storage
            .set_with_ttl(&self.settings.token_key, &token, self.settings.token_ttl())?;
        self.state.send_modify(|state| state.token = Some(token));
        Ok(())
    }

    pub fn set_roles(&self, roles: Option<Vec<Role>>) {
        self.state.send_modify(|state| state.roles = roles);
    }

    /// Drop the persisted token and clear all session fields
    pub fn logout(&self) {
        self.storage.remove(&self.settings.token_key);
        self.state.send_modify(|state| {
            state.token = None;
            state.user_info = None;
            state.roles = None;
        });
        tracing::info!("Session cleared");
    }

    /// Log in with account id and password.
    ///
    /// Failures are not reported here: the caller only sees `None`, and the
    /// session is left untouched.
    pub async fn pwd_login(&self, request: &PwdLoginRequest) -> Option<String> {
        let result = self.api.password_login(request).await;
        match result.and_then(|response| self.accept_token(response)) {
            Ok(token) => {
                tracing::info!(user_id = request.id, "Password login succeeded");
                Some(token)
            }
            Err(error) => {
                tracing::warn!(%error, "Password login failed");
                None
            }
        }
    }

    /// Log in with an emailed verification code. Same contract as [`Self::pwd_login`].
    pub async fn code_login(&self, request: &CodeLoginRequest) -> Option<String> {
        let result = self.api.email_code_login(request).await;
        match result.and_then(|response| self.accept_token(response)) {
            Ok(token) => {
                tracing::info!("Email code login succeeded");
                Some(token)
            }
            Err(error) => {
                tracing::warn!(%error, "Email code login failed");
                None
            }
        }
    }

    /// Register with an emailed verification code.
    ///
    /// On failure the notifier receives the error message once and the error
    /// is handed back to the caller.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterOutcome, ClientError> {
        let result = self.api.register(request).await;
        match result.and_then(|response| self.accept_token(response)) {
            Ok(token) => {
                tracing::info!("Registration succeeded");
                Ok(RegisterOutcome { token })
            }
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error)
            }
        }
    }

    /// Fetch the current user and replace `user_info` and `roles` together.
    ///
    /// Errors are returned unchanged and leave the state as it was.
    pub async fn get_user_info(&self) -> Result<ApiResponse<User>, ClientError> {
        let token = self
            .token()
            .ok_or_else(|| ClientError::AuthenticationFailed("no session token".into()))?;

        let response = self.api.user_info(&token).await?;
        let user = response.data.clone();
        self.state.send_modify(|state| {
            state.roles = user.roles.clone();
            state.user_info = Some(user);
        });
        Ok(response)
    }

    fn accept_token(&self, response: ApiResponse<String>) -> Result<String, ClientError> {
        self.set_token(response.data.clone())?;
        Ok(response.data)
    }

    /// Client carrying the current token, for authenticated resources
    pub fn authenticated_client(
        &self,
        settings: &ApiSettings,
    ) -> Result<AuthenticatedClient, ClientError> {
        let token = self
            .token()
            .ok_or_else(|| ClientError::AuthenticationFailed("no session token".into()))?;
        TypedClientBuilder::from_settings(settings).build_authenticated(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_token_only() {
        let mut state = SessionState {
            user_info: Some(User::default()),
            roles: Some(vec![Role::Name("admin".into())]),
            ..SessionState::default()
        };
        assert_eq!(state.phase(), SessionPhase::Anonymous);

        state.token = Some("abc".into());
        state.user_info = None;
        assert_eq!(state.phase(), SessionPhase::Authenticated);
    }
}
