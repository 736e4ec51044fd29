//! Authentication endpoints

use super::{ClientError, PublicClient, TypedClientBuilder};
use async_trait::async_trait;
use liveconf_core::{
    ApiResponse, AuthEndpoints, ClientSettings, CodeLoginRequest, PwdLoginRequest,
    RegisterRequest, User,
};
use reqwest::Method;

/// Authentication API consumed by the session store.
///
/// Login and registration answer with the session token as `data`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthApi {
    async fn password_login(
        &self,
        request: &PwdLoginRequest,
    ) -> Result<ApiResponse<String>, ClientError>;

    async fn email_code_login(
        &self,
        request: &CodeLoginRequest,
    ) -> Result<ApiResponse<String>, ClientError>;

    async fn register(&self, request: &RegisterRequest)
    -> Result<ApiResponse<String>, ClientError>;

    /// Current user for `token`
    async fn user_info(&self, token: &str) -> Result<ApiResponse<User>, ClientError>;
}

/// [`AuthApi`] over HTTP
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: PublicClient,
    endpoints: AuthEndpoints,
}

impl HttpAuthApi {
    pub fn new(client: PublicClient, endpoints: AuthEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Build the public client and endpoint table from settings
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = TypedClientBuilder::from_settings(&settings.api).build_public()?;
        Ok(Self::new(client, settings.endpoints.clone()))
    }

    pub fn client(&self) -> &PublicClient {
        &self.client
    }

    pub fn endpoints(&self) -> &AuthEndpoints {
        &self.endpoints
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthApi for HttpAuthApi {
    async fn password_login(
        &self,
        request: &PwdLoginRequest,
    ) -> Result<ApiResponse<String>, ClientError> {
        let req = self
            .client
            .request(Method::POST, &self.endpoints.password_login)
            .json(request);
        self.client.execute(req).await
    }

    async fn email_code_login(
        &self,
        request: &CodeLoginRequest,
    ) -> Result<ApiResponse<String>, ClientError> {
        let req = self
            .client
            .request(Method::POST, &self.endpoints.email_code_login)
            .json(request);
        self.client.execute(req).await
    }

    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<String>, ClientError> {
        let req = self
            .client
            .request(Method::POST, &self.endpoints.register)
            .json(request);
        self.client.execute(req).await
    }

    async fn user_info(&self, token: &str) -> Result<ApiResponse<User>, ClientError> {
        let client = self.client.clone().authenticate(token);
        let req = client.request(Method::GET, &self.endpoints.user_info);
        client.execute(req).await
    }
}
