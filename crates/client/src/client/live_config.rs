//! Live config resource endpoints

use super::{AuthenticatedClient, ClientError};
use liveconf_core::{ApiResponse, ListParams, LiveConfig, LiveConfigId, Paginated};
use reqwest::Method;
use serde_json::Value;

const RESOURCE: &str = "/live_config";

/// CRUD client for live config entries.
///
/// Each method issues exactly one request and hands back the response
/// envelope as the server sent it.
#[derive(Clone, Debug)]
pub struct LiveConfigClient {
    client: AuthenticatedClient,
}

impl LiveConfigClient {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// List entries matching `params`
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<Paginated<LiveConfig>>, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("{RESOURCE}/list"))
            .query(params);
        self.client.execute(request).await
    }

    /// Fetch a single entry
    pub async fn get_by_id(
        &self,
        id: LiveConfigId,
    ) -> Result<ApiResponse<LiveConfig>, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("{RESOURCE}/find/{id}"));
        self.client.execute(request).await
    }

    /// Create an entry; the server assigns its identifier
    pub async fn create(&self, data: &LiveConfig) -> Result<ApiResponse<Value>, ClientError> {
        let request = self
            .client
            .request(Method::POST, &format!("{RESOURCE}/create"))
            .json(data);
        self.client.execute(request).await
    }

    /// Replace the entry identified by `data.id`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without sending anything when
    /// `data` has no identifier
    pub async fn update(&self, data: &LiveConfig) -> Result<ApiResponse<Value>, ClientError> {
        let id = data
            .id
            .ok_or_else(|| ClientError::Validation("live config update requires an id".into()))?;

        let request = self
            .client
            .request(Method::PUT, &format!("{RESOURCE}/update/{id}"))
            .json(data);
        self.client.execute(request).await
    }

    /// Delete an entry
    pub async fn delete(&self, id: LiveConfigId) -> Result<ApiResponse<Value>, ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("{RESOURCE}/delete/{id}"));
        self.client.execute(request).await
    }
}

impl AuthenticatedClient {
    /// Live config endpoints sharing this client's token
    pub fn live_config(&self) -> LiveConfigClient {
        LiveConfigClient::new(self.clone())
    }
}
