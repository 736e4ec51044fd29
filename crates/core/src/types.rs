use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

/// Server-assigned identifier of a live config entry
pub type LiveConfigId = u64;

/// Envelope wrapping every API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A live config entry.
///
/// Only the identifier is interpreted; every other field is carried through
/// as-is so the record round-trips without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LiveConfigId>,
    #[serde(flatten)]
    pub fields: Map<String, JsonValue>,
}

impl LiveConfig {
    /// Create an entry that has not been persisted yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier
    pub fn with_id(mut self, id: LiveConfigId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set an arbitrary field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_word: Option<String>,
    /// Additional column filters, sent verbatim
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    pub fn page(mut self, now_page: u32, page_size: u32) -> Self {
        self.now_page = Some(now_page);
        self.page_size = Some(page_size);
        self
    }

    pub fn order(mut self, name: impl Into<String>, order: SortOrder) -> Self {
        self.order_name = Some(name.into());
        self.order_by = Some(order);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.key_word = Some(keyword.into());
        self
    }

    pub fn filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }
}

/// One page of a list result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default)]
    pub now_page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            now_page: 0,
            page_size: 0,
            has_more: false,
            total: 0,
            rows: Vec::new(),
        }
    }
}

/// A role granted to a user.
///
/// Some endpoints return bare role names, others full role records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Role {
    Name(String),
    Record(RoleRecord),
}

impl Role {
    /// The role name, whichever shape the server sent
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Record(record) => record.role_name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// The currently signed-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, alias = "username", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Password login payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PwdLoginRequest {
    pub id: u64,
    pub password: String,
}

/// Email verification code payload, shared by code login and registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailCodeRequest {
    pub email: String,
    pub code: String,
}

pub type CodeLoginRequest = EmailCodeRequest;
pub type RegisterRequest = EmailCodeRequest;
