//! Live config client core types and utilities

pub mod error;
#[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
pub mod logging;
pub mod notify;
pub mod settings;
pub mod storage;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use notify::{Notice, NoticeLevel, NoticeLog, Notifier, TracingNotifier};
pub use settings::{ApiSettings, AuthEndpoints, ClientSettings, SessionSettings};
pub use storage::{ExpiringStorage, MemoryStorage, StoredEntry};
pub use types::{
    ApiResponse, CodeLoginRequest, EmailCodeRequest, ListParams, LiveConfig, LiveConfigId,
    Paginated, PwdLoginRequest, RegisterRequest, Role, RoleRecord, SortOrder, User,
};
