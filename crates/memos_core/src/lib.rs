//! Core of the memos client: memo store, service and API collaborators.
//! This crate is the single source of truth for memo list invariants.

pub mod api;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use api::sqlite::SqliteMemoApi;
pub use api::{ApiError, ApiResult, MemoApi};
pub use config::{ConfigError, Mode, Profile};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::memo::{Memo, MemoId, MemoPatch, RawMemo, RowStatus};
pub use model::user::User;
pub use repo::memo_repo::SqliteMemoRepository;
pub use repo::user_repo::SqliteUserRepository;
pub use repo::{RepoError, RepoResult};
pub use service::memo_service::{FetchTicket, MemoService, ServiceError, ServiceResult};
pub use service::tags::{collect_tags, extract_tags};
pub use service::usage::{daily_usage_stats, DailyUsageStat, UsageLevel};
pub use session::{LocalSession, SessionProvider};
pub use store::action::MemoAction;
pub use store::memo_store::{MemoStore, SubscriptionId};
pub use store::reducer::{reduce, sort_and_dedupe, MemoState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
