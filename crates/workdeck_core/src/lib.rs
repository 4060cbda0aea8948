//! Core domain logic for Workdeck.
//! This crate owns the in-memory workspace tree and every rule applied to it.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod session;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LogTarget};
pub use model::path::WorkspacePath;
pub use model::slug::slugify;
pub use model::workspace::{Credentials, Domain, File, FileType, Folder, Project};
pub use repo::seed::{seed_domains, SeedError};
pub use repo::workspace_store::{LocatedFile, WorkspaceStore};
pub use search::scan::{build_preview, search_all, search_project, SearchHit, SearchQuery};
pub use service::account_service::{
    AccountService, AccountServiceError, PasswordChangeRequest, PasswordRecovery,
    RecoveryContact, RecoveryStep, SignUpRequest,
};
pub use service::workspace_service::{
    complete_title, NewFileRequest, WorkspaceService, WorkspaceServiceError,
};
pub use session::{auth_flag_key, Session, SessionId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
