//! Core domain logic for the campus coffee backend.
//! Generic CRUD orchestration over pluggable data-access ports.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::pos::{Campus, Pos, PosId, PosType};
pub use model::user::{User, UserId};
pub use model::{DomainModel, ValidationError};
pub use repo::pos_repo::SqlitePosRepository;
pub use repo::user_repo::SqliteUserRepository;
pub use repo::{CrudRepository, DuplicationError, RepoError, RepoResult};
pub use service::{pos_service, user_service, CrudService, PosService, UserService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
