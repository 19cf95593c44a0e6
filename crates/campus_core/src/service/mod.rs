//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate data-access port calls into use-case level APIs.
//! - Keep API/CLI layers decoupled from storage details.
//!
//! Entity-specific services are `CrudService` instances with the matching
//! SQLite repository injected.

use crate::model::pos::Pos;
use crate::model::user::User;
use crate::repo::pos_repo::SqlitePosRepository;
use crate::repo::user_repo::SqliteUserRepository;
use rusqlite::Connection;

pub mod crud_service;

pub use crud_service::CrudService;

pub type PosService<'conn> = CrudService<Pos, SqlitePosRepository<'conn>>;
pub type UserService<'conn> = CrudService<User, SqliteUserRepository<'conn>>;

/// Builds the point-of-sale service over an opened connection.
pub fn pos_service(conn: &Connection) -> PosService<'_> {
    CrudService::new(SqlitePosRepository::new(conn))
}

/// Builds the user service over an opened connection.
pub fn user_service(conn: &Connection) -> UserService<'_> {
    CrudService::new(SqliteUserRepository::new(conn))
}
