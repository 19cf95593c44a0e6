//! User repository backed by SQLite.

use super::{map_write_error, CrudRepository, RepoError, RepoResult};
use crate::model::user::{User, UserId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const USER_SELECT_SQL: &str = "SELECT
    id,
    login_name,
    email_address,
    first_name,
    last_name,
    created_at,
    updated_at
FROM users";

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Finds a user by login name.
    pub fn find_by_login_name(&self, login_name: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE login_name = ?1;"))?;
        Ok(stmt.query_row([login_name], parse_user_row).optional()?)
    }
}

impl CrudRepository<User> for SqliteUserRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let users = stmt
            .query_map([], parse_user_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    fn get_by_id(&self, id: &UserId) -> RepoResult<User> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
        stmt.query_row([id], parse_user_row)
            .optional()?
            .ok_or_else(|| RepoError::not_found::<User>(id))
    }

    fn upsert(&self, user: User) -> RepoResult<User> {
        user.validate()?;

        let id = match user.id {
            None => {
                self.conn
                    .execute(
                        "INSERT INTO users (
                            login_name,
                            email_address,
                            first_name,
                            last_name
                        ) VALUES (?1, ?2, ?3, ?4);",
                        params![
                            user.login_name.as_str(),
                            user.email_address.as_str(),
                            user.first_name.as_str(),
                            user.last_name.as_str(),
                        ],
                    )
                    .map_err(map_write_error::<User>)?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                let changed = self
                    .conn
                    .execute(
                        "UPDATE users
                         SET
                            login_name = ?1,
                            email_address = ?2,
                            first_name = ?3,
                            last_name = ?4,
                            updated_at = (strftime('%s', 'now') * 1000)
                         WHERE id = ?5;",
                        params![
                            user.login_name.as_str(),
                            user.email_address.as_str(),
                            user.first_name.as_str(),
                            user.last_name.as_str(),
                            id,
                        ],
                    )
                    .map_err(map_write_error::<User>)?;
                if changed == 0 {
                    return Err(RepoError::not_found::<User>(&id));
                }
                id
            }
        };

        self.get_by_id(&id)
    }

    fn delete(&self, id: &UserId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<User>(id));
        }
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn.execute_batch(
            "DELETE FROM users;
             DELETE FROM sqlite_sequence WHERE name = 'users';",
        )?;
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: Some(row.get("id")?),
        login_name: row.get("login_name")?,
        email_address: row.get("email_address")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
