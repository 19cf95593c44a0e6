//! Point-of-sale repository backed by SQLite.
//!
//! # Invariants
//! - Writes call `Pos::validate()` before any SQL mutation.
//! - `upsert` returns the re-read row, so storage-assigned fields win.
//! - `clear` resets the AUTOINCREMENT sequence; ids restart at 1.

use super::{map_write_error, CrudRepository, RepoError, RepoResult};
use crate::model::pos::{Campus, Pos, PosId, PosType};
use rusqlite::{params, Connection, OptionalExtension, Row};

const POS_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    pos_type,
    campus,
    street,
    house_number,
    postal_code,
    city,
    created_at,
    updated_at
FROM pos";

/// SQLite-backed point-of-sale repository.
pub struct SqlitePosRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePosRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Finds a point of sale by its unique name.
    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<Pos>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POS_SELECT_SQL} WHERE name = ?1;"))?;
        let row = stmt.query_row([name], read_row).optional()?;
        row.map(decode_pos).transpose()
    }

    fn insert(&self, pos: &Pos) -> RepoResult<PosId> {
        self.conn
            .execute(
                "INSERT INTO pos (
                    name,
                    description,
                    pos_type,
                    campus,
                    street,
                    house_number,
                    postal_code,
                    city
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
                params![
                    pos.name.as_str(),
                    pos.description.as_str(),
                    pos.pos_type.as_str(),
                    pos.campus.as_str(),
                    pos.street.as_str(),
                    pos.house_number.as_str(),
                    pos.postal_code,
                    pos.city.as_str(),
                ],
            )
            .map_err(map_write_error::<Pos>)?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: PosId, pos: &Pos) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE pos
                 SET
                    name = ?1,
                    description = ?2,
                    pos_type = ?3,
                    campus = ?4,
                    street = ?5,
                    house_number = ?6,
                    postal_code = ?7,
                    city = ?8,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?9;",
                params![
                    pos.name.as_str(),
                    pos.description.as_str(),
                    pos.pos_type.as_str(),
                    pos.campus.as_str(),
                    pos.street.as_str(),
                    pos.house_number.as_str(),
                    pos.postal_code,
                    pos.city.as_str(),
                    id,
                ],
            )
            .map_err(map_write_error::<Pos>)?;

        if changed == 0 {
            return Err(RepoError::not_found::<Pos>(&id));
        }
        Ok(())
    }
}

impl CrudRepository<Pos> for SqlitePosRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Pos>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POS_SELECT_SQL} ORDER BY id ASC;"))?;
        let rows = stmt.query_map([], read_row)?;

        let mut all = Vec::new();
        for row in rows {
            all.push(decode_pos(row?)?);
        }
        Ok(all)
    }

    fn get_by_id(&self, id: &PosId) -> RepoResult<Pos> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POS_SELECT_SQL} WHERE id = ?1;"))?;
        match stmt.query_row([id], read_row).optional()? {
            Some(row) => decode_pos(row),
            None => Err(RepoError::not_found::<Pos>(id)),
        }
    }

    fn upsert(&self, pos: Pos) -> RepoResult<Pos> {
        pos.validate()?;

        let id = match pos.id {
            None => self.insert(&pos)?,
            Some(id) => {
                self.update(id, &pos)?;
                id
            }
        };
        self.get_by_id(&id)
    }

    fn delete(&self, id: &PosId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM pos WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<Pos>(id));
        }
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn.execute_batch(
            "DELETE FROM pos;
             DELETE FROM sqlite_sequence WHERE name = 'pos';",
        )?;
        Ok(())
    }
}

/// Raw column values, decoded into `Pos` by `decode_pos`.
struct PosRow {
    id: PosId,
    name: String,
    description: String,
    pos_type: String,
    campus: String,
    street: String,
    house_number: String,
    postal_code: u32,
    city: String,
    created_at: i64,
    updated_at: i64,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<PosRow> {
    Ok(PosRow {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        pos_type: row.get("pos_type")?,
        campus: row.get("campus")?,
        street: row.get("street")?,
        house_number: row.get("house_number")?,
        postal_code: row.get("postal_code")?,
        city: row.get("city")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn decode_pos(row: PosRow) -> RepoResult<Pos> {
    let pos_type = PosType::parse(&row.pos_type).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid pos type `{}` in pos.pos_type", row.pos_type))
    })?;
    let campus = Campus::parse(&row.campus).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid campus `{}` in pos.campus", row.campus))
    })?;

    Ok(Pos {
        id: Some(row.id),
        name: row.name,
        description: row.description,
        pos_type,
        campus,
        street: row.street,
        house_number: row.house_number,
        postal_code: row.postal_code,
        city: row.city,
        created_at: Some(row.created_at),
        updated_at: Some(row.updated_at),
    })
}
