//! Generic CRUD use-case service.
//!
//! # Responsibility
//! - Expose the five CRUD entry points to callers above the core.
//! - Decide between create and update for `upsert` from identifier presence.
//!
//! # Invariants
//! - Every port error is returned to the caller exactly as raised.
//! - Create path: one port `upsert`, never a `get_by_id`.
//! - Update path: one port `get_by_id`, then one port `upsert`.
//! - The service keeps no state besides its port.

use crate::model::DomainModel;
use crate::repo::{CrudRepository, RepoResult};
use log::debug;
use std::marker::PhantomData;

/// Use-case service wrapping a data-access port for entity type `T`.
pub struct CrudService<T, R> {
    repo: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> CrudService<T, R>
where
    T: DomainModel,
    R: CrudRepository<T>,
{
    /// Creates a service over the provided port implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Borrows the underlying port.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Removes every stored entity of this kind.
    ///
    /// Intended for test fixtures and administrative resets.
    pub fn clear(&self) -> RepoResult<()> {
        debug!("event=crud_clear module=service entity={}", T::ENTITY_TYPE);
        self.repo.clear()
    }

    /// Returns all stored entities exactly as the port lists them.
    pub fn get_all(&self) -> RepoResult<Vec<T>> {
        debug!("event=crud_get_all module=service entity={}", T::ENTITY_TYPE);
        self.repo.get_all()
    }

    /// Returns the entity with `id`; a missing record is the port's `NotFound`.
    pub fn get_by_id(&self, id: &T::Id) -> RepoResult<T> {
        debug!(
            "event=crud_get_by_id module=service entity={} id={id}",
            T::ENTITY_TYPE
        );
        self.repo.get_by_id(id)
    }

    /// Creates `entity` when it has no identifier, otherwise updates it.
    ///
    /// # Contract
    /// - `id() == None`: delegates to port `upsert` only.
    /// - `id() == Some(id)`: checks existence with port `get_by_id(id)` first;
    ///   a `NotFound` there aborts before any write.
    /// - Returns the entity produced by port `upsert`.
    ///
    /// # Errors
    /// - Port errors, including `RepoError::Duplicate`, pass through unchanged.
    pub fn upsert(&self, entity: T) -> RepoResult<T> {
        match entity.id() {
            None => {
                debug!(
                    "event=crud_upsert module=service entity={} path=create",
                    T::ENTITY_TYPE
                );
                self.repo.upsert(entity)
            }
            Some(id) => {
                debug!(
                    "event=crud_upsert module=service entity={} path=update id={id}",
                    T::ENTITY_TYPE
                );
                self.repo.get_by_id(&id)?;
                self.repo.upsert(entity)
            }
        }
    }

    /// Deletes the entity with `id` without a prior existence check.
    pub fn delete(&self, id: &T::Id) -> RepoResult<()> {
        debug!(
            "event=crud_delete module=service entity={} id={id}",
            T::ENTITY_TYPE
        );
        self.repo.delete(id)
    }
}
