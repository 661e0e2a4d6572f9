//! In-memory repository backed by an ordered `Vec`.

use std::sync::RwLock;

use tracing::debug;

use crate::application::repos::{RepoError, Repository};
use crate::domain::record::Record;

use super::lock::{rw_read, rw_write};

const SOURCE: &str = "infra::memory";

struct Sequence<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Sequence<T> {
    fn position(&self, id: u64) -> Result<usize, RepoError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| RepoError::not_found::<T>(id))
    }
}

/// Unbounded, insertion-ordered record store.
///
/// Identifiers start at 1 and are never handed out twice, even after the
/// record holding one is deleted.
pub struct MemoryRepository<T> {
    inner: RwLock<Sequence<T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Sequence {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for MemoryRepository<T> {
    fn get_all(&self) -> Vec<T> {
        rw_read(&self.inner, SOURCE, "get_all").records.clone()
    }

    fn get_by_id(&self, id: u64) -> Result<T, RepoError> {
        let guard = rw_read(&self.inner, SOURCE, "get_by_id");
        let index = guard.position(id)?;
        Ok(guard.records[index].clone())
    }

    fn create(&self, record: T) -> T {
        let mut guard = rw_write(&self.inner, SOURCE, "create");
        let id = guard.next_id;
        guard.next_id += 1;

        let stored = record.with_id(id);
        guard.records.push(stored.clone());
        debug!(entity = T::ENTITY, id, len = guard.records.len(), "record appended");
        stored
    }

    fn update(&self, id: u64, apply: &mut dyn FnMut(&mut T)) -> Result<T, RepoError> {
        let mut guard = rw_write(&self.inner, SOURCE, "update");
        let index = guard.position(id)?;

        let record = &mut guard.records[index];
        apply(record);
        if record.id() != id {
            *record = record.clone().with_id(id);
        }
        Ok(record.clone())
    }

    fn delete(&self, id: u64) -> Result<(), RepoError> {
        let mut guard = rw_write(&self.inner, SOURCE, "delete");
        let index = guard.position(id)?;
        guard.records.remove(index);
        debug!(entity = T::ENTITY, id, len = guard.records.len(), "record removed");
        Ok(())
    }

    fn len(&self) -> usize {
        rw_read(&self.inner, SOURCE, "len").records.len()
    }
}
