//! Repository trait describing record storage adapters.

use thiserror::Error;

use crate::domain::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: u64 },
}

impl RepoError {
    pub fn not_found<T: Record>(id: u64) -> Self {
        Self::NotFound {
            entity: T::ENTITY,
            id,
        }
    }
}

/// Ordered collection of records with store-assigned identifiers.
///
/// Records are returned by value; callers never hold references into the
/// underlying sequence.
pub trait Repository<T: Record>: Send + Sync {
    /// Every stored record, in insertion order.
    fn get_all(&self) -> Vec<T>;

    fn get_by_id(&self, id: u64) -> Result<T, RepoError>;

    /// Append `record` under a freshly assigned id and return the stored copy.
    /// Any id already present on `record` is ignored.
    fn create(&self, record: T) -> T;

    /// Mutate the record with `id` in place. The id survives the mutation.
    fn update(&self, id: u64, apply: &mut dyn FnMut(&mut T)) -> Result<T, RepoError>;

    fn delete(&self, id: u64) -> Result<(), RepoError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
