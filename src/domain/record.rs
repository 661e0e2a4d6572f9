//! Capability shared by every stored record.

/// A fixed-shape record that can live in an in-memory repository.
///
/// Storage assigns identifiers, so a record only needs to report its id and
/// accept a new one.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in logs and `not found` errors.
    const ENTITY: &'static str;

    fn id(&self) -> u64;

    fn with_id(self, id: u64) -> Self;
}
