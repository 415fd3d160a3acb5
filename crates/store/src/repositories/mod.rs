use async_trait::async_trait;
use thiserror::Error;

use clientele_core::Customer;

pub mod memory;

pub use memory::InMemoryCustomerRepository;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("filter `{0}` is not a valid customer filter")]
    UnsupportedFilter(String),
}

/// The authoritative owner of the customer collection.
///
/// Lookup and mutation follow insertion order with first-match-wins
/// resolution; duplicate ids are legal and only the earliest-inserted
/// duplicate is addressable. Not-found is an `Option`/`bool` result, never
/// an error: the only failable operation is `filter_by`, which rejects
/// field names outside the supported set.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Appends unconditionally; duplicate ids are not rejected.
    async fn create(&self, record: Customer);

    /// Snapshot of the full collection in insertion order.
    async fn list_all(&self) -> Vec<Customer>;

    /// First record whose id matches, scanning in insertion order.
    async fn find_by_id(&self, id: &str) -> Option<Customer>;

    /// Replaces the first record whose id matches the *lookup* id with
    /// `replacement` wholesale, every field included. Returns whether a
    /// record was replaced; on a miss the collection is untouched.
    async fn update_by_id(&self, id: &str, replacement: Customer) -> bool;

    /// Removes and returns the first record whose id matches. Relative
    /// order of the remaining records is preserved.
    async fn delete_by_id(&self, id: &str) -> Option<Customer>;

    /// Equality filter over one of the supported fields. An unknown field
    /// name is an explicit error, distinct from an empty match list.
    async fn filter_by(&self, field: &str, value: &str) -> Result<Vec<Customer>, StoreError>;
}
