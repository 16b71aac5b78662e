//! Backend contract for a record table.

use serde_json::{Map, Value};

use super::errors::StoreResult;
use super::schema::TableSchema;

/// One stored entity: a flat mapping of attribute names to JSON values
pub type Record = Map<String, Value>;

/// Durable storage and retrieval for one table.
///
/// Implementations are shared process-wide and must be safe for concurrent
/// use; every operation is a single-record call with no cross-record
/// consistency guarantee. Concurrent single-field updates on the same record
/// are last-write-wins.
pub trait RecordTable: Send + Sync {
    /// The schema this table was constructed with
    fn schema(&self) -> &TableSchema;

    /// Insert or overwrite a record keyed by its primary key value.
    ///
    /// The store itself checks no uniqueness precondition; overwrite
    /// semantics rely on server-side key generation.
    fn put(&self, record: Record) -> StoreResult<()>;

    /// Point lookup; zero or one records, returned as a sequence
    fn get_by_primary_key(&self, value: &str) -> StoreResult<Vec<Record>>;

    /// All records whose indexed attribute equals `value`.
    ///
    /// Fails with [`StoreError::InvalidIndex`](super::StoreError::InvalidIndex)
    /// if `index` was not declared for this table.
    fn get_by_secondary_key(&self, index: &str, value: &str) -> StoreResult<Vec<Record>>;

    /// Every record in the table.
    ///
    /// Backends that page reads aggregate the pages internally; callers
    /// always observe the full table.
    fn scan_all(&self) -> StoreResult<Vec<Record>>;

    /// Replace exactly one named field on the record under `primary_key`,
    /// creating the field if absent. Returns the new value of the field.
    ///
    /// The record must exist, and the primary key attribute itself cannot be
    /// the target.
    fn update_field(&self, primary_key: &str, field: &str, value: Value) -> StoreResult<Value>;

    /// Remove the record under `primary_key`; deleting an absent key is not
    /// an error.
    fn delete(&self, primary_key: &str) -> StoreResult<()>;
}
