use std::sync::Arc;

use async_trait::async_trait;
use models::{Record, RecordId};

/// Trait abstraction for one collection of records.
/// Implementations must keep ids unique, increasing and never reused,
/// and must list records in insertion order.
#[async_trait]
pub trait RecordStore<P>: Send + Sync {
    /// Snapshot of all live records in insertion order.
    async fn list(&self) -> Vec<Record<P>>;
    /// Assign the next id, append, and return the stored record.
    async fn create(&self, payload: P) -> Record<P>;
    /// Remove the record with `id`; returns whether one was removed.
    async fn delete(&self, id: RecordId) -> bool;
    /// Number of live records.
    async fn len(&self) -> usize;
}

/// Handle passed into the HTTP layer.
pub type SharedStore<P> = Arc<dyn RecordStore<P>>;
