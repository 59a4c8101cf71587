use std::sync::Arc;

use async_trait::async_trait;
use models::{Record, RecordId};
use tokio::sync::Mutex;
use tracing::debug;

use crate::store::{RecordStore, SharedStore};

struct Inner<P> {
    records: Vec<Record<P>>,
    next_id: RecordId,
}

/// Generic in-memory ordered collection with auto-incrementing ids.
///
/// A single mutex guards both the record list and the id counter, so every
/// operation on one store is serialized while separate stores never contend.
/// The lock is held only to copy or mutate the list; callers encode the
/// returned records after it is released.
pub struct CollectionStore<P> {
    name: &'static str,
    inner: Mutex<Inner<P>>,
}

impl<P> CollectionStore<P>
where
    P: Clone + Send + Sync + 'static,
{
    /// Empty store whose first assigned id is `1`. `name` only labels log events.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner { records: Vec::new(), next_id: 1 }),
        }
    }

    /// Construct behind the `SharedStore` handle used by the HTTP layer.
    pub fn shared(name: &'static str) -> SharedStore<P> {
        Arc::new(Self::new(name))
    }

    /// Snapshot copy of all records in insertion order.
    pub async fn list(&self) -> Vec<Record<P>> {
        let inner = self.inner.lock().await;
        inner.records.clone()
    }

    /// Assign the current counter value, bump it, and append.
    pub async fn create(&self, payload: P) -> Record<P> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = Record::new(id, payload);
        inner.records.push(record.clone());
        drop(inner);
        debug!(collection = self.name, id, "record appended");
        record
    }

    /// Remove the first record carrying `id`. Remaining records keep their order
    /// and the counter is untouched, so ids are never reissued.
    pub async fn delete(&self, id: RecordId) -> bool {
        let mut inner = self.inner.lock().await;
        let removed = match inner.records.iter().position(|r| r.id == id) {
            Some(idx) => {
                inner.records.remove(idx);
                true
            }
            None => false,
        };
        drop(inner);
        debug!(collection = self.name, id, removed, "record delete");
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<P> RecordStore<P> for CollectionStore<P>
where
    P: Clone + Send + Sync + 'static,
{
    async fn list(&self) -> Vec<Record<P>> { self.list().await }
    async fn create(&self, payload: P) -> Record<P> { self.create(payload).await }
    async fn delete(&self, id: RecordId) -> bool { self.delete(id).await }
    async fn len(&self) -> usize { self.len().await }
}
