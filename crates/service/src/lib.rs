//! Service layer holding the in-memory record collections.
//! - `store` defines the `RecordStore` abstraction the HTTP layer talks to.
//! - `storage` contains the lock-guarded `CollectionStore` implementation.

pub mod store;
pub mod storage;

pub use storage::collection_store::CollectionStore;
pub use store::{RecordStore, SharedStore};
