use models::{Message, Task};
use service::{CollectionStore, SharedStore};

/// The two independent collections served by this process.
#[derive(Clone)]
pub struct ServerState {
    pub tasks: SharedStore<Task>,
    pub messages: SharedStore<Message>,
}

impl ServerState {
    /// Fresh, empty stores. Nothing is shared between the two.
    pub fn new() -> Self {
        Self {
            tasks: CollectionStore::shared("tasks"),
            messages: CollectionStore::shared("messages"),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
