use serde::{Deserialize, Serialize};

/// Store-assigned identifier. The first id issued by a collection is `1`.
pub type RecordId = u64;

/// A stored item: identifier plus payload, serialized flat as
/// `{"id": 1, ...payload fields}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<P> {
    pub id: RecordId,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Record<P> {
    pub fn new(id: RecordId, payload: P) -> Self {
        Self { id, payload }
    }
}
