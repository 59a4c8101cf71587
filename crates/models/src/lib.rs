//! Typed record schemas shared by the store and HTTP layers.
//! - `Record<P>` pairs a store-assigned id with a resource payload.
//! - `Resource` binds a payload to its path name and input schema.

pub mod errors;
pub mod record;
pub mod resource;
pub mod task;
pub mod message;

pub use errors::ModelError;
pub use message::{Message, NewMessage};
pub use record::{Record, RecordId};
pub use resource::Resource;
pub use task::{NewTask, Task};
