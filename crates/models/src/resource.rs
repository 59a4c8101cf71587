use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::ModelError;

/// A payload type exposed as an HTTP collection.
pub trait Resource: Serialize + Clone + fmt::Debug + Send + Sync + 'static {
    /// Collection name, also the path segment (`/tasks`, `/messages`).
    const NAME: &'static str;

    /// Wire schema accepted on create. Converted into the stored payload.
    type Input: DeserializeOwned + Into<Self>;

    /// Decode a request body. Independent of the request `Content-Type`.
    ///
    /// Only a JSON object is accepted: derived struct visitors would also
    /// take a positional array such as `["a", false]`.
    fn decode(body: &[u8]) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(ModelError::NotAnObject(json_kind(&value)));
        }
        let input: Self::Input = serde_json::from_value(value)?;
        Ok(input.into())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
