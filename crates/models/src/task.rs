use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

/// Create payload for `/tasks`.
///
/// `done` defaults to `false` but a client `true` is kept. A client `id`
/// is tolerated and discarded; the store always assigns its own.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTask {
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
}

impl From<NewTask> for Task {
    fn from(input: NewTask) -> Self {
        Self { text: input.text, done: input.done }
    }
}

impl Resource for Task {
    const NAME: &'static str = "tasks";
    type Input = NewTask;
}
