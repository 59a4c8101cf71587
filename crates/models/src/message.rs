use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub user: String,
    pub content: String,
}

/// Create payload for `/messages`. Both fields are required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMessage {
    pub user: String,
    pub content: String,
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
}

impl From<NewMessage> for Message {
    fn from(input: NewMessage) -> Self {
        Self { user: input.user, content: input.content }
    }
}

impl Resource for Message {
    const NAME: &'static str = "messages";
    type Input = NewMessage;
}
