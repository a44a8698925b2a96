use serde::{Deserialize, Serialize};

/// Body of the greeting endpoint: `{ "message": "<string>" }`.
///
/// Other fields are ignored. An absent `message` is `None`, which the view
/// treats the same as not having a response at all.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingPayload {
    #[serde(default)]
    pub message: Option<String>,
}
