use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The six-field travel guide produced by one analyze call.
///
/// Every field is defaulted on purpose: the model reply is parsed, not
/// validated, so a syntactically valid object with missing keys or short
/// arrays still reaches the client as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideResult {
    pub landmark_name: String,
    pub location: String,
    pub description: String,
    pub history: String,
    pub itinerary: Vec<String>,
    pub food: Vec<String>,
}

impl GuideResult {
    /// Subset the client holds between the analyze call and follow-up chat.
    pub fn context(&self) -> ChatContext {
        ChatContext {
            name: self.landmark_name.clone(),
            location: self.location.clone(),
            history: self.history.clone(),
        }
    }
}

/// Context resent with every chat question. The relay is stateless; the
/// client owns the conversation memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatContext {
    pub name: String,
    pub location: String,
    pub history: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatAnswer {
    pub answer: String,
}
