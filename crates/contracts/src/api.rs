use serde::{Deserialize, Serialize};

/// Shown in place of an answer when a 2xx response carries neither
/// recognized answer field.
pub const NO_CONTENT_FALLBACK: &str = "No response content received.";

/// Body of POST /ask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Answer payload of POST /ask. Deployed backends have used both field
/// names; either (or both, or neither) may be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl AskResponse {
    /// Extract the answer text: `answer` wins over `response`, and a body
    /// with neither degrades to a fixed placeholder instead of an error.
    pub fn into_answer(self) -> String {
        self.answer
            .or(self.response)
            .unwrap_or_else(|| NO_CONTENT_FALLBACK.to_string())
    }
}
