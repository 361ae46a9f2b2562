//! Structured actions decoded from model output

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A decision produced by the model: invoke a tool, or answer directly.
///
/// Variant order matters for untagged deserialization: an object carrying a
/// `tool` key is a tool invocation even when other keys are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    Tool {
        tool: String,
        #[serde(default)]
        tool_input: String,
    },
    Final {
        final_answer: String,
    },
}

impl Action {
    pub fn final_answer(text: impl Into<String>) -> Self {
        Action::Final {
            final_answer: text.into(),
        }
    }

    /// Canonical JSON encoding, as appended to the conversation
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Extract the action from raw model output.
///
/// The endpoint is chatty and may wrap the JSON object in prose, so take the
/// substring from the first `{` to the last `}` and parse that. Objects that
/// match neither action variant are rejected here, in one place.
pub fn extract_action(raw: &str) -> Result<Action> {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            let candidate = &raw[start..=end];
            serde_json::from_str(candidate)
                .with_context(|| format!("response is not a recognized action: {}", candidate))
        }
        _ => bail!("no JSON object found in response"),
    }
}
