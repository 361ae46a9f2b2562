//! Agent conversation state

use crate::agent::action::Action;

/// Message author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Control state of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ask the model for the next action
    Decision,
    /// Execute the tool named by the last decision
    Tool,
    /// The run is finished
    Done,
}

/// State of the agent during one run.
///
/// Invariant: after each step, the last message is the most recent decision,
/// encoded as JSON text conforming to one of the two [`Action`] variants.
#[derive(Debug)]
pub struct AgentState {
    /// Message history, newest last
    pub messages: Vec<ChatMessage>,
    /// Next step to execute
    pub next: Step,
}

impl AgentState {
    /// Create the state for a fresh run on one user request
    pub fn new(request: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(request)],
            next: Step::Decision,
        }
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Text of the most recent user message
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    /// Content of the most recent message
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }

    /// Extract the user-facing reply from the last message.
    ///
    /// Falls back to the raw message text when it is not a well-formed final
    /// answer.
    pub fn final_reply(&self) -> Option<String> {
        let last = self.messages.last()?;
        match serde_json::from_str::<Action>(&last.content) {
            Ok(Action::Final { final_answer }) => Some(final_answer),
            _ => Some(last.content.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_decision() {
        let state = AgentState::new("Please say hello to Alice");
        assert_eq!(state.next, Step::Decision);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.last_user_text(), Some("Please say hello to Alice"));
    }

    #[test]
    fn test_last_user_text_skips_assistant_messages() {
        let mut state = AgentState::new("first");
        state.add_message(ChatMessage::assistant("{\"final_answer\": \"hi\"}"));
        assert_eq!(state.last_user_text(), Some("first"));
    }

    #[test]
    fn test_final_reply_extracts_final_answer() {
        let mut state = AgentState::new("req");
        state.add_message(ChatMessage::assistant("{\"final_answer\": \"Hello, Bob!\"}"));
        assert_eq!(state.final_reply().unwrap(), "Hello, Bob!");
    }

    #[test]
    fn test_final_reply_falls_back_to_raw_text() {
        let mut state = AgentState::new("req");
        state.add_message(ChatMessage::assistant("not json at all"));
        assert_eq!(state.final_reply().unwrap(), "not json at all");
    }
}
