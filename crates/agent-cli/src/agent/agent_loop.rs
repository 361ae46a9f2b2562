//! Agent loop implementation

use anyhow::Result;
use tracing::{debug, error, info, instrument, warn};

use crate::agent::action::{extract_action, Action};
use crate::agent::backend::CompletionBackend;
use crate::agent::prompt::build_prompt;
use crate::agent::state::{AgentState, ChatMessage, Step};
use crate::tools::registry::ToolRegistry;

/// Reply used when the model response cannot be turned into an action
const DECISION_ERROR_REPLY: &str = "I encountered an error while processing your request.";
/// Reply used when the invocation is malformed or names an unknown tool
const UNKNOWN_TOOL_REPLY: &str = "I couldn't execute the tool properly.";
/// Reply used when the tool invocation carries no input
const MISSING_INPUT_REPLY: &str = "No name was provided to say hello to.";

/// The agent loop orchestrator.
///
/// Drives a single request through the transition table: a decision step
/// that may hand off to at most one tool step, then termination. Both steps
/// recover locally from every failure by appending a canned final answer.
pub struct AgentLoop<B: CompletionBackend> {
    backend: B,
    registry: ToolRegistry,
    model: String,
}

impl<B: CompletionBackend> AgentLoop<B> {
    /// Create a new agent loop
    pub fn new(backend: B, registry: ToolRegistry, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, tools = registry.len(), "Creating agent loop");
        Self {
            backend,
            registry,
            model,
        }
    }

    /// Run the agent on a single request
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn run(&self, request: &str) -> Result<AgentState> {
        info!(request_len = request.len(), "Starting agent run");
        let mut state = AgentState::new(request);

        loop {
            let next = match state.next {
                Step::Decision => self.decide(&mut state).await,
                Step::Tool => self.run_tool(&mut state).await,
                Step::Done => break,
            };
            state.next = next;
        }

        info!(messages = state.messages.len(), "Agent run completed");
        Ok(state)
    }

    /// Decision step: ask the model for the next action.
    ///
    /// The endpoint is untrusted and may fail or emit chatty, malformed
    /// output; every failure mode degrades to a canned final answer instead
    /// of propagating.
    async fn decide(&self, state: &mut AgentState) -> Step {
        let request = state.last_user_text().unwrap_or_default();
        let prompt = build_prompt(&self.registry, request);
        debug!(prompt = %prompt, "Prompt sent to model");

        let raw = match self.backend.complete(&self.model, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Model request failed");
                return self.finish_with(state, DECISION_ERROR_REPLY);
            }
        };
        debug!(response = %raw, "Raw model response");

        match extract_action(raw.trim()) {
            Ok(action) => {
                let next = match action {
                    Action::Tool { .. } => Step::Tool,
                    Action::Final { .. } => Step::Done,
                };
                state.add_message(ChatMessage::assistant(action.to_json()));
                next
            }
            Err(e) => {
                error!(error = %e, "Failed to parse model response");
                self.finish_with(state, DECISION_ERROR_REPLY)
            }
        }
    }

    /// Tool step: execute the tool named by the last decision.
    ///
    /// Always terminal; this agent performs at most one tool call per run.
    async fn run_tool(&self, state: &mut AgentState) -> Step {
        let reply = self.execute_last_invocation(state).await;
        self.finish_with(state, reply)
    }

    async fn execute_last_invocation(&self, state: &AgentState) -> String {
        let content = state.last_content().unwrap_or_default();
        let (name, input) = match serde_json::from_str::<Action>(content) {
            Ok(Action::Tool { tool, tool_input }) => (tool, tool_input),
            _ => {
                warn!("Last message is not a tool invocation");
                return UNKNOWN_TOOL_REPLY.to_string();
            }
        };

        let tool = match self.registry.get(&name) {
            Some(tool) => tool,
            None => {
                warn!(tool = %name, "Tool not found");
                return UNKNOWN_TOOL_REPLY.to_string();
            }
        };

        if input.is_empty() {
            warn!(tool = %name, "Tool invocation carries no input");
            return MISSING_INPUT_REPLY.to_string();
        }

        info!(tool = %name, "Executing tool");
        match tool.execute(&input).await {
            Ok(output) => output,
            Err(e) => {
                error!(tool = %name, error = %e, "Tool execution failed");
                format!("Error executing tool: {}", e)
            }
        }
    }

    fn finish_with(&self, state: &mut AgentState, reply: impl Into<String>) -> Step {
        state.add_message(ChatMessage::assistant(
            Action::final_answer(reply).to_json(),
        ));
        Step::Done
    }
}
