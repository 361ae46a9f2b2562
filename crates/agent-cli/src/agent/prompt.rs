//! Prompt template for the decision step

use crate::tools::registry::ToolRegistry;

/// Render the decision instruction for one request.
///
/// The tool list comes from the registry so the template stays true to what
/// the agent can actually execute.
pub fn build_prompt(registry: &ToolRegistry, request: &str) -> String {
    format!(
        r#"You are a helpful assistant that MUST respond with ONLY valid JSON.

You have access to this tool:
{tools}

EXAMPLES:

User: Please say hello to Bob
Response: {{"tool": "say_hello", "tool_input": "Bob"}}

User: What's the weather?
Response: {{"final_answer": "I apologize, but I don't have access to weather information."}}

RULES:
1. Respond with ONLY JSON
2. No explanations or extra text
3. Use EXACTLY one of these formats:
   {{"tool": "say_hello", "tool_input": "<name>"}}
   {{"final_answer": "<your response>"}}

Current request: {request}

JSON response:"#,
        tools = format_tool_list(registry),
        request = request
    )
}

fn format_tool_list(registry: &ToolRegistry) -> String {
    let mut lines: Vec<String> = registry
        .all_tools()
        .iter()
        .map(|t| format!("{}: {}", t.name(), t.description()))
        .collect();
    lines.sort();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::create_default_registry;

    #[test]
    fn test_prompt_lists_registered_tools() {
        let prompt = build_prompt(&create_default_registry(), "Please say hello to Alice");
        assert!(prompt.contains("say_hello: A tool that says hello to a name"));
    }

    #[test]
    fn test_prompt_carries_the_request() {
        let prompt = build_prompt(&create_default_registry(), "Please say hello to Alice");
        assert!(prompt.contains("Current request: Please say hello to Alice"));
    }

    #[test]
    fn test_prompt_ends_with_json_cue() {
        let prompt = build_prompt(&create_default_registry(), "anything");
        assert!(prompt.ends_with("JSON response:"));
    }

    #[test]
    fn test_prompt_shows_both_formats() {
        let prompt = build_prompt(&create_default_registry(), "anything");
        assert!(prompt.contains(r#"{"tool": "say_hello", "tool_input": "<name>"}"#));
        assert!(prompt.contains(r#"{"final_answer": "<your response>"}"#));
    }
}
