//! Built-in tools for the agent

mod say_hello;

pub use say_hello::SayHelloTool;

use super::registry::ToolRegistry;

/// Create a registry with all default tools
pub fn create_default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(SayHelloTool);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_say_hello() {
        let registry = create_default_registry();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("say_hello").is_some());
    }
}
