//! Tool framework for agent execution

pub mod builtin;
pub mod registry;

use anyhow::Result;
use async_trait::async_trait;

/// The Tool trait that all tools must implement
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name
    fn name(&self) -> &str;

    /// Get a description of what the tool does
    fn description(&self) -> &str;

    /// Execute the tool with the given input
    async fn execute(&self, input: &str) -> Result<String>;
}
