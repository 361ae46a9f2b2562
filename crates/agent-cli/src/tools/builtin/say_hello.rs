//! Greeting tool

use anyhow::Result;
use async_trait::async_trait;

use crate::tools::Tool;

/// Says hello to the provided name
pub struct SayHelloTool;

#[async_trait]
impl Tool for SayHelloTool {
    fn name(&self) -> &str {
        "say_hello"
    }

    fn description(&self) -> &str {
        "A tool that says hello to a name"
    }

    async fn execute(&self, input: &str) -> Result<String> {
        Ok(format!("Hello, {}!", input))
    }
}
