//! hello-agent: single-shot tool-calling agent for local LLMs
//!
//! Wires an Ollama-served model to one tool (say_hello) through an explicit
//! decision step -> tool step control loop.

mod agent;
mod tools;

use anyhow::Result;
use clap::Parser;
use llm_core::{Config, OllamaClient, OllamaStatus};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use agent::AgentLoop;
use tools::builtin::create_default_registry;

/// Request used when none is given on the command line
const DEFAULT_REQUEST: &str = "Please say hello to Alice";

#[derive(Debug, Parser)]
#[command(name = "hello-agent")]
#[command(about = "Single-shot tool-calling agent for local LLMs", version)]
struct Cli {
    /// The request to handle (defaults to a sample greeting request)
    request: Vec<String>,

    /// Model to use (overrides agent.toml)
    #[arg(short, long)]
    model: Option<String>,

    /// Ollama base URL (overrides agent.toml)
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli).await {
        error!(error = ?e, "Run failed");
        println!("An error occurred: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::try_load().unwrap_or_else(Config::default_minimal);

    let model = cli.model.unwrap_or_else(|| config.model.name.clone());
    let base_url = cli.base_url.unwrap_or_else(|| config.ollama_url());

    let client = OllamaClient::new(base_url.clone());
    if client.status().await == OllamaStatus::Stopped {
        warn!(endpoint = %base_url, "Ollama does not appear to be running");
    }

    let request = if cli.request.is_empty() {
        DEFAULT_REQUEST.to_string()
    } else {
        cli.request.join(" ")
    };

    let agent = AgentLoop::new(client, create_default_registry(), model);
    let state = agent.run(&request).await?;

    println!("{}", state.final_reply().unwrap_or_default());

    Ok(())
}
