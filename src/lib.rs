pub mod agent;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
pub mod models;
pub mod sanitizer;
pub mod server;

use agent::InterpreterAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.bind_addr());
    info!("Environment: {}", args.app_env);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("Temperature: {}", args.temperature);
    info!("Max Tokens: {}", args.max_tokens);
    info!("API Key: {}", if args.groq_api_key.is_empty() { "not set" } else { "set" });
    info!(
        "System Prompt: {}",
        args.system_prompt_path.as_deref().unwrap_or("built-in")
    );
    info!("Max Body Bytes: {}", args.max_body_bytes);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let agent = Arc::new(InterpreterAgent::from_args(&args)?);
    let server = Server::new(agent, args);
    server.run().await?;

    Ok(())
}
