// billy - bill-reminder chat assistant
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use billy::chat::{Orchestrator, Session};
use billy::cli::Repl;
use billy::config::load_config;
use billy::openrouter::Client;

#[derive(Parser)]
#[command(name = "billy", version, about = "Bill-reminder chat assistant for the terminal")]
struct Args {
    /// Model identifier sent to the completion endpoint
    #[arg(long)]
    model: Option<String>,

    /// Response style, 0.0 (precise) to 1.0 (creative)
    #[arg(long)]
    temperature: Option<f32>,

    /// Attempts per request when the response cannot be parsed (1-5)
    #[arg(long)]
    retries: Option<u32>,

    /// Config file path (default: ~/.billy/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable styling and paced output
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Load configuration, then apply flag overrides
    let mut settings = load_config(args.config.as_deref())?;
    if let Some(model) = args.model {
        settings.model = model;
    }
    if let Some(temperature) = args.temperature {
        settings.set_temperature(temperature)?;
    }
    if let Some(retries) = args.retries {
        settings.set_max_retries(retries)?;
    }

    let client = Client::new()?;
    let orchestrator = Orchestrator::new(client);
    let session = Session::new(settings);

    let mut repl = Repl::new(session, orchestrator, args.plain);
    repl.run().await?;

    Ok(())
}
