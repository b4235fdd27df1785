//! Polychat CLI — entry point.
//!
//! # Commands
//!
//! - `polychat [chat]` — interactive session with the backend named by `PROVIDER`
//! - `polychat hello` — single greeting exchange, JSON on stdout
//! - `polychat status` — show configuration and credential status

mod chat;
mod hello;
mod helpers;
mod repl;
mod status;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use polychat_core::config::{load_config, Config};
use polychat_providers::Gateway;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 🤖 Polychat — chat with OpenAI, Gemini or Groq from the terminal
#[derive(Parser)]
#[command(name = "polychat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (default)
    Chat {
        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Send one greeting and print the reply as JSON
    Hello {
        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and provider status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Chat { logs: false }) {
        Commands::Chat { logs } => {
            init_logging(logs);
            run_chat(load_config(None)).await
        }
        Commands::Hello { logs } => {
            init_logging(logs);
            hello::run(&load_config(None)).await
        }
        Commands::Status => status::run(&load_config(None)),
    }
}

// ─────────────────────────────────────────────
// Chat command
// ─────────────────────────────────────────────

async fn run_chat(config: Config) -> Result<()> {
    // Session mode matches PROVIDER exactly.
    let provider = helpers::resolve_provider(config.provider.as_deref(), false)?;
    info!(provider = %provider, "starting chat session");

    let gateway = Gateway::from_config(&config).context("failed to build HTTP client")?;
    repl::run(&gateway.bind(provider), &config.system_prompt).await
}

/// Initialize tracing/logging. Output goes to stderr so stdout stays clean.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("polychat=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
