//! Shared CLI helpers — provider resolution, banner and reply printing.

use anyhow::{bail, Result};
use colored::Colorize;

use polychat_core::types::ProviderId;
use polychat_providers::GatewayError;

/// Turn the raw `PROVIDER` value into a [`ProviderId`].
///
/// Session mode is case-sensitive; single-shot mode is not.
pub fn resolve_provider(raw: Option<&str>, case_insensitive: bool) -> Result<ProviderId> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        bail!("PROVIDER must be openai | gemini | groq");
    };
    let provider = if case_insensitive {
        ProviderId::parse_case_insensitive(raw)?
    } else {
        raw.parse()?
    };
    Ok(provider)
}

/// Print the banner shown at REPL start.
pub fn print_banner(provider: ProviderId) {
    println!("{}", format!("🤖 CLI Chatbot ({provider})").cyan().bold());
    println!("{}", "Commands: /exit , /clear".dimmed());
    println!();
}

/// Print an assistant reply.
pub fn print_reply(text: &str) {
    println!("{} {text}", "Bot:".green().bold());
    println!();
}

/// Confirm a `/clear`.
pub fn print_cleared() {
    println!("🧹 Chat cleared");
    println!();
}

/// Marker shown before a failed exchange: configuration problems are
/// distinguished from vendor/transport failures.
pub fn error_marker(err: &GatewayError) -> &'static str {
    if err.is_config_error() {
        "⚠️  Config error:"
    } else {
        "❌ Error:"
    }
}

/// Print a failed exchange. The loop carries on afterwards.
pub fn print_error(err: &GatewayError) {
    eprintln!("{} {err}", error_marker(err).red().bold());
    eprintln!();
}

/// Print a "thinking" placeholder while the request is in flight.
pub fn print_thinking() {
    eprint!("{}", "⠿ thinking...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
