//! `polychat status` — show configuration and provider status.

use anyhow::Result;
use colored::Colorize;

use polychat_core::config::{get_config_path, Config, CredentialStore};
use polychat_core::types::ProviderId;
use polychat_providers::registry::PROVIDERS;

/// Run the status command.
pub fn run(config: &Config) -> Result<()> {
    let config_path = get_config_path();

    println!();
    println!("{}", "🤖 Polychat Status".cyan().bold());
    println!();

    // Config
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Selected provider
    let selected = match config.provider.as_deref() {
        None => "(PROVIDER not set)".red().to_string(),
        Some(raw) => match raw.parse::<ProviderId>() {
            Ok(id) => id.to_string().green().to_string(),
            Err(e) => e.to_string().red().to_string(),
        },
    };
    println!("  {:<18} {}", "Provider:".bold(), selected);

    // Providers
    println!();
    println!("  {}", "Providers:".bold());
    for spec in PROVIDERS {
        let key = if config.api_key(spec.id).is_some() {
            format!("{} (key set)", "✓".green())
        } else {
            format!("{}", format!("· {} not set", spec.id.env_key()).dimmed())
        };
        let endpoint = spec.endpoint(config.providers.get(spec.id).api_base.as_deref());
        println!(
            "    {:<10} {:<24} {}",
            spec.display_name,
            spec.model.dimmed(),
            key
        );
        println!("    {:<10} {}", "", endpoint.dimmed());
    }

    println!();

    Ok(())
}
