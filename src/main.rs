use anyhow::{Context, Result};
use bgg_users::core::config::Config;
use bgg_users::core::tracing_init::init_tracing;
use bgg_users::{TracingSink, UserAssembler};
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'. \
            Copy config.example.toml to config.toml and adjust the values.",
            config_path.display()
        ))?;

    init_tracing(&config.logging);

    info!(
        config_path = %config_path.display(),
        document = %config.input.document.display(),
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Loading user document"
    );

    let content = std::fs::read_to_string(&config.input.document)
        .context(format!(
            "Failed to read user document: {}",
            config.input.document.display()
        ))?;

    let document: Value = serde_json::from_str(&content)
        .context("Failed to parse user document as JSON")?;

    let user = UserAssembler::from_document(&document)
        .context("Failed to assemble user from document")?;

    let summary = format!("{:#}", user);
    info!(
        user = %summary,
        buddies = user.total_buddies(),
        guilds = user.total_guilds(),
        "User assembled"
    );

    user.dump(&mut TracingSink);

    Ok(())
}
