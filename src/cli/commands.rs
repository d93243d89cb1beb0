//! CLI command implementations

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::cli::{error, format_compat, info, success, warn};
use crate::config::{self, loader::CONFIG_FILENAME, Config};

/// Initialize a new user-api.toml configuration file
pub async fn init(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_FILENAME));

    if config_path.exists() && !force {
        warn(&format!("{} already exists", config_path.display()));
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success(&format!("Created {}", config_path.display()));
    info("Edit the configuration file and run 'user-api serve' to start the API");

    Ok(())
}

/// Start the HTTP API server
pub async fn serve(path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = load_config(path)?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info(&format!("Starting server at http://{}:{}", host, port));

    if let Err(e) = crate::api::run_server(config, &host, port).await {
        error(&format!("Server stopped: {}", e));
        return Err(e.into());
    }
    Ok(())
}

/// Print the effective configuration
pub async fn show_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;

    println!("Server:");
    println!("  {}:{}", config.server.host, config.server.port);
    println!("  {} v{}", config.server.title, config.server.version);
    println!("  cors: {}", config.server.cors);
    println!("Auth:");
    println!("  protect_reads: {}", config.auth.protect_reads);
    println!("Compat:");
    println!(
        "  email check:  {}",
        format_compat(config.compat.legacy_email_check)
    );
    println!(
        "  session ttl:  {}",
        format_compat(config.compat.legacy_session_ttl)
    );
    println!(
        "  soft delete:  {}",
        format_compat(config.compat.legacy_soft_delete)
    );

    Ok(())
}

// Helper functions

fn load_config(path: Option<&Path>) -> Result<Config> {
    config::resolve_config(path).map_err(|e| anyhow::anyhow!("{}", e))
}
