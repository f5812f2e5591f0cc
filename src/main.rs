//! Contact Book MCP Server - Main entry point
//!
//! This is the main executable for the Contact Book MCP Server, which provides a
//! Model Context Protocol (MCP) interface to an in-memory contact book.

use anyhow::Result;
use contact_book_mcp_server::{Config, ContactBookMcpServer, InMemoryContactRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration is loaded before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = Box::new(InMemoryContactRepository::new());
    let server = ContactBookMcpServer::new(repository, config.server_name.clone());

    info!("Contact Book MCP Server initialized as {}", config.server_name);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    contact_book_mcp_server::server::run_server(server).await?;

    info!("Contact Book MCP Server shutdown complete");
    Ok(())
}
