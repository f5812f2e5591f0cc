//! MCP front end for the contact book.
//!
//! The contact lists live only in this process, so the server is the sole
//! owner of its repository: every tool call goes through the same
//! [`ContactBookMcpServer`] and nothing survives once the client disconnects.

pub mod handlers;

pub use handlers::ContactBookMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Serve `server` on stdin/stdout until the client closes the session.
///
/// Stdout carries protocol frames only; logging must go to stderr.
pub async fn run_server(server: ContactBookMcpServer) -> Result<()> {
    let running = server.serve(stdio()).await?;
    running.waiting().await?;
    tracing::debug!("MCP session ended");

    Ok(())
}
