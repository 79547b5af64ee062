//! Phonebook HTTP service binary.
//!
//! Wires the in-memory entry store, router, and hyper server together
//! with CLI configuration and Ctrl+C shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;

use phonebook_api::router::Router;
use phonebook_api::server::Server;
use phonebook_core::config::ServiceConfig;
use phonebook_core::store::MemoryStore;

/// Command-line arguments for the phonebook server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let config = Arc::new(ServiceConfig {
        request_timeout_ms: args.request_timeout_ms,
        ..Default::default()
    });

    let store = Arc::new(MemoryStore::with_capacity(config.initial_capacity));
    let router = Router::new(store, config);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;
    let server = Server::new(addr, router);

    println!("Starting phonebook server...");
    println!("  Host: {}", args.host);
    println!("  Port: {}", args.port);
    println!("  Request timeout: {} ms", args.request_timeout_ms);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    signal::ctrl_c().await.context("Failed to listen for ctrl_c")?;
    println!("\nShutting down server...");
    server_handle.abort();

    Ok(())
}
