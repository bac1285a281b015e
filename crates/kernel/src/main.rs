//! Hackerspace Kernel
//!
//! HTTP server for the site's JSON API and page fragments, plus a block
//! rendering command for checking content offline.

use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hackerspace_kernel::content::{RenderOptions, render_content_blocks_with};
use hackerspace_kernel::{AppState, Config, routes};

#[derive(Debug, Parser)]
#[command(name = "hackerspace", version, about = "Hackerspace site kernel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Render a block collection to markup.
    ///
    /// The input is a serialized block array or plain text, read from PATH
    /// or from stdin.
    Render {
        path: Option<PathBuf>,
        /// Clean text and escape media references.
        #[arg(long)]
        sanitize: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Render { path, sanitize } => render(path, sanitize),
    }
}

async fn serve() -> Result<()> {
    init_tracing();

    info!("Starting hackerspace kernel");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        port = config.port,
        api_base_url = %config.api_base_url,
        sanitize_blocks = config.sanitize_blocks,
        "Configuration loaded"
    );

    let state = AppState::new(&config).context("failed to initialize application state")?;
    let app = routes::app(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn render(path: Option<PathBuf>, sanitize: bool) -> Result<()> {
    let input = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    println!("{}", render_markup(&input, sanitize));
    Ok(())
}

/// Render command input to markup.
///
/// Only the final line ending (as left by editors and `echo`) is dropped, so
/// other whitespace in a plain-text body reaches the output unchanged.
fn render_markup(input: &str, sanitize: bool) -> String {
    let input = input
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(input);
    let options = if sanitize {
        RenderOptions::sanitized()
    } else {
        RenderOptions::verbatim()
    };
    render_content_blocks_with(input, options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
