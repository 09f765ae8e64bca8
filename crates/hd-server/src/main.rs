//! helpdesk binary.
//!
//! Runs the HTTP server with `--web`, otherwise an interactive console chat.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY` - key for the language model (non-FAQ questions)
//! - `OPENAI_MODEL`, `OPENAI_BASE_URL` - provider overrides
//! - `HELPDESK_HOST`, `HELPDESK_PORT`, `HELPDESK_FAQ_PATH` - server and data overrides
//! - `RUST_LOG` - tracing filter (default: "info,hd_=debug")

use clap::Parser;
use hd_core::HelpdeskConfig;
use hd_server::{app_with_state, repl, state::AppState};
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, about = "Customer-support chat backend with FAQ routing")]
struct Cli {
    /// Serve the HTTP API and web page instead of the console chat.
    #[arg(long)]
    web: bool,

    /// JSON config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    /// FAQ data file (JSON array of {question, answer}).
    #[arg(long, value_name = "PATH")]
    faq: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<HelpdeskConfig> {
        let mut config = match &self.config {
            Some(path) => HelpdeskConfig::from_file(path)?,
            None => HelpdeskConfig::default(),
        }
        .with_env()?;

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(faq) = &self.faq {
            config.faq.path = faq.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hd_=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let state = AppState::from_config(&config)?;

    if !cli.web {
        return Ok(repl::run(&state.chat, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?);
    }

    let bind_addr = config.bind_addr();
    tracing::info!("helpdesk server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                  - chat page");
    tracing::info!("  POST /api/chat          - send a message");
    tracing::info!("  POST /api/clear_session - reset a conversation");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}
