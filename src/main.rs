use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dashboard_seeder::{config, http, seed};

/// Seeds the dashboard demo database
#[derive(Parser)]
#[command(name = "dashboard-seeder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve `GET /seed` over HTTP (default)
    Serve {
        /// Address to bind, overrides HOST
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the seed once and exit
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = config::init()?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Command::Seed => {
            let summary = seed::run_logged(&config)
                .await
                .context("seeding failed")?;
            info!(%summary, "{}", http::SUCCESS_MESSAGE);
            Ok(())
        }
    }
}

async fn serve(config: config::Config) -> Result<()> {
    let addr = config.bind_address();
    let app = http::router(http::AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dashboard_seeder=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
