//! Somaleo CLI and REST API entry point.
//!
//! Binary name: `somaleo`
//!
//! Parses CLI arguments, initializes tracing and configuration, then
//! dispatches to the appropriate command handler or starts the API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing::{error, info};

use somaleo_infra::config::load_config;
use somaleo_observe::tracing_setup::{LogFormat, default_filter, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "somaleo", &mut std::io::stdout());
        return Ok(());
    }

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(default_filter(cli.verbose, cli.quiet), format, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Curriculum => {
            cli::curriculum::show_curriculum(cli.json)?;
        }

        Commands::Chat { session } => {
            let config = load_config(&cli.config).await;
            let state = AppState::init(config);
            cli::chat::run_chat(&state, session).await?;
        }

        Commands::Serve { port, host } => {
            let mut config = load_config(&cli.config).await;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let state = AppState::init(config);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            info!(%addr, agent_ready = state.tutor.is_ready(), "Somaleo API listening");
            if !cli.quiet {
                println!(
                    "  {} Somaleo API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            info!("Server stopped");
        }

        Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// If a handler cannot be installed, that signal source never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
