#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::path::Path;
use std::process::ExitCode;

use args::{Args, Command};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tubesum_client::{Outcome, SummarizerClient};
use tubesum_config::{Config, TelemetryConfig};
use tubesum_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Command::Serve { listen } => {
            let config = Config::load_or_default(&args.config)?;
            tubesum_telemetry::init(&config.telemetry, "info");
            serve(&config, listen).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Summarize {
            youtube_link,
            model,
            instructions,
            backend_url,
        } => {
            let (telemetry, load_error) = frontend_telemetry(&args.config);
            tubesum_telemetry::init(&telemetry, "warn");
            if let Some(e) = load_error {
                tracing::warn!(error = %e, "ignoring unusable config file, using default logging");
            }
            summarize(&backend_url, &youtube_link, &model, &instructions).await
        }
    }
}

/// Logging settings for the front end
///
/// The front end only needs the `telemetry` section, so a config file the
/// server would reject falls back to default logging instead of failing.
fn frontend_telemetry(path: &Path) -> (TelemetryConfig, Option<anyhow::Error>) {
    match Config::load_or_default(path) {
        Ok(config) => (config.telemetry, None),
        Err(e) => (TelemetryConfig::default(), Some(e)),
    }
}

async fn serve(config: &Config, listen: Option<std::net::SocketAddr>) -> anyhow::Result<()> {
    let mut server = Server::new(config);
    if let Some(listen) = listen {
        server = server.with_listen_address(listen);
    }

    tracing::info!(listen_address = %server.listen_address(), "starting tubesum");

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("tubesum stopped");
    Ok(())
}

/// Front end: submit the form and render the outcome
async fn summarize(backend_url: &str, youtube_link: &str, model: &str, instructions: &str) -> anyhow::Result<ExitCode> {
    let client = SummarizerClient::new(backend_url)?;

    if !youtube_link.trim().is_empty() {
        eprintln!("Requesting summary from backend ({model})... This may take a few minutes for longer videos.");
    }

    let code = match tubesum_client::submit(&client, youtube_link, model, instructions).await {
        Outcome::Summary(summary) => {
            println!("Summary\n\n{summary}");
            ExitCode::SUCCESS
        }
        Outcome::Warning(message) => {
            eprintln!("Warning: {message}");
            ExitCode::from(2)
        }
        Outcome::Error(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    };

    Ok(code)
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
