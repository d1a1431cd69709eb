mod api;
mod cli;
mod config;
mod error;
mod oracle;
mod poller;
mod server;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use api::StatusClient;
use cli::{Cli, Command};
use config::TranswatchConfig;
use oracle::JobOracle;
use poller::{ClientConfig, TranslationPoller};
use ui::WaitProgress;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TranswatchConfig::load()?;
    let max_retries = cli.max_retries;

    match cli.command {
        Command::Serve {
            addr,
            completion_time_ms,
            error_probability,
        } => {
            let completion =
                Duration::from_millis(completion_time_ms.unwrap_or(config.completion_time_ms));
            let probability = error_probability.unwrap_or(config.error_probability);
            let oracle = Arc::new(JobOracle::new(completion, probability));
            server::serve(addr, oracle).await
        }
        Command::Wait {
            base_url,
            timeout_ms,
        } => {
            let client_config = client_config_from(&config, max_retries, timeout_ms);
            wait(StatusClient::new(base_url), client_config).await
        }
        Command::Demo => {
            // In-process server on an ephemeral port, then wait on it.
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
            let addr = listener.local_addr()?;
            let oracle = Arc::new(JobOracle::new(
                Duration::from_millis(config.completion_time_ms),
                config.error_probability,
            ));
            let router = server::build_router(oracle);
            tokio::spawn(async move {
                if let Err(err) = axum::serve(listener, router).await {
                    tracing::error!("demo server exited: {err}");
                }
            });

            let client_config = client_config_from(&config, max_retries, None);
            wait(StatusClient::new(format!("http://{addr}")), client_config).await
        }
    }
}

/// Run the polling client with the terminal progress UI attached.
async fn wait(client: StatusClient, config: ClientConfig) -> Result<()> {
    let progress = WaitProgress::start();
    let observer = progress.clone();
    let mut poller =
        TranslationPoller::new(client, config).with_observer(move |status| observer.observe(status));

    let result = poller.wait_for_completion().await;
    progress.complete(&result);

    let status = result?;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

/// File-backed client config with CLI overrides applied on top.
fn client_config_from(
    config: &TranswatchConfig,
    max_retries: Option<u32>,
    timeout_ms: Option<u64>,
) -> ClientConfig {
    let mut client_config = config.client_config();
    if let Some(max_retries) = max_retries {
        client_config.max_retries = max_retries;
    }
    if let Some(timeout_ms) = timeout_ms {
        client_config.timeout = Duration::from_millis(timeout_ms);
    }
    client_config
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
