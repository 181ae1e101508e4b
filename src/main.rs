//! IPPIS Admin - Console Entry Point
//!
//! Usage: `ippis-admin [page] [--search q] [--page n] [--list]`

use anyhow::Context;
use clap::Parser;
use ippis_admin::app::{Application, PageRequest};
use ippis_admin::constants::LOG_FILE_PREFIX;
use ippis_admin::helpers::get_or_create_data_dir;
use ippis_admin::states::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Console logging to stderr, plus a daily log file when enabled.
/// `RUST_LOG` overrides the configured level.
fn init_tracing(config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = if config.log_to_file {
        let dir = get_or_create_data_dir().context("Failed to create log directory")?;
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .compact(),
        )
        .with(file_layer)
        .init();
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::try_load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let _guard = init_tracing(&config)?;
    match &loaded {
        Ok(_) => tracing::info!("Loaded config file"),
        Err(e) => tracing::warn!(error = %e, "Failed to load config, using defaults"),
    }

    let request = PageRequest::parse();
    tracing::info!("Starting IPPIS Admin...");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let app = Application::new(config);
    let output = runtime
        .block_on(app.render(&request))
        .context("Failed to render page")?;
    println!("{output}");
    Ok(())
}
