//! Log setup. The terminal belongs to the UI, so events go to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::error::Result;

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
///
/// `RUST_LOG` takes precedence over the configured level. With no log file
/// configured, events are discarded.
pub fn init_tracing(config: &LoggingConfig, debug: bool) -> Result<WorkerGuard> {
    let level = if debug { "debug" } else { config.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},reqwest=warn,hyper=warn", level)));

    let (writer, guard) = match &config.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)?;
            let file_name = path.file_name().unwrap_or(path.as_os_str());
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
        }
        None => tracing_appender::non_blocking(std::io::sink()),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();

    tracing::info!("Tracing initialized at level {}", level);
    Ok(guard)
}
