use crate::config::LoggingConfig;
use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sends `tracing` events to a daily file under `config.directory`.
///
/// `RUST_LOG` wins over `config.level`. The returned guard flushes the
/// background writer when dropped, so hold it until the process is done.
pub fn initialize_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(config.file_name.clone())
        .build(&config.directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    tracing::info!(directory = %config.directory, level = %config.level, "File logging ready");
    Ok(guard)
}
