//! stdout + log file subscriber, scoped to a [`LoggingGuard`].

use std::path::Path;

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Result;

/// Keeps the logging context alive. Dropping it uninstalls the subscriber
/// and flushes the file writer.
pub struct LoggingGuard {
    _default: DefaultGuard,
    _file: WorkerGuard,
}

/// `[    INFO]:  message`, no timestamp or target.
struct LevelPrefix;

impl<S, N> FormatEvent<S, N> for LevelPrefix
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = event.metadata().level().to_string();
        write!(writer, "[{:>8}]:  ", level)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Builds the stdout + file subscriber and makes it the current default.
///
/// Level filtering comes from `RUST_LOG`, falling back to `info`.
pub fn init_logging(log_file: impl AsRef<Path>) -> Result<LoggingGuard> {
    let log_file = log_file.as_ref();
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let file_name = log_file
        .file_name()
        .unwrap_or(log_file.as_os_str())
        .to_string_lossy()
        .into_owned();

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(std::io::Error::other)?;
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .event_format(LevelPrefix)
        .with_filter(env_filter());

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .event_format(LevelPrefix)
        .with_filter(env_filter());

    let default_guard = tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .set_default();

    Ok(LoggingGuard {
        _default: default_guard,
        _file: file_guard,
    })
}
