use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the global subscriber: daily-rolling file under ./logs plus a
/// stdout layer, filtered via RUST_LOG. Keep the returned guard alive for the
/// lifetime of the process or buffered log lines are dropped.
pub fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily("./logs", "log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout);

    // No ANSI in the file layer, control characters do not belong in files.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
