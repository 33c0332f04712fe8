//! Tracing subscriber setup
//!
//! Logs go to stderr through a non-blocking writer so they never interleave
//! with the report lines printed on stdout.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the `debug` flag. The returned guard
/// flushes buffered log lines when dropped, so keep it alive until exit.
pub fn init(debug: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_target(false))
        .with(filter)
        .init();

    guard
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "toolchain_check=debug"
    } else {
        "toolchain_check=warn"
    }
}
