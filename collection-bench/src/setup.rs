//! Tracing initialization.

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so that stdout carries nothing but the report; piping
/// the benchmark output (e.g. `collection-bench bench --output json | jq`)
/// never picks up log lines.
///
/// # RUST_LOG
///
/// The `RUST_LOG` env var is always respected. If unset, the default is
/// `warn,collection_bench=info`: build-phase progress from this binary,
/// warnings from everything else.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,collection_bench=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
