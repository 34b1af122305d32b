// Copyright (C) 2020-2026 Andy Kurnia.

// Logs go to stderr so that stdout stays clean for boards and results.
// RUST_LOG overrides the default level.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
