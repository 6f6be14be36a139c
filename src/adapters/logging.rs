use tracing_subscriber::{fmt, EnvFilter};

/// Initializes structured logging to stderr: `RUST_LOG` (falling back to
/// "info"), compact formatting, no target/thread/file noise. This binary's
/// CLI modes print machine-readable results to stdout (spec.md §4.H), so
/// logging must never share that stream — the same split the pack's
/// `icann-rdap-cli` uses (`tracing_subscriber::fmt().with_writer(std::io::stderr)`)
/// for a CLI with its own stdout contract.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
