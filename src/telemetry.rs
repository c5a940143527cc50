use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Installs the `fmt` subscriber. Diagnostics go to stdout unless stdout is
/// reserved for machine-readable output. `RUST_LOG` overrides the default
/// `info` level; later calls are no-ops.
pub fn init(stdout_reserved: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    let _ = if stdout_reserved {
        builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        builder
            .with_ansi(std::io::stdout().is_terminal())
            .with_writer(std::io::stdout)
            .try_init()
    };
}
