// src/logger.rs
//
// Process-wide log subscriber for the binary.
// The library itself only emits through the `log` facade.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber. stdout is reserved for RPC replies.
///
/// `RUST_LOG` takes precedence over the default filter.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "livestock_registry=debug"
    } else {
        "livestock_registry=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}
