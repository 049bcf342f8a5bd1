pub mod paths;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Used when `RUST_LOG` is unset. Covers every workspace crate so storage
/// recovery warnings reach the terminal.
const DEFAULT_DIRECTIVES: &str =
    "miao_ledger=info,miao_core=info,miao_storage_json=info,miao_config=info";

/// Initializes the global tracing subscriber. Output goes to stderr so it
/// never interleaves with rendered screens on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
