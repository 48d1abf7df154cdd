//! CRUD server with a concurrent dual-source lookup and idempotent replaces.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin fundamentals-server -- --port 8080
//! ```

use clap::Parser;
use fundamentals_server::Config;
use fundamentals_shared::logger::setup_logger;

fn main() {
    let config = Config::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Task-per-call lookups run on the blocking pool, so bound it explicitly
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(config.max_blocking_threads.max(1))
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    // Run the server
    if let Err(e) = runtime.block_on(fundamentals_server::run_server(config)) {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
