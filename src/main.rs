//! Runs the Mergington High School activities API.
//!
//! Usage:
//!
//! ```text
//! mergington [--host 127.0.0.1] [--port 8000] [--static-dir static]
//!            [--catalog activities.json] [--capacity-policy enforce|ignore]
//! ```
//!
//! Every flag can also be supplied through its `MERGINGTON_*` environment
//! variable. `RUST_LOG` takes precedence over `--log-filter`.

use clap::Parser;
use mergington::{config::ServerConfig, server, telemetry};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init_tracing(&config.log_filter)?;
    if let Err(err) = server::run(config).await {
        tracing::error!(error = %err, "server failed");
        return Err(err.into());
    }
    Ok(())
}
