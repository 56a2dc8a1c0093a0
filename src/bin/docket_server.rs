//! Serves the task list API over HTTP.
//!
//! Usage:
//!
//! ```text
//! docket-server [--database-url URL] [--bind ADDR] [--pool-size N] [--log FILTER]
//! ```
//!
//! Each flag falls back to an environment variable: `DOCKET_DATABASE_URL`,
//! `DOCKET_BIND_ADDR`, `DOCKET_DB_POOL_SIZE` and `DOCKET_LOG`. `RUST_LOG`
//! overrides the log filter when set.

use clap::Parser;
use docket::{
    app::bootstrap,
    config::{
        DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILTER, DEFAULT_POOL_SIZE, Settings,
    },
    http::router,
    telemetry::init_tracing,
};
use eyre::WrapErr;

#[derive(Debug, Parser)]
#[command(name = "docket-server")]
#[command(version, about = "Task list service", long_about = None)]
struct Cli {
    /// Storage connection string.
    #[arg(long, env = "DOCKET_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    /// Address the HTTP listener binds to.
    #[arg(long = "bind", env = "DOCKET_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_address: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DOCKET_DB_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: u32,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long = "log", env = "DOCKET_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(
        &cli.database_url,
        &cli.bind_address,
        cli.pool_size,
        cli.log_filter,
    )
    .wrap_err("invalid configuration")?;

    init_tracing(&settings.log_filter).wrap_err("failed to initialise logging")?;

    let state = bootstrap(&settings).wrap_err("failed to open database")?;
    let listener = tokio::net::TcpListener::bind(settings.bind_address)
        .await
        .wrap_err_with(|| format!("failed to bind {}", settings.bind_address))?;
    let local_addr = listener.local_addr().wrap_err("failed to read listen address")?;
    tracing::info!(address = %local_addr, database = %settings.database_url, "docket-server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("http server failed")?;

    tracing::info!("docket-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
