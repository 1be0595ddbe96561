use api::{app, seed::seed_demo_data, state::MemoryServices};
use db::Store;
use std::{net::SocketAddr, sync::Arc};
use tracing_appender::rolling;
use util::config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file());

    // Set up collaborators
    let services = MemoryServices::new(Arc::new(Store::new()));
    if config::seed_demo_data() {
        seed_demo_data(&services).await?;
    }

    let app = app(services.app_state());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config::host(), config::port()).parse()?;

    tracing::info!(
        env = %config::env(),
        prefix = %config::api_prefix(),
        version = %config::api_version(),
        "Starting {} on http://{}",
        config::project_name(),
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter = EnvFilter::try_new(config::log_level())
        .unwrap_or_else(|_| EnvFilter::new("api=info,services=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
