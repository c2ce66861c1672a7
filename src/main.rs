use tracing_subscriber::{fmt, EnvFilter};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    let api_url = std::env::var("PORTAL_API_URL")
        .unwrap_or_else(|_| tienda_portal::config::DEFAULT_API_URL.to_string());
    let state_dir = std::env::var("PORTAL_STATE_DIR")
        .unwrap_or_else(|_| tienda_portal::config::DEFAULT_STATE_DIR.to_string());
    info!(
        target: "portal",
        "Portal starting: RUST_LOG='{}', api_url={}, state_dir='{}'",
        rust_log, api_url, state_dir
    );

    tienda_portal::app::run().await
}
