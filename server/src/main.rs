mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    if !config.site_dir.join("index.html").is_file() {
        tracing::warn!(site_dir = %config.site_dir.display(), "index.html not found; build the client with trunk first");
    }

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(addr = %config.addr(), site_dir = %config.site_dir.display(), "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
