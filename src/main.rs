#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use config::HostConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let port = config.port;
    match config.api_base_url.as_deref() {
        Some(url) => tracing::info!(api_url = url, "backend API configured"),
        None => tracing::warn!("JARVIS_API_URL not set, workflow and vision requests will fail"),
    }

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "jarvis listening");
    axum::serve(listener, app).await?;
    Ok(())
}
