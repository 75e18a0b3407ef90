mod config;
mod error;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "folio failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Fail fast: the page would otherwise render only an error notice.
    let content = client::content::embedded().map_err(|e| StartupError::Content(e.to_string()))?;
    tracing::info!(
        projects = content.projects.len(),
        skills = content.skills.len(),
        timeline = content.timeline.len(),
        "portfolio content loaded"
    );

    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
