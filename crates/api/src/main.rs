use anyhow::Context;
use axum::Router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = enigma_api::ServerConfig::from_env().context("invalid configuration")?;
    enigma_observability::init(config.log());

    let app = enigma_api::app::build_app(&config, Router::new());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
