use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use dysrisk::{create_router, ApiState, AssessmentService, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Optional config file path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("loading configuration")?;

    dysrisk::logging::init(&config.logging);

    let addr = config.socket_addr()?;
    let service = Arc::new(AssessmentService::new(config)?);
    let app = create_router(ApiState { service });

    info!("🚀 Starting dysrisk assessment service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
