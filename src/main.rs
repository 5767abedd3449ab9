use std::sync::Arc;

use cf_coach::{
    api::{create_router, AppState},
    catalog::ProblemCatalog,
    config::Config,
    services::CodeforcesProvider,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;

    // Loaded once; read-only for the life of the process
    let catalog = ProblemCatalog::from_path(&config.catalog_path)?;
    let provider = CodeforcesProvider::new(config.codeforces_api_url.clone());
    let state = AppState::new(Arc::new(provider), catalog);

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
