//! HTTP server: connects to PostgreSQL, ensures the `products` table, serves the API.

use products_api::{app, connect_db, ensure_schema, init_tracing, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let Some(pool) = connect_db(&config).await else {
        std::process::exit(1);
    };
    ensure_schema(&pool).await?;

    let router = app(AppState::postgres(pool), config.body_limit);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("REST API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
