//! Process entrypoint: config, pool, schema, router, listen loop.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use user_api::{app, ensure_users_table, AppState, Config, PgStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("user_api=info".parse()?))
        .init();

    let config = Config::load()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.db_source)
        .await?;
    ensure_users_table(&pool).await?;

    let state = AppState {
        querier: Arc::new(PgStore::new(pool)),
    };

    let listener = TcpListener::bind(&config.server_address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
