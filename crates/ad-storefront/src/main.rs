//! AutoDrive Market storefront: catalog, contact leads and the chat assistant
//! behind one REST server.

use std::sync::Arc;

use ad_assistant::catalog::sample_inventory;
use ad_assistant::CompletionClient;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ad_storefront::config::StorefrontConfig;
use ad_storefront::db;
use ad_storefront::routes;
use ad_storefront::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ad-storefront starting");

    let config = StorefrontConfig::load()?;

    // Connect to PostgreSQL if a database URL is configured, otherwise use in-memory state.
    let state = match &config.database_url {
        Some(database_url) => {
            tracing::info!("connecting to PostgreSQL");
            let pool = db::connect(database_url).await?;
            let seed = db::cars::count(&pool).await? == 0;
            let state = AppState::with_pool(pool);
            if seed {
                tracing::info!("cars table empty, seeding sample inventory");
                for car in sample_inventory() {
                    state.add_car(&car).await?;
                }
            }
            state
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory state with sample data");
            AppState::with_sample_data()
        }
    };

    let completion = CompletionClient::new(config.assistant.completion.clone())
        .context("building completion client")?;
    let completion_config = completion.config();
    if completion_config.credential().is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set, completion fallback will report a configuration error");
    }
    tracing::info!(
        mode = ?config.assistant.mode,
        model = %completion_config.model,
        endpoint = %completion_config.endpoint(),
        "chat assistant configured"
    );

    let state = state
        .with_mode(config.assistant.mode)
        .with_system_prompt(&completion_config.system_prompt)
        .with_completion(Arc::new(completion));

    let app = routes::build_router_with_origins(state, &config.cors_origins);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
