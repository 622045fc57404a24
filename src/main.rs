use mealdb_explorer::client::MealDbClient;
use mealdb_explorer::config::Config;
use mealdb_explorer::server::{test_catalog_access, RecipeExplorerServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Using recipe catalog at {} (random batch size {})",
        config.base_url,
        config.random_count
    );

    tracing::info!("Testing catalog access...");
    let probe = MealDbClient::from_config(&config);
    match test_catalog_access(&probe).await {
        Ok(_) => {
            tracing::info!("Catalog access test passed");
        }
        Err(e) => {
            tracing::warn!("Catalog access test failed: {}", e);
            tracing::warn!("Please verify:");
            tracing::warn!("  - MEALDB_BASE_URL is correct: {}", config.base_url);
            tracing::warn!("  - MEALDB_API_KEY is valid");
            tracing::warn!("The server will continue, but searches will report errors until the catalog is reachable.");
        }
    }

    let server_config = SseServerConfig {
        bind: config.bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Recipe explorer listening on {}", server_config.bind);

    let sse_server = SseServer::serve_with_config(server_config).await?;

    let ct = sse_server.with_service(move || RecipeExplorerServer::from_config(&config));

    tracing::info!("Recipe explorer started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
