use std::sync::Arc;

use currencybot_backend::config::AppConfig;
use currencybot_backend::routes;
use currencybot_backend::services::currency::CurrencyTable;
use currencybot_backend::services::inflection::RussianInflector;
use currencybot_backend::services::rate_provider::CurrencyLayerClient;
use currencybot_backend::state::AppState;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let rates = CurrencyLayerClient::new(&config.rate_service_url, &config.access_key)?;
    let state = Arc::new(AppState::new(
        CurrencyTable::defaults(),
        Arc::new(rates),
        Arc::new(RussianInflector::new()),
    ));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("currency bot listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
