use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use matchtip::analysis::Analyzer;
use matchtip::api_football::ApiFootballClient;
use matchtip::config::AppConfig;
use matchtip::handlers::{self, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let addr = config.bind_addr();

    info!(
        "Using API-Football at {} (league: {:?}, season: {:?}, selection: {:?})",
        config.api.base_url, config.scope.league, config.scope.season, config.selection
    );

    if config.scope.is_empty() {
        warn!(
            "API_FOOTBALL_LEAGUE and API_FOOTBALL_SEASON are unset; \
             the statistics endpoint may reject unscoped requests"
        );
    }

    let client = ApiFootballClient::new(config.api.clone())
        .context("Failed to create API-Football client")?;

    let app_state = Arc::new(AppState {
        analyzer: Analyzer::from_config(Arc::new(client), &config),
    });

    info!("Starting matchtip server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(&addr)
    .with_context(|| format!("Failed to bind {}", addr))?
    .run()
    .await?;

    Ok(())
}
