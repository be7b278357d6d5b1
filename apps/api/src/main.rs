mod config;
mod errors;
mod listings;
mod render;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::listings::ListingFetcher;
use crate::routes::build_router;
use crate::skills::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting internmatch v{}", env!("CARGO_PKG_VERSION"));

    // Upload spool directory must exist before the first request
    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "failed to create upload directory {}",
            config.upload_dir.display()
        )
    })?;

    // Compile the skill vocabulary matcher
    let vocabulary = SkillVocabulary::new(&config.skill_vocabulary)?;
    info!(
        "Skill vocabulary loaded ({} terms)",
        config.skill_vocabulary.len()
    );

    // Initialize the internship-site fetcher
    let fetcher = ListingFetcher::new(config.internship_base_url.clone());
    info!("Listing fetcher targeting {}", config.internship_base_url);

    // Build app state
    let state = AppState {
        config: config.clone(),
        vocabulary,
        fetcher,
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
