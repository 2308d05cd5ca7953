use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use multilingual_translator::config::{Config, Environment};
use multilingual_translator::engine::{EngineFactory, EngineKind};
use multilingual_translator::i18n::LanguageRegistry;
use multilingual_translator::routes;
use multilingual_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    let http_level = match config.environment {
        Environment::Development => "debug",
        Environment::Production | Environment::Testing => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    format!("multilingual_translator={}", tracing_level(&config.log_level))
                        .parse()
                        .with_context(|| format!("LOG_LEVEL '{}' is invalid", config.log_level))?,
                )
                .add_directive(format!("tower_http={}", http_level).parse()?),
        )
        .init();

    let languages: Vec<&str> = LanguageRegistry::get()
        .list_all()
        .iter()
        .map(|lang| lang.code)
        .collect();

    info!(
        "Starting {} on {}:{} ({:?})",
        config.engine.service_name(),
        config.host,
        config.port,
        config.environment
    );
    info!("Supported languages: {:?}", languages);
    if config.engine == EngineKind::Dictionary {
        info!("Note: This is a demo version with mock translations");
    }
    if config.engine == EngineKind::Neural && config.hf_token.is_none() {
        warn!("HF_TOKEN not set, model provider requests are anonymous");
    }

    let engine = EngineFactory::create(&config)?;
    let addr = (config.host.clone(), config.port);
    let app = routes::create_router(AppState::new(config, engine));

    let listener = tokio::net::TcpListener::bind((addr.0.as_str(), addr.1))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", addr.0, addr.1))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Map Python-style level names onto the ones `tracing` understands.
fn tracing_level(level: &str) -> &str {
    match level {
        "warning" => "warn",
        "critical" | "fatal" => "error",
        other => other,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
