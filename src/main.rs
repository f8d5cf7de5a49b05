use club_hub_api::{app, config::Config, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment, RUST_LOG included
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Club Hub server...");

    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;

    tracing::info!("Database initialized at {}", config.database_url);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(pool)).await?;

    Ok(())
}
