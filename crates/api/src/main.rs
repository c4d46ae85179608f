use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memberhub_api::app::build_router;
use memberhub_api::gql::build_schema;
use memberhub_api::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let pool = infra::db::connect(&config.database_url, config.max_connections).await?;
    tracing::info!(
        "Connected to Postgres with max {} connections",
        config.max_connections
    );

    if config.skip_migrations {
        tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
    } else {
        infra::db::run_migrations(&pool).await?;
    }

    let state = AppState::new(pool);
    let schema = build_schema(config.introspection);
    let app = build_router(state, schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
