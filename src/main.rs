use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use trips::config::AppConfig;
use trips::db::{init_pool, run_migrations};
use trips::error::AppError;
use trips::routes::create_router;
use trips::services::trips::SqliteTripStore;
use trips::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    let db = init_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    let store = SqliteTripStore::new(db);
    let state = AppState::new(config.clone(), Arc::new(store));
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        "listening on {} (calendar offset {})",
        listener.local_addr()?,
        config.calendar_offset
    );
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,trips=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
