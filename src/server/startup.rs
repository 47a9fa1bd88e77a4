use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Install the global tracing subscriber at the configured level
pub fn init_logger(config: &Config) -> Result<(), Error> {
    dioxus_logger::init(config.log_level)?;

    Ok(())
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database, migrations applied");

    Ok(db)
}

/// Serve the API on the configured address until the process receives Ctrl+C
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = router::routes().with_state(AppState::from(db));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!(address = %config.bind_address, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, draining connections");
}
