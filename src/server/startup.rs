use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::{Config, PoolConfig},
    error::AppError,
};

const DEFAULT_LOG_FILTER: &str = "info,sea_orm=warn,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the SeaORM connection options for the given pool tuning.
pub fn connect_options(database_url: &str, pool: &PoolConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url);
    opt.min_connections(pool.pool_size)
        .max_connections(pool.max_connections())
        .acquire_timeout(pool.pool_timeout)
        .max_lifetime(pool.pool_recycle)
        .test_before_acquire(pool.pre_ping)
        .sqlx_logging(pool.echo);

    opt
}

/// Connects to the database and makes sure the schema exists.
///
/// Establishes the connection pool using the connection string and pool tuning from
/// configuration, then creates the `Student` table if it is missing. This function must
/// complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool tuning
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool with the schema in place
/// - `Err(AppError)` - Failed to connect to the database or create the schema
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(connect_options(&config.database_url, &config.pool)).await?;

    ensure_schema(&db).await?;

    tracing::info!(
        backend = ?db.get_database_backend(),
        max_connections = config.pool.max_connections(),
        "Connected to database"
    );

    Ok(db)
}

/// Creates the `Student` table when it does not exist yet.
///
/// The statement is generated from the entity definition for whichever backend `db` is
/// connected to.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    let mut stmt = schema.create_table_from_entity(entity::prelude::Student);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}

/// Closes every pooled connection.
pub async fn close_database(db: DatabaseConnection) -> Result<(), AppError> {
    db.close().await?;

    tracing::info!("Database connection pool closed");

    Ok(())
}

/// Resolves once the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
