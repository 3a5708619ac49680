use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions live in a dedicated table of the same SQLite database and expire
/// after seven days of inactivity. The session cookie issued by this layer is
/// the caller's bearer credential.
///
/// # Arguments
/// - `db` - Connected application database
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be applied to the router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}
