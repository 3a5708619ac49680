use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context containing the database connection and test environment
/// setup.
///
/// Provides an in-memory SQLite database connection and an optional session
/// for isolated unit and integration testing. Both are created lazily on
/// first access and persist for the lifetime of the test context.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, created lazily by
    /// `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session instance for middleware tests, created lazily by `session()`
    /// over the same database.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call this initializes the database connection if needed,
    /// migrates the session store table and creates a fresh session backed
    /// by it. Subsequent calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize the store
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Convenience for tests that need both without fighting the borrow
    /// checker over two separate lazy initializations.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
