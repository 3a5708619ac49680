use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Matriculation, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Matriculation)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite syntax. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for reservation operations.
    ///
    /// This convenience method adds the following tables in dependency
    /// order:
    /// - User
    /// - Matriculation
    /// - Student
    /// - Room
    /// - Reservation
    ///
    /// For tests involving payments, use `with_payment_tables()`.
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(User)
            .with_table(Matriculation)
            .with_table(Student)
            .with_table(Room)
            .with_table(Reservation)
    }

    /// Adds all tables required for payment operations.
    ///
    /// Equivalent to `with_reservation_tables()` followed by
    /// `with_table(Payment)`.
    pub fn with_payment_tables(self) -> Self {
        self.with_reservation_tables().with_table(Payment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with database and tables
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
