//! Shared testing utilities.
//!
//! Provides the building blocks for unit and integration tests: a builder
//! for in-memory SQLite test databases with selectable table schemas, a test
//! context holding the connection and an optional session, and factories
//! that insert entities with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
