//! Campus Gate Test Utils
//!
//! Provides shared testing utilities for the verification bot. This crate offers a builder
//! for creating test contexts with in-memory SQLite databases and factories for seeding
//! registrations, invite edges and allow-list entries.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_registration_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_bot_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
