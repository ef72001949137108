//! Site Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the site
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting sites and groups with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for sites, groups and their associations
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_site_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_registry_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let group = factory::group::create_group(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
