//! Flight Plan Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the flight
//! plan API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, fixtures for flight plan data, and factories that insert documents.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory flight plan values, no database access
//! - **factory**: Insert flight plan documents, valid or deliberately corrupt
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_flight_plan_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_flight_plan_tables()
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
pub mod fixture;
