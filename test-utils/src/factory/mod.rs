//! Factory methods for creating test data.
//!
//! Factories insert flight plan rows with sensible defaults, reducing boilerplate in
//! tests. They write straight to the `flight_plan` table, so they can also produce
//! rows the API itself would never store.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let plan = factory::create_flight_plan(&db).await?;
//!
//! let corrupt = factory::flight_plan::FlightPlanFactory::new(&db)
//!     .document(serde_json::json!({ "route": 42 }))
//!     .build()
//!     .await?;
//! ```

pub mod flight_plan;
pub mod helpers;

pub use flight_plan::create_flight_plan;
