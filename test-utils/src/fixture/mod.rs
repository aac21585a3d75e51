//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures describe flight plans as plain values and render them either as the
//! API's JSON body or as the stored document. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::flight_plan::FlightPlanFixture;
//!
//! let body = FlightPlanFixture::default().to_dto_json();
//! let fast = FlightPlanFixture { airspeed: 250, ..Default::default() };
//! ```

pub mod flight_plan;

pub use flight_plan::FlightPlanFixture;
