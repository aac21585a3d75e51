//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the storage representation out of the business logic layer.

pub mod flight_plan;
