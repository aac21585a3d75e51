//! SeaORM entities for the flight plan document store.

pub mod prelude;

pub mod flight_plan;
