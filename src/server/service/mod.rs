//! Service layer between controllers and the data layer.

pub mod flight_plan;
pub mod user;
