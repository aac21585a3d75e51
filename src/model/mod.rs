//! Wire-level DTOs shared by every API endpoint.

pub mod api;
pub mod flight_plan;
