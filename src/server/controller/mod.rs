//! HTTP request handlers.

pub mod flight_plan;
