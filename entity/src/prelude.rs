pub use super::flight_plan::Entity as FlightPlan;
