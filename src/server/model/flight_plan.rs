//! Domain models for flight plan operations.
//!
//! Defines the stored flight plan, the client-supplied parameters used to file or
//! replace one, and the outcome of write operations.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::flight_plan::FlightPlanDto;

/// Filed flight plan with its server-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    /// Opaque identifier assigned when the plan was filed.
    pub flight_plan_id: String,
    /// Every other field of the plan.
    pub details: FlightPlanParams,
}

impl FlightPlan {
    /// Estimated time enroute, `arrival_time - departure_time`.
    ///
    /// Negative when arrival precedes departure; neither time is validated
    /// against the other.
    pub fn time_enroute(&self) -> TimeDelta {
        self.details.arrival_time - self.details.departure_time
    }

    /// Converts the flight plan domain model to a DTO for API responses.
    pub fn into_dto(self) -> FlightPlanDto {
        let d = self.details;
        FlightPlanDto {
            flight_plan_id: Some(self.flight_plan_id),
            aircraft_identification: d.aircraft_identification,
            aircraft_type: d.aircraft_type,
            airspeed: d.airspeed,
            altitude: d.altitude,
            flight_type: d.flight_type,
            fuel_hours: d.fuel_hours,
            fuel_minutes: d.fuel_minutes,
            departure_time: d.departure_time,
            arrival_time: d.arrival_time,
            departuring_airport: d.departuring_airport,
            arrival_airport: d.arrival_airport,
            route: d.route,
            remarks: d.remarks,
            number_onboard: d.number_onboard,
        }
    }
}

/// Client-supplied flight plan fields, everything except the identifier.
///
/// Used both to file a new plan and to replace every field of an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlanParams {
    /// Tail number or call sign.
    pub aircraft_identification: String,
    /// Free-text aircraft model.
    pub aircraft_type: String,
    /// Knots.
    pub airspeed: i32,
    /// Feet.
    pub altitude: i32,
    /// VFR, IFR or other free text.
    pub flight_type: String,
    pub fuel_hours: i32,
    /// Not range checked.
    pub fuel_minutes: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub departuring_airport: String,
    pub arrival_airport: String,
    pub route: String,
    pub remarks: String,
    pub number_onboard: i32,
}

impl FlightPlanParams {
    /// Converts a request DTO into params, dropping any client-supplied identifier.
    pub fn from_dto(dto: FlightPlanDto) -> Self {
        Self {
            aircraft_identification: dto.aircraft_identification,
            aircraft_type: dto.aircraft_type,
            airspeed: dto.airspeed,
            altitude: dto.altitude,
            flight_type: dto.flight_type,
            fuel_hours: dto.fuel_hours,
            fuel_minutes: dto.fuel_minutes,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
            departuring_airport: dto.departuring_airport,
            arrival_airport: dto.arrival_airport,
            route: dto.route,
            remarks: dto.remarks,
            number_onboard: dto.number_onboard,
        }
    }

    /// Checks the constraints a stored flight plan must satisfy.
    ///
    /// # Returns
    /// - `Ok(())` - Airspeed and number onboard are non-negative
    /// - `Err(String)` - Description of the first violated constraint
    pub fn validate(&self) -> Result<(), String> {
        if self.airspeed < 0 {
            return Err(format!("airspeed must be non-negative, got {}", self.airspeed));
        }
        if self.number_onboard < 0 {
            return Err(format!(
                "number_onboard must be non-negative, got {}",
                self.number_onboard
            ));
        }
        Ok(())
    }
}

/// Outcome of a storage write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionResult {
    Success,
    /// Record rejected before or by the store.
    BadRequest,
    /// No record matches the requested identifier.
    NotFound,
    /// Database fault, or an update that matched but changed nothing.
    ServerError,
}

#[cfg(test)]
impl FlightPlanParams {
    /// Builds params from a test fixture by going through the wire format.
    pub fn from_fixture(fixture: &test_utils::fixture::flight_plan::FlightPlanFixture) -> Self {
        let dto: FlightPlanDto = serde_json::from_value(fixture.to_dto_json())
            .expect("fixture serializes to a valid FlightPlanDto");
        Self::from_dto(dto)
    }
}
