use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flight plan as exchanged with API clients.
///
/// `flight_plan_id` is ignored when filing a new plan and required when updating
/// one. Responses always carry it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(example = json!({
    "aircraft_identification": "N67SVS",
    "aircraft_type": "Cessna 172",
    "airspeed": 100,
    "altitude": 10000,
    "flight_type": "VFR",
    "fuel_hours": 1,
    "fuel_minutes": 30,
    "departure_time": "2020-05-01T12:00:00Z",
    "arrival_time": "2020-05-01T13:30:00Z",
    "departuring_airport": "KTTN",
    "arrival_airport": "KNZY",
    "route": "KTTN..RBV..DIXIE..KNZY",
    "remarks": "user remarks",
    "number_onboard": 1
}))]
pub struct FlightPlanDto {
    #[serde(default)]
    pub flight_plan_id: Option<String>,
    pub aircraft_identification: String,
    pub aircraft_type: String,
    pub airspeed: i32,
    // Older clients send the misspelled key from the first published sample.
    #[serde(alias = "altitute")]
    pub altitude: i32,
    pub flight_type: String,
    pub fuel_hours: i32,
    pub fuel_minutes: i32,
    pub departure_time: DateTime<Utc>,
    #[serde(alias = "estimated_arrival_time")]
    pub arrival_time: DateTime<Utc>,
    pub departuring_airport: String,
    pub arrival_airport: String,
    pub route: String,
    pub remarks: String,
    pub number_onboard: i32,
}
