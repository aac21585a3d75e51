//! Flight plan fixture matching the sample filing `N67SVS` from KTTN to KNZY.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

/// Plain description of a flight plan's client-supplied fields.
///
/// The default is a VFR Cessna departing 2020-05-01 12:00 UTC and arriving
/// 90 minutes later.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlanFixture {
    pub aircraft_identification: String,
    pub aircraft_type: String,
    pub airspeed: i32,
    pub altitude: i32,
    pub flight_type: String,
    pub fuel_hours: i32,
    pub fuel_minutes: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub departuring_airport: String,
    pub arrival_airport: String,
    pub route: String,
    pub remarks: String,
    pub number_onboard: i32,
}

impl Default for FlightPlanFixture {
    fn default() -> Self {
        Self {
            aircraft_identification: "N67SVS".to_string(),
            aircraft_type: "Cessna 172".to_string(),
            airspeed: 100,
            altitude: 10000,
            flight_type: "VFR".to_string(),
            fuel_hours: 1,
            fuel_minutes: 30,
            departure_time: Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap(),
            arrival_time: Utc.with_ymd_and_hms(2020, 5, 1, 13, 30, 0).unwrap(),
            departuring_airport: "KTTN".to_string(),
            arrival_airport: "KNZY".to_string(),
            route: "KTTN..RBV..DIXIE..KNZY".to_string(),
            remarks: "user remarks".to_string(),
            number_onboard: 1,
        }
    }
}

impl FlightPlanFixture {
    /// A second, fully distinct plan for update tests.
    ///
    /// Every field differs from `default()`.
    pub fn alternate() -> Self {
        Self {
            aircraft_identification: "N123AB".to_string(),
            aircraft_type: "Piper PA-28".to_string(),
            airspeed: 120,
            altitude: 8500,
            flight_type: "IFR".to_string(),
            fuel_hours: 3,
            fuel_minutes: 15,
            departure_time: Utc.with_ymd_and_hms(2021, 7, 4, 9, 15, 0).unwrap(),
            arrival_time: Utc.with_ymd_and_hms(2021, 7, 4, 11, 45, 0).unwrap(),
            departuring_airport: "KBOS".to_string(),
            arrival_airport: "KALB".to_string(),
            route: "KBOS..GDM..KALB".to_string(),
            remarks: "revised".to_string(),
            number_onboard: 3,
        }
    }

    /// Renders the fixture as an API request body, without a `flight_plan_id`.
    pub fn to_dto_json(&self) -> Value {
        json!({
            "aircraft_identification": self.aircraft_identification,
            "aircraft_type": self.aircraft_type,
            "airspeed": self.airspeed,
            "altitude": self.altitude,
            "flight_type": self.flight_type,
            "fuel_hours": self.fuel_hours,
            "fuel_minutes": self.fuel_minutes,
            "departure_time": self.departure_time,
            "arrival_time": self.arrival_time,
            "departuring_airport": self.departuring_airport,
            "arrival_airport": self.arrival_airport,
            "route": self.route,
            "remarks": self.remarks,
            "number_onboard": self.number_onboard,
        })
    }

    /// Renders the fixture as an API request body carrying `flight_plan_id`.
    pub fn to_dto_json_with_id(&self, flight_plan_id: &str) -> Value {
        let mut value = self.to_dto_json();
        if let Some(object) = value.as_object_mut() {
            object.insert("flight_plan_id".to_string(), json!(flight_plan_id));
        }
        value
    }

    /// Renders the fixture as the document persisted in the `flight_plan` table.
    pub fn to_document(&self, flight_plan_id: &str) -> Value {
        json!({
            "flight_plan_id": flight_plan_id,
            "aircraft_identification": self.aircraft_identification,
            "aircraft_type": self.aircraft_type,
            "airspeed": self.airspeed,
            "altitude": self.altitude,
            "flight_type": self.flight_type,
            "fuel_hours": self.fuel_hours,
            "fuel_minutes": self.fuel_minutes,
            "departure_time": self.departure_time,
            "estimated_arrival_time": self.arrival_time,
            "departuring_airport": self.departuring_airport,
            "arrival_airport": self.arrival_airport,
            "route": self.route,
            "remarks": self.remarks,
            "number_onboard": self.number_onboard,
        })
    }
}
