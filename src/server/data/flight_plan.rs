use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};

use crate::server::model::flight_plan::{FlightPlan, FlightPlanParams, TransactionResult};

/// Length of a generated flight plan ID in hex characters.
const FLIGHT_PLAN_ID_LENGTH: usize = 32;

/// Storage operations for flight plans.
///
/// Reads surface database faults as `DbErr`. Writes never fail outright: faults are
/// logged and reported through `TransactionResult` or `false`.
#[async_trait]
pub trait FlightPlanStore: Send + Sync {
    /// Returns every stored flight plan, oldest filing first.
    async fn list_all(&self) -> Result<Vec<FlightPlan>, DbErr>;

    /// Returns the flight plan with the given ID.
    ///
    /// # Returns
    /// - `Ok(Some(plan))` - Plan found and its document parsed
    /// - `Ok(None)` - No such plan, or its document could not be parsed
    /// - `Err(DbErr)` - Database error
    async fn get_by_id(&self, flight_plan_id: &str) -> Result<Option<FlightPlan>, DbErr>;

    /// Files a new flight plan under a freshly generated ID.
    async fn file(&self, params: FlightPlanParams) -> TransactionResult;

    /// Replaces every field except the ID of an existing flight plan.
    async fn update(&self, flight_plan_id: &str, params: FlightPlanParams) -> TransactionResult;

    /// Deletes a flight plan, returning whether a record was removed.
    async fn delete(&self, flight_plan_id: &str) -> bool;
}

/// Stored JSON shape of a flight plan.
///
/// Field names are the document store's, which is why arrival is persisted as
/// `estimated_arrival_time`.
#[derive(Debug, Serialize, Deserialize)]
struct FlightPlanDocument {
    flight_plan_id: String,
    aircraft_identification: String,
    aircraft_type: String,
    airspeed: i32,
    altitude: i32,
    flight_type: String,
    fuel_hours: i32,
    fuel_minutes: i32,
    departure_time: DateTime<Utc>,
    estimated_arrival_time: DateTime<Utc>,
    departuring_airport: String,
    arrival_airport: String,
    route: String,
    remarks: String,
    number_onboard: i32,
}

impl FlightPlanDocument {
    fn new(flight_plan_id: String, params: FlightPlanParams) -> Self {
        Self {
            flight_plan_id,
            aircraft_identification: params.aircraft_identification,
            aircraft_type: params.aircraft_type,
            airspeed: params.airspeed,
            altitude: params.altitude,
            flight_type: params.flight_type,
            fuel_hours: params.fuel_hours,
            fuel_minutes: params.fuel_minutes,
            departure_time: params.departure_time,
            estimated_arrival_time: params.arrival_time,
            departuring_airport: params.departuring_airport,
            arrival_airport: params.arrival_airport,
            route: params.route,
            remarks: params.remarks,
            number_onboard: params.number_onboard,
        }
    }

    fn into_domain(self) -> FlightPlan {
        FlightPlan {
            flight_plan_id: self.flight_plan_id,
            details: FlightPlanParams {
                aircraft_identification: self.aircraft_identification,
                aircraft_type: self.aircraft_type,
                airspeed: self.airspeed,
                altitude: self.altitude,
                flight_type: self.flight_type,
                fuel_hours: self.fuel_hours,
                fuel_minutes: self.fuel_minutes,
                departure_time: self.departure_time,
                arrival_time: self.estimated_arrival_time,
                departuring_airport: self.departuring_airport,
                arrival_airport: self.arrival_airport,
                route: self.route,
                remarks: self.remarks,
                number_onboard: self.number_onboard,
            },
        }
    }

    /// Parses a stored row into a domain model.
    ///
    /// Returns `None`, after logging, when the document is missing fields, has fields
    /// of the wrong type, or embeds an ID different from the row's key.
    fn parse(model: entity::flight_plan::Model) -> Option<FlightPlan> {
        let document: Self = match serde_json::from_value(model.document) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    "Skipping unparsable document for flight plan {}: {}",
                    model.flight_plan_id,
                    e
                );
                return None;
            }
        };

        if document.flight_plan_id != model.flight_plan_id {
            tracing::warn!(
                "Document for flight plan {} embeds mismatched ID {}",
                model.flight_plan_id,
                document.flight_plan_id
            );
            return None;
        }

        Some(document.into_domain())
    }
}

/// Generates an opaque flight plan ID of lowercase hex characters.
fn generate_flight_plan_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdef";

    let mut rng = rand::rng();

    (0..FLIGHT_PLAN_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Document store binding for flight plans.
///
/// Each plan is one row holding a JSON document, looked up by `flight_plan_id`
/// rather than the table's native primary key.
pub struct FlightPlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightPlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        flight_plan_id: &str,
    ) -> Result<Option<entity::flight_plan::Model>, DbErr> {
        entity::prelude::FlightPlan::find()
            .filter(entity::flight_plan::Column::FlightPlanId.eq(flight_plan_id))
            .one(self.db)
            .await
    }

    /// Replaces the document of a row read earlier.
    ///
    /// A row deleted since it was read leaves nothing to update and is reported as
    /// `NotFound`.
    async fn write_document(
        &self,
        existing: entity::flight_plan::Model,
        document: serde_json::Value,
    ) -> TransactionResult {
        let flight_plan_id = existing.flight_plan_id.clone();

        let mut active_model: entity::flight_plan::ActiveModel = existing.into();
        active_model.document = ActiveValue::Set(document);

        match active_model.update(self.db).await {
            Ok(_) => TransactionResult::Success,
            Err(DbErr::RecordNotUpdated) => {
                tracing::debug!("Flight plan {} was deleted before update", flight_plan_id);
                TransactionResult::NotFound
            }
            Err(e) => {
                tracing::error!("Failed to update flight plan {}: {}", flight_plan_id, e);
                TransactionResult::ServerError
            }
        }
    }
}

#[async_trait]
impl<'a> FlightPlanStore for FlightPlanRepository<'a> {
    async fn list_all(&self) -> Result<Vec<FlightPlan>, DbErr> {
        let models = entity::prelude::FlightPlan::find()
            .order_by_asc(entity::flight_plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .filter_map(FlightPlanDocument::parse)
            .collect())
    }

    async fn get_by_id(&self, flight_plan_id: &str) -> Result<Option<FlightPlan>, DbErr> {
        Ok(self
            .find_model(flight_plan_id)
            .await?
            .and_then(FlightPlanDocument::parse))
    }

    async fn file(&self, params: FlightPlanParams) -> TransactionResult {
        if let Err(reason) = params.validate() {
            tracing::debug!("Rejected flight plan filing: {}", reason);
            return TransactionResult::BadRequest;
        }

        let flight_plan_id = generate_flight_plan_id();
        let document =
            match serde_json::to_value(FlightPlanDocument::new(flight_plan_id.clone(), params)) {
                Ok(document) => document,
                Err(e) => {
                    tracing::error!("Failed to serialize flight plan document: {}", e);
                    return TransactionResult::ServerError;
                }
            };

        let result = entity::flight_plan::ActiveModel {
            flight_plan_id: ActiveValue::Set(flight_plan_id),
            document: ActiveValue::Set(document),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(model) if model.id > 0 => {
                tracing::info!("Filed flight plan {}", model.flight_plan_id);
                TransactionResult::Success
            }
            Ok(model) => {
                tracing::warn!(
                    "Store assigned no identity to flight plan {}",
                    model.flight_plan_id
                );
                TransactionResult::BadRequest
            }
            Err(e) => {
                tracing::error!("Failed to file flight plan: {}", e);
                TransactionResult::ServerError
            }
        }
    }

    async fn update(&self, flight_plan_id: &str, params: FlightPlanParams) -> TransactionResult {
        if let Err(reason) = params.validate() {
            tracing::debug!("Rejected update of flight plan {}: {}", flight_plan_id, reason);
            return TransactionResult::BadRequest;
        }

        let existing = match self.find_model(flight_plan_id).await {
            Ok(Some(model)) => model,
            Ok(None) => return TransactionResult::NotFound,
            Err(e) => {
                tracing::error!("Failed to look up flight plan {}: {}", flight_plan_id, e);
                return TransactionResult::ServerError;
            }
        };

        let document = match serde_json::to_value(FlightPlanDocument::new(
            flight_plan_id.to_string(),
            params,
        )) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("Failed to serialize flight plan document: {}", e);
                return TransactionResult::ServerError;
            }
        };

        if existing.document == document {
            tracing::warn!("Update of flight plan {} modified nothing", flight_plan_id);
            return TransactionResult::ServerError;
        }

        self.write_document(existing, document).await
    }

    async fn delete(&self, flight_plan_id: &str) -> bool {
        let result = entity::prelude::FlightPlan::delete_many()
            .filter(entity::flight_plan::Column::FlightPlanId.eq(flight_plan_id))
            .exec(self.db)
            .await;

        match result {
            Ok(result) => result.rows_affected > 0,
            Err(e) => {
                tracing::error!("Failed to delete flight plan {}: {}", flight_plan_id, e);
                false
            }
        }
    }
}
