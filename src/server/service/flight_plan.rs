use chrono::TimeDelta;

use crate::server::{
    data::flight_plan::FlightPlanStore,
    error::AppError,
    model::flight_plan::{FlightPlan, FlightPlanParams, TransactionResult},
};

/// Flight plan operations on top of a storage adapter.
///
/// Writes pass the adapter's `TransactionResult` through untouched so the controller
/// can choose a status code. Reads turn database faults into `AppError`.
pub struct FlightPlanService<S> {
    store: S,
}

impl<S: FlightPlanStore> FlightPlanService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<FlightPlan>, AppError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get_by_id(&self, flight_plan_id: &str) -> Result<Option<FlightPlan>, AppError> {
        Ok(self.store.get_by_id(flight_plan_id).await?)
    }

    pub async fn file(&self, params: FlightPlanParams) -> TransactionResult {
        self.store.file(params).await
    }

    pub async fn update(&self, flight_plan_id: &str, params: FlightPlanParams) -> TransactionResult {
        self.store.update(flight_plan_id, params).await
    }

    pub async fn delete(&self, flight_plan_id: &str) -> bool {
        self.store.delete(flight_plan_id).await
    }

    /// Departure airport of a flight plan, `None` if the plan does not exist.
    pub async fn departure_airport(&self, flight_plan_id: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .get_by_id(flight_plan_id)
            .await?
            .map(|plan| plan.details.departuring_airport))
    }

    /// Route of a flight plan, `None` if the plan does not exist.
    pub async fn route(&self, flight_plan_id: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .get_by_id(flight_plan_id)
            .await?
            .map(|plan| plan.details.route))
    }

    /// Estimated time enroute of a flight plan, `None` if the plan does not exist.
    pub async fn time_enroute(&self, flight_plan_id: &str) -> Result<Option<TimeDelta>, AppError> {
        Ok(self
            .get_by_id(flight_plan_id)
            .await?
            .map(|plan| plan.time_enroute()))
    }
}
