//! Flight plan factory for inserting test flight plan rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

use crate::{factory::helpers::next_flight_plan_id, fixture::flight_plan::FlightPlanFixture};

/// Factory for creating stored flight plans with customizable content.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight_plan::FlightPlanFactory;
///
/// let plan = FlightPlanFactory::new(&db)
///     .fixture(FlightPlanFixture { route: "DIRECT".into(), ..Default::default() })
///     .build()
///     .await?;
/// ```
pub struct FlightPlanFactory<'a> {
    db: &'a DatabaseConnection,
    flight_plan_id: String,
    fixture: FlightPlanFixture,
    document: Option<Value>,
}

impl<'a> FlightPlanFactory<'a> {
    /// Creates a new FlightPlanFactory with default values.
    ///
    /// Defaults:
    /// - flight_plan_id: a fresh 32 character hex ID
    /// - content: `FlightPlanFixture::default()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            flight_plan_id: next_flight_plan_id(),
            fixture: FlightPlanFixture::default(),
            document: None,
        }
    }

    /// Sets the flight plan ID used as the row key and embedded in the document.
    pub fn flight_plan_id(mut self, flight_plan_id: impl Into<String>) -> Self {
        self.flight_plan_id = flight_plan_id.into();
        self
    }

    /// Sets the plan content rendered into the document.
    pub fn fixture(mut self, fixture: FlightPlanFixture) -> Self {
        self.fixture = fixture;
        self
    }

    /// Stores `document` verbatim instead of rendering the fixture.
    ///
    /// Use this to insert documents the binding cannot parse.
    pub fn document(mut self, document: Value) -> Self {
        self.document = Some(document);
        self
    }

    /// Inserts the flight plan row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::flight_plan::Model, DbErr> {
        let document = self
            .document
            .unwrap_or_else(|| self.fixture.to_document(&self.flight_plan_id));

        entity::flight_plan::ActiveModel {
            flight_plan_id: ActiveValue::Set(self.flight_plan_id),
            document: ActiveValue::Set(document),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stored flight plan with default values.
///
/// Shorthand for `FlightPlanFactory::new(db).build()`.
pub async fn create_flight_plan(
    db: &DatabaseConnection,
) -> Result<entity::flight_plan::Model, DbErr> {
    FlightPlanFactory::new(db).build().await
}
