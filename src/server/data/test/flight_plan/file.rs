use super::*;

/// Tests filing a valid flight plan.
///
/// Verifies the plan is stored under a fresh 32 character ID and can be read back
/// field for field.
///
/// Expected: Success, one stored plan equal to the filed params
#[tokio::test]
async fn files_flight_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = FlightPlanParams::from_fixture(&FlightPlanFixture::default());

    let repo = FlightPlanRepository::new(db);
    let result = repo.file(params.clone()).await;

    assert_eq!(result, TransactionResult::Success);

    let plans = repo.list_all().await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].flight_plan_id.len(), 32);

    let retrieved = repo.get_by_id(&plans[0].flight_plan_id).await?.unwrap();
    assert_eq!(retrieved.details, params);

    Ok(())
}

/// Tests filing the same plan twice assigns distinct IDs.
///
/// Expected: two stored plans with different IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_flight_plan(db).await?;
    let params = FlightPlanParams::from_fixture(&FlightPlanFixture::default());

    let repo = FlightPlanRepository::new(db);
    assert_eq!(repo.file(params.clone()).await, TransactionResult::Success);
    assert_eq!(repo.file(params).await, TransactionResult::Success);

    let plans = repo.list_all().await?;
    assert_eq!(plans.len(), 3);
    assert_ne!(plans[1].flight_plan_id, existing.flight_plan_id);
    assert_ne!(plans[2].flight_plan_id, existing.flight_plan_id);
    assert_ne!(plans[1].flight_plan_id, plans[2].flight_plan_id);

    Ok(())
}

/// Tests the stored document uses the document store's field names.
///
/// Expected: arrival persisted as `estimated_arrival_time`
#[tokio::test]
async fn stores_document_field_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightPlanRepository::new(db);
    repo.file(FlightPlanParams::from_fixture(&FlightPlanFixture::default()))
        .await;

    let stored = entity::prelude::FlightPlan::find().one(db).await?.unwrap();
    assert_eq!(
        stored.document,
        FlightPlanFixture::default().to_document(&stored.flight_plan_id)
    );

    Ok(())
}

/// Tests filing a plan with negative airspeed.
///
/// Expected: BadRequest, nothing stored
#[tokio::test]
async fn rejects_negative_airspeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = FlightPlanParams::from_fixture(&FlightPlanFixture {
        airspeed: -10,
        ..Default::default()
    });

    let repo = FlightPlanRepository::new(db);
    let result = repo.file(params).await;

    assert_eq!(result, TransactionResult::BadRequest);
    assert_eq!(entity::prelude::FlightPlan::find().count(db).await?, 0);

    Ok(())
}

/// Tests filing when the table does not exist.
///
/// Simulates a database fault on insert.
///
/// Expected: ServerError
#[tokio::test]
async fn reports_server_error_on_database_fault() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightPlanRepository::new(db);
    let result = repo
        .file(FlightPlanParams::from_fixture(&FlightPlanFixture::default()))
        .await;

    assert_eq!(result, TransactionResult::ServerError);
}
