use super::*;

/// Tests deleting a flight plan.
///
/// Expected: true, plan no longer readable
#[tokio::test]
async fn deletes_flight_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await?;

    let repo = FlightPlanRepository::new(db);
    assert!(repo.delete(&stored.flight_plan_id).await);

    assert!(repo.get_by_id(&stored.flight_plan_id).await?.is_none());
    let check = entity::prelude::FlightPlan::find_by_id(stored.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting the same flight plan twice.
///
/// Expected: true then false
#[tokio::test]
async fn returns_false_when_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await?;

    let repo = FlightPlanRepository::new(db);
    assert!(repo.delete(&stored.flight_plan_id).await);
    assert!(!repo.delete(&stored.flight_plan_id).await);

    Ok(())
}

/// Tests deleting only removes the matching flight plan.
///
/// Expected: true, the other plan remains
#[tokio::test]
async fn leaves_other_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_plan_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_flight_plan(db).await?;
    let other = factory::create_flight_plan(db).await?;

    let repo = FlightPlanRepository::new(db);
    assert!(repo.delete(&target.flight_plan_id).await);

    assert_eq!(entity::prelude::FlightPlan::find().count(db).await?, 1);
    assert!(repo.get_by_id(&other.flight_plan_id).await?.is_some());

    Ok(())
}

/// Tests deleting when the table does not exist.
///
/// Expected: false
#[tokio::test]
async fn returns_false_on_database_fault() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightPlanRepository::new(db);

    assert!(!repo.delete("any").await);
}
