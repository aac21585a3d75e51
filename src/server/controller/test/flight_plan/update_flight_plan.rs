use super::*;

/// Tests replacing a stored plan's fields.
///
/// Expected: 200 OK, subsequent read reflects the new values under the same ID
#[tokio::test]
async fn updates_existing_flight_plan() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();
    let body = FlightPlanFixture::alternate().to_dto_json_with_id(&stored.flight_plan_id);

    let response = update_flight_plan(
        State(state.clone()),
        auth_headers(),
        json_payload(body.to_string()).await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let response = get_flight_plan_by_id(
        State(state),
        auth_headers(),
        Path(stored.flight_plan_id.clone()),
    )
    .await
    .into_response();
    let updated = body_json(response).await;

    assert_eq!(updated["flight_plan_id"], stored.flight_plan_id.as_str());
    assert_eq!(updated["route"], "KBOS..GDM..KALB");
    assert_eq!(updated["number_onboard"], 3);
}

/// Tests updating an ID that was never filed.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_for_unknown_id() {
    let (_test, state) = setup().await;

    let body = FlightPlanFixture::alternate().to_dto_json_with_id("missing");

    let response = update_flight_plan(State(state), auth_headers(), json_payload(body.to_string()).await)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests updating without a flight plan ID in the body.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_missing_id() {
    let (_test, state) = setup().await;

    let body = FlightPlanFixture::alternate().to_dto_json();

    let response = update_flight_plan(State(state), auth_headers(), json_payload(body.to_string()).await)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests updating with an empty flight plan ID.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_empty_id() {
    let (_test, state) = setup().await;

    let body = FlightPlanFixture::alternate().to_dto_json_with_id("");

    let response = update_flight_plan(State(state), auth_headers(), json_payload(body.to_string()).await)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests updating with a negative airspeed.
///
/// Expected: 400 Bad Request, stored plan unchanged
#[tokio::test]
async fn rejects_negative_airspeed() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();
    let fixture = FlightPlanFixture {
        airspeed: -5,
        ..FlightPlanFixture::alternate()
    };

    let response = update_flight_plan(
        State(state),
        auth_headers(),
        json_payload(fixture.to_dto_json_with_id(&stored.flight_plan_id).to_string()).await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let unchanged = entity::prelude::FlightPlan::find_by_id(stored.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.document, stored.document);
}

/// Tests an update that changes nothing.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn reports_error_when_nothing_changes() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();
    let body = FlightPlanFixture::default().to_dto_json_with_id(&stored.flight_plan_id);

    let response = update_flight_plan(State(state), auth_headers(), json_payload(body.to_string()).await)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
