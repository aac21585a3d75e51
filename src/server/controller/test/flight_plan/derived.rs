use super::*;

#[tokio::test]
async fn returns_departure_airport() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();

    let response = get_departure_airport(State(state), auth_headers(), Path(stored.flight_plan_id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(body_text(response).await, "KTTN");
}

#[tokio::test]
async fn returns_route() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();

    let response = get_route(State(state), auth_headers(), Path(stored.flight_plan_id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "KTTN..RBV..DIXIE..KNZY");
}

#[tokio::test]
async fn returns_time_enroute() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();

    let response = get_time_enroute(State(state), auth_headers(), Path(stored.flight_plan_id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "\"01:30:00\"");
}

/// Tests arrival before departure yields a negative duration.
///
/// Expected: 200 OK with a leading minus sign
#[tokio::test]
async fn returns_negative_time_enroute() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let defaults = FlightPlanFixture::default();
    let stored = factory::flight_plan::FlightPlanFactory::new(db)
        .fixture(FlightPlanFixture {
            departure_time: defaults.arrival_time,
            arrival_time: defaults.departure_time,
            ..defaults
        })
        .build()
        .await
        .unwrap();

    let response = get_time_enroute(State(state), auth_headers(), Path(stored.flight_plan_id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("-01:30:00"));
}

#[tokio::test]
async fn returns_not_found_for_unknown_id() {
    let (_test, state) = setup().await;

    let departure = get_departure_airport(State(state.clone()), auth_headers(), Path("missing".to_string()))
        .await
        .into_response();
    let route = get_route(State(state.clone()), auth_headers(), Path("missing".to_string()))
        .await
        .into_response();
    let enroute = get_time_enroute(State(state), auth_headers(), Path("missing".to_string()))
        .await
        .into_response();

    assert_eq!(departure.status(), StatusCode::NOT_FOUND);
    assert_eq!(route.status(), StatusCode::NOT_FOUND);
    assert_eq!(enroute.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejects_missing_credentials() {
    let (test, state) = setup().await;
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_flight_plan(db).await.unwrap();

    let response = get_route(State(state), HeaderMap::new(), Path(stored.flight_plan_id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
