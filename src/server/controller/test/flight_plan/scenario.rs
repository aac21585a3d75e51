use super::*;

/// Walks a flight plan through its whole life: file, list, read, query, update,
/// delete.
#[tokio::test]
async fn file_update_and_delete_lifecycle() {
    let (_test, state) = setup().await;

    let response = get_flight_plans(State(state.clone()), auth_headers())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = file_flight_plan(
        State(state.clone()),
        auth_headers(),
        json_payload(FlightPlanFixture::default().to_dto_json().to_string()).await,
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_flight_plans(State(state.clone()), auth_headers())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);

    let flight_plan_id = listed[0]["flight_plan_id"].as_str().unwrap().to_string();

    let response = get_flight_plan_by_id(
        State(state.clone()),
        auth_headers(),
        Path(flight_plan_id.clone()),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, listed[0]);

    let response = get_time_enroute(
        State(state.clone()),
        auth_headers(),
        Path(flight_plan_id.clone()),
    )
    .await
    .into_response();
    assert_eq!(body_json(response).await, json!("01:30:00"));

    let response = update_flight_plan(
        State(state.clone()),
        auth_headers(),
        json_payload(
            FlightPlanFixture::alternate()
                .to_dto_json_with_id(&flight_plan_id)
                .to_string(),
        )
        .await,
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_departure_airport(
        State(state.clone()),
        auth_headers(),
        Path(flight_plan_id.clone()),
    )
    .await
    .into_response();
    assert_eq!(body_text(response).await, "KBOS");

    let response = get_time_enroute(
        State(state.clone()),
        auth_headers(),
        Path(flight_plan_id.clone()),
    )
    .await
    .into_response();
    assert_eq!(body_json(response).await, json!("02:30:00"));

    let response = delete_flight_plan(
        State(state.clone()),
        auth_headers(),
        Path(flight_plan_id.clone()),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_flight_plans(State(state), auth_headers())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
