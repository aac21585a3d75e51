use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{api::ErrorDto, flight_plan::FlightPlanDto},
    server::{
        data::flight_plan::FlightPlanRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::flight_plan::{FlightPlanParams, TransactionResult},
        service::flight_plan::FlightPlanService,
        state::AppState,
        util::time::format_time_span,
    },
};

/// Tag for grouping flight plan endpoints in OpenAPI documentation
pub static FLIGHT_PLAN_TAG: &str = "flight_plan";

fn flight_plan_service(state: &AppState) -> FlightPlanService<FlightPlanRepository<'_>> {
    FlightPlanService::new(FlightPlanRepository::new(&state.db))
}

fn not_found(flight_plan_id: &str) -> AppError {
    AppError::NotFound(format!("Flight plan {} not found", flight_plan_id))
}

/// List all flight plans.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
///
/// # Returns
/// - `200 OK` - Every stored flight plan
/// - `204 No Content` - No flight plans in the system
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/flightplan",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Flight plans in the system", body = Vec<FlightPlanDto>),
        (status = 204, description = "No flight plans in the system"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let flight_plans = flight_plan_service(&state).list_all().await?;

    if flight_plans.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let dtos: Vec<FlightPlanDto> = flight_plans.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

/// Get a flight plan by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `flight_plan_id` - ID of the flight plan to fetch
///
/// # Returns
/// - `200 OK` - The flight plan
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No flight plan with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/flightplan/{flight_plan_id}",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    params(
        ("flight_plan_id" = String, Path, description = "Flight plan ID")
    ),
    responses(
        (status = 200, description = "The flight plan", body = FlightPlanDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_plan_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(flight_plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let flight_plan = flight_plan_service(&state)
        .get_by_id(&flight_plan_id)
        .await?
        .ok_or_else(|| not_found(&flight_plan_id))?;

    Ok((StatusCode::OK, Json(flight_plan.into_dto())))
}

/// File a new flight plan.
///
/// The server assigns the flight plan ID; any `flight_plan_id` in the body is
/// ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `payload` - Flight plan to file, or the rejection if the body is not a flight plan
///
/// # Returns
/// - `201 Created` - Flight plan filed
/// - `400 Bad Request` - Malformed body or rejected flight plan
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Error filing the flight plan
#[utoipa::path(
    post,
    path = "/api/v1/flightplan/file",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    request_body = FlightPlanDto,
    responses(
        (status = 201, description = "Flight plan filed"),
        (status = 400, description = "The flight plan is invalid", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "There was an error filing the flight plan", body = ErrorDto)
    ),
)]
pub async fn file_flight_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<FlightPlanDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let Json(dto) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    match flight_plan_service(&state)
        .file(FlightPlanParams::from_dto(dto))
        .await
    {
        TransactionResult::Success => Ok(StatusCode::CREATED),
        TransactionResult::BadRequest => {
            Err(AppError::BadRequest("The flight plan is invalid".to_string()))
        }
        _ => Err(AppError::InternalError(
            "There was an error filing the flight plan".to_string(),
        )),
    }
}

/// Replace every field of an existing flight plan.
///
/// The body identifies the plan through `flight_plan_id`.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `payload` - Replacement flight plan including its `flight_plan_id`
///
/// # Returns
/// - `200 OK` - Flight plan updated
/// - `400 Bad Request` - Malformed body, missing ID, or rejected flight plan
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No flight plan with this ID
/// - `500 Internal Server Error` - Nothing was modified or a database error occurred
#[utoipa::path(
    put,
    path = "/api/v1/flightplan",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    request_body = FlightPlanDto,
    responses(
        (status = 200, description = "Flight plan updated"),
        (status = 400, description = "The flight plan is invalid", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight plan not found", body = ErrorDto),
        (status = 500, description = "There was an error updating the flight plan", body = ErrorDto)
    ),
)]
pub async fn update_flight_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<FlightPlanDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let Json(mut dto) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let flight_plan_id = dto
        .flight_plan_id
        .take()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("flight_plan_id is required".to_string()))?;

    match flight_plan_service(&state)
        .update(&flight_plan_id, FlightPlanParams::from_dto(dto))
        .await
    {
        TransactionResult::Success => Ok(StatusCode::OK),
        TransactionResult::BadRequest => {
            Err(AppError::BadRequest("The flight plan is invalid".to_string()))
        }
        TransactionResult::NotFound => Err(not_found(&flight_plan_id)),
        TransactionResult::ServerError => Err(AppError::InternalError(format!(
            "Update of flight plan {} failed",
            flight_plan_id
        ))),
    }
}

/// Delete a flight plan.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `flight_plan_id` - ID of the flight plan to delete
///
/// # Returns
/// - `200 OK` - Flight plan deleted
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `500 Internal Server Error` - Nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/v1/flightplan/{flight_plan_id}",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    params(
        ("flight_plan_id" = String, Path, description = "Flight plan ID")
    ),
    responses(
        (status = 200, description = "Flight plan deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "The flight plan could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_flight_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(flight_plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    if flight_plan_service(&state).delete(&flight_plan_id).await {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::InternalError(format!(
            "Flight plan {} could not be deleted",
            flight_plan_id
        )))
    }
}

/// Get the departure airport of a flight plan.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `flight_plan_id` - ID of the flight plan
///
/// # Returns
/// - `200 OK` - Airport code as plain text
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No flight plan with this ID
#[utoipa::path(
    get,
    path = "/api/v1/flightplan/airport/departure/{flight_plan_id}",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    params(
        ("flight_plan_id" = String, Path, description = "Flight plan ID")
    ),
    responses(
        (status = 200, description = "Departure airport", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight plan not found", body = ErrorDto)
    ),
)]
pub async fn get_departure_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(flight_plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let airport = flight_plan_service(&state)
        .departure_airport(&flight_plan_id)
        .await?
        .ok_or_else(|| not_found(&flight_plan_id))?;

    Ok((StatusCode::OK, airport))
}

/// Get the route of a flight plan.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `flight_plan_id` - ID of the flight plan
///
/// # Returns
/// - `200 OK` - Route as plain text
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No flight plan with this ID
#[utoipa::path(
    get,
    path = "/api/v1/flightplan/route/{flight_plan_id}",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    params(
        ("flight_plan_id" = String, Path, description = "Flight plan ID")
    ),
    responses(
        (status = 200, description = "Route", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight plan not found", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(flight_plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let route = flight_plan_service(&state)
        .route(&flight_plan_id)
        .await?
        .ok_or_else(|| not_found(&flight_plan_id))?;

    Ok((StatusCode::OK, route))
}

/// Get the estimated time enroute of a flight plan.
///
/// Arrival minus departure, formatted `[-][d.]hh:mm:ss[.fffffff]`. Negative when
/// arrival precedes departure.
///
/// # Arguments
/// - `state` - Application state containing the database connection and user service
/// - `headers` - Request headers carrying the Basic credentials
/// - `flight_plan_id` - ID of the flight plan
///
/// # Returns
/// - `200 OK` - Duration as a JSON string
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - No flight plan with this ID
#[utoipa::path(
    get,
    path = "/api/v1/flightplan/time/enroute/{flight_plan_id}",
    tag = FLIGHT_PLAN_TAG,
    security(("basic_auth" = [])),
    params(
        ("flight_plan_id" = String, Path, description = "Flight plan ID")
    ),
    responses(
        (status = 200, description = "Estimated time enroute", body = String, example = json!("01:30:00")),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight plan not found", body = ErrorDto)
    ),
)]
pub async fn get_time_enroute(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(flight_plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(state.user_service.as_ref(), &headers)
        .require()
        .await?;

    let time_enroute = flight_plan_service(&state)
        .time_enroute(&flight_plan_id)
        .await?
        .ok_or_else(|| not_found(&flight_plan_id))?;

    Ok((StatusCode::OK, Json(format_time_span(time_enroute))))
}
