use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api::ErrorDto, flight_plan::FlightPlanDto},
    server::{
        controller::flight_plan::{
            self, delete_flight_plan, file_flight_plan, get_departure_airport,
            get_flight_plan_by_id, get_flight_plans, get_route, get_time_enroute,
            update_flight_plan, FLIGHT_PLAN_TAG,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        flight_plan::get_flight_plans,
        flight_plan::get_flight_plan_by_id,
        flight_plan::file_flight_plan,
        flight_plan::update_flight_plan,
        flight_plan::delete_flight_plan,
        flight_plan::get_departure_airport,
        flight_plan::get_route,
        flight_plan::get_time_enroute,
    ),
    components(schemas(FlightPlanDto, ErrorDto)),
    modifiers(&BasicAuthScheme),
    tags((name = FLIGHT_PLAN_TAG, description = "Flight plan filing and lookup"))
)]
pub struct ApiDoc;

/// Registers the `basic_auth` scheme referenced by every operation.
struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/flightplan",
            get(get_flight_plans).put(update_flight_plan),
        )
        .route(
            "/api/v1/flightplan/",
            get(get_flight_plans).put(update_flight_plan),
        )
        .route("/api/v1/flightplan/file", post(file_flight_plan))
        .route(
            "/api/v1/flightplan/{flight_plan_id}",
            get(get_flight_plan_by_id).delete(delete_flight_plan),
        )
        .route(
            "/api/v1/flightplan/airport/departure/{flight_plan_id}",
            get(get_departure_airport),
        )
        .route(
            "/api/v1/flightplan/route/{flight_plan_id}",
            get(get_route),
        )
        .route(
            "/api/v1/flightplan/time/enroute/{flight_plan_id}",
            get(get_time_enroute),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
