use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{require_any_role, Role, User},
    dto::{input, output},
    error::Error,
    service::{
        ride_stats_service::RideStatsService,
        shuttle_status_service::ShuttleStatusService,
        tickets_service::{DriverIdentityHints, TicketsService},
    },
};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    let protected = Router::new()
        .route("/api/v1/tickets", post(issue_ticket))
        .route("/api/v1/shuttle/location", post(publish_location))
        .route("/api/v1/admin/rides/count", get(get_ride_count))
        .route_layer(middleware.auth.clone());

    let public = Router::new()
        .route("/api/v1/tickets/verify", post(verify_ticket))
        .route("/api/v1/shuttle/status", get(get_shuttle_status))
        .route("/api/v1/health", get(health));

    Router::new().merge(protected).merge(public)
}

async fn issue_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::IssuedTicket>), Error> {
    let issued_ticket = tickets_service.issue_ticket(user.id).await?;

    Ok((StatusCode::CREATED, Json(issued_ticket)))
}

///
/// Open endpoint; the driver is identified from request hints,
/// not from required authorization.
///
async fn verify_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    headers: HeaderMap,
    Json(verify): Json<input::VerifyTicket>,
) -> Result<Json<output::Verification>, Error> {
    let bearer_token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string);
    let identity = DriverIdentityHints {
        openid: verify.driver_openid.clone(),
        bearer_token,
    };

    let verification = tickets_service.verify_ticket(verify, identity).await?;

    Ok(Json(verification))
}

async fn publish_location(
    State(shuttle_status_service): State<Arc<dyn ShuttleStatusService>>,
    Extension(user): Extension<User>,
    Json(location): Json<input::ShuttleLocation>,
) -> Result<StatusCode, Error> {
    require_any_role(&user, &[Role::Driver, Role::Admin])?;

    shuttle_status_service.publish_location(location).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_shuttle_status(
    State(shuttle_status_service): State<Arc<dyn ShuttleStatusService>>,
    Query(query): Query<input::ShuttleStatusQuery>,
) -> Result<Json<Option<output::ShuttleStatus>>, Error> {
    let status = shuttle_status_service.get_status(query.shuttle_id).await?;

    Ok(Json(status))
}

async fn get_ride_count(
    State(ride_stats_service): State<Arc<dyn RideStatsService>>,
    Extension(user): Extension<User>,
    Query(query): Query<input::RideCountQuery>,
) -> Result<Json<output::RideCount>, Error> {
    require_any_role(&user, &[Role::Admin])?;

    let ride_count = ride_stats_service.count_rides_since(query.since).await?;

    Ok(Json(ride_count))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "service": "commutesmart-core",
    }))
}
