//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::distance::QueryError;

use super::dto::*;
use super::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/:id", get(get_station))
        .route("/lines", get(list_lines))
        .route("/lines/:id", get(get_line))
        .route("/transit/distance", get(get_distance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
pub(super) async fn health() -> &'static str {
    "ok"
}

/// List every station, or search by name when `q` is given.
pub(super) async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let stations = match req.q.as_deref() {
        Some(q) => {
            let limit = req
                .limit
                .unwrap_or(DEFAULT_SEARCH_LIMIT)
                .min(MAX_SEARCH_LIMIT);
            state
                .catalog
                .search_by_name(q, limit)
                .into_iter()
                .map(StationResult::from_station)
                .collect()
        }
        None => state
            .catalog
            .all_stations()
            .values()
            .map(StationResult::from_station)
            .collect(),
    };

    Json(StationSearchResponse { stations })
}

pub(super) async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    state
        .catalog
        .station(&id)
        .map(|s| Json(StationResult::from_station(s)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station: {id}"),
        })
}

pub(super) async fn list_lines(State(state): State<AppState>) -> Json<LineListResponse> {
    let lines = state
        .catalog
        .all_lines()
        .values()
        .map(LineResult::from_line)
        .collect();
    Json(LineListResponse { lines })
}

pub(super) async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LineResult>, AppError> {
    state
        .catalog
        .line(&id)
        .map(|l| Json(LineResult::from_line(l)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown line: {id}"),
        })
}

/// Stops between the inspector's station and the user.
///
/// The user is identified by `userStationId`, or by `userLat` and `userLon`
/// resolved to the nearest station.
pub(super) async fn get_distance(
    State(state): State<AppState>,
    Query(req): Query<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    let inspector = req
        .inspector_station_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Missing inspectorStationId".into(),
        })?;

    let hops = match (req.user_station_id.as_deref(), req.user_lat, req.user_lon) {
        (Some(user), _, _) => state.service.get_distance(inspector, user)?,
        (None, Some(lat), Some(lon)) => {
            state.service.get_distance_to_position(inspector, lat, lon)?
        }
        _ => {
            return Err(AppError::BadRequest {
                message: "Missing userStationId or userLat/userLon".into(),
            });
        }
    };

    Ok(Json(hops.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::UnknownStation(_)
            | QueryError::StationNotOnAnyLine(_)
            | QueryError::InvalidCoordinates(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            QueryError::DataIntegrity(_) | QueryError::Internal(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
