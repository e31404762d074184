//! HTTP routes for travel recommendations

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use crate::models::{CompositeResult, FlightRecord, SafetyRecord, WeatherRecord};
use crate::planner::TravelPlanner;
use crate::{TravelPlannerError, VERSION};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

impl CityQuery {
    fn city(&self) -> Result<&str, ApiError> {
        self.city
            .as_deref()
            .ok_or_else(|| TravelPlannerError::validation("missing required query parameter 'city'").into())
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// Error returned by handlers, rendered as `{"code", "detail"}`
#[derive(Debug)]
pub struct ApiError(TravelPlannerError);

impl From<TravelPlannerError> for ApiError {
    fn from(err: TravelPlannerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TravelPlannerError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Rejected request: {}", self.0);
        }

        let body = json!({
            "code": self.0.code(),
            "detail": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub fn router(planner: Arc<TravelPlanner>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/weather", get(get_weather))
        .route("/safety", get(get_safety))
        .route("/flights", get(get_flights))
        .route("/recommend", get(get_recommendation))
        .with_state(planner)
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Travel planner API".to_string(),
        version: VERSION.to_string(),
    })
}

async fn get_weather(
    State(planner): State<Arc<TravelPlanner>>,
    Query(query): Query<CityQuery>,
) -> ApiResult<WeatherRecord> {
    Ok(Json(planner.weather(query.city()?).await?))
}

async fn get_safety(
    State(planner): State<Arc<TravelPlanner>>,
    Query(query): Query<CityQuery>,
) -> ApiResult<SafetyRecord> {
    Ok(Json(planner.safety(query.city()?).await?))
}

async fn get_flights(
    State(planner): State<Arc<TravelPlanner>>,
    Query(query): Query<CityQuery>,
) -> ApiResult<FlightRecord> {
    Ok(Json(planner.flights(query.city()?).await?))
}

async fn get_recommendation(
    State(planner): State<Arc<TravelPlanner>>,
    Query(query): Query<CityQuery>,
) -> ApiResult<CompositeResult> {
    Ok(Json(planner.recommend(query.city()?).await?))
}
