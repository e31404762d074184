//! HTTP route tests against in-memory providers

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use travelplanner::models::{FlightLeg, FlightPayload, NewsArticle, SafetyPayload, WeatherPayload};
use travelplanner::{
    FlightProvider, ProviderDomain, ProviderTimeouts, Result, SafetyProvider, TravelPlanner,
    TravelPlannerError, VERSION, WeatherProvider, api,
};

struct StubWeather;

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload> {
        Ok(WeatherPayload {
            location: city.to_string(),
            temperature_f: Some(90.0),
            condition_text: Some("Sunny".to_string()),
            humidity: Some(45.0),
            wind_mph: Some(4.0),
        })
    }
}

struct StubSafety;

#[async_trait]
impl SafetyProvider for StubSafety {
    async fn fetch_safety(&self, city: &str) -> Result<SafetyPayload> {
        let article = |title: String| NewsArticle {
            title,
            description: None,
            published_at: None,
            url: None,
            source: Some("Wire".to_string()),
        };
        Ok(SafetyPayload {
            articles: vec![
                article(format!("{city} police investigate robbery")),
                article(format!("{city} marathon breaks records")),
            ],
            total_results: 2,
        })
    }
}

struct StubFlights {
    available: bool,
}

#[async_trait]
impl FlightProvider for StubFlights {
    async fn fetch_flights(&self, city: &str) -> Result<FlightPayload> {
        if !self.available {
            return Err(TravelPlannerError::provider(
                ProviderDomain::Flights,
                format!("no airport code found for {city}"),
            ));
        }
        let flights = ["Air Canada", "WestJet", "Unknown", "Air Canada", "Porter"]
            .iter()
            .map(|airline| FlightLeg {
                airline: Some((*airline).to_string()),
                status: Some("scheduled".to_string()),
                ..FlightLeg::default()
            })
            .collect();
        Ok(FlightPayload {
            airport_code: "YYZ".to_string(),
            flights,
        })
    }
}

fn app(flights_available: bool) -> axum::Router {
    let planner = TravelPlanner::new(
        Arc::new(StubWeather),
        Arc::new(StubSafety),
        Arc::new(StubFlights {
            available: flights_available,
        }),
        ProviderTimeouts::default(),
    );
    api::router(Arc::new(planner))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_root_reports_version() {
    let (status, body) = get(app(true), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], VERSION);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_recommend_returns_composite_result() {
    let (status, body) = get(app(true), "/recommend?city=Toronto").await;
    assert_eq!(status, StatusCode::OK);

    // weather 20 + 40 + 20, safety 100 - 5 - 1, flights 30 + 15 + 30
    assert_eq!(body["destination"], "Toronto");
    assert_eq!(body["weather"]["score"], 80);
    assert_eq!(body["safety"]["score"], 94);
    assert_eq!(body["safety"]["risk_level"], "Low");
    assert_eq!(body["flights"]["availability_score"], 75);
    assert_eq!(body["composite_score"], 84);
    assert_eq!(body["recommendation"], "Excellent destination");
    assert_eq!(
        body["summary"],
        "Toronto offers excellent weather (sunny, 90°F), a strong safety record (Low risk), and 5 available flights."
    );
}

#[tokio::test]
async fn test_single_domain_routes() {
    let (status, body) = get(app(true), "/weather?city=Toronto").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 80);

    let (status, body) = get(app(true), "/safety?city=Toronto").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article_count"], 1);

    let (status, body) = get(app(true), "/flights?city=Toronto").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unique_airlines"], 3);
}

#[tokio::test]
async fn test_provider_failure_is_server_error() {
    let (status, body) = get(app(false), "/recommend?city=Atlantis").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INCOMPLETE_DATA");
    assert_eq!(
        body["detail"],
        "Failed to fetch complete data: Flights: no airport code found for Atlantis"
    );
}

#[tokio::test]
async fn test_missing_or_blank_city_is_bad_request() {
    for uri in ["/recommend", "/recommend?city=", "/weather?city=%20%20"] {
        let (status, body) = get(app(true), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], "INVALID_INPUT");
    }
}
