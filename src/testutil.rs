//! In-process stand-in for the Open-Meteo geocoding and forecast APIs.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::Barrier;

use crate::tools::WeatherTools;
use crate::weather::{GeocodingClient, WeatherService};

/// A city known to the mock geocoder, with its current conditions
#[derive(Debug, Clone)]
pub struct MockPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub timezone: String,
    pub current: Value,
    /// Held before answering a forecast request for this place
    pub delay: Option<Duration>,
}

impl MockPlace {
    pub fn new(name: &str, latitude: f64, longitude: f64, temperature: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            country: "Testlandia".to_string(),
            timezone: "UTC".to_string(),
            current: json!({
                "time": "2026-10-19T12:00",
                "interval": 900,
                "temperature_2m": temperature,
                "apparent_temperature": temperature - 1.0,
                "relative_humidity_2m": 55,
                "wind_speed_10m": 9.7,
                "weather_code": 1,
                "is_day": 1
            }),
            delay: None,
        }
    }

    pub fn in_country(mut self, country: &str, timezone: &str) -> Self {
        self.country = country.to_string();
        self.timezone = timezone.to_string();
        self
    }

    pub fn with_current(mut self, current: Value) -> Self {
        self.current = current;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Seven aligned days starting 2026-10-19
pub fn sample_daily() -> Value {
    json!({
        "time": [
            "2026-10-19", "2026-10-20", "2026-10-21", "2026-10-22",
            "2026-10-23", "2026-10-24", "2026-10-25"
        ],
        "temperature_2m_max": [19.6, 20.1, 18.4, 17.0, 21.5, 22.2, 20.0],
        "temperature_2m_min": [11.2, 12.0, 10.4, 9.6, 12.5, 13.1, 12.0],
        "precipitation_probability_max": [20, 35, 80, 100, 5, 0, 10],
        "weather_code": [2, 3, 61, 65, 1, 0, 45]
    })
}

#[derive(Clone)]
struct MockState {
    places: Arc<Vec<MockPlace>>,
    geocoding_status: StatusCode,
    forecast_status: StatusCode,
    daily: Arc<Value>,
    geocoding_body: Option<Arc<Value>>,
    forecast_barrier: Option<Arc<Barrier>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockState {
    fn record(&self, uri: &Uri) {
        let entry = match uri.query() {
            Some(query) => format!("{}?{}", uri.path(), query),
            None => uri.path().to_string(),
        };
        self.requests.lock().unwrap().push(entry);
    }
}

pub struct MockUpstreamBuilder {
    places: Vec<MockPlace>,
    geocoding_status: StatusCode,
    forecast_status: StatusCode,
    daily: Value,
    geocoding_body: Option<Value>,
    forecast_barrier: Option<usize>,
}

impl MockUpstreamBuilder {
    pub fn place(mut self, place: MockPlace) -> Self {
        self.places.push(place);
        self
    }

    pub fn geocoding_status(mut self, status: StatusCode) -> Self {
        self.geocoding_status = status;
        self
    }

    pub fn forecast_status(mut self, status: StatusCode) -> Self {
        self.forecast_status = status;
        self
    }

    pub fn daily(mut self, daily: Value) -> Self {
        self.daily = daily;
        self
    }

    /// Answer every geocoding request with this body verbatim
    pub fn geocoding_body(mut self, body: Value) -> Self {
        self.geocoding_body = Some(body);
        self
    }

    /// Hold forecast requests until `parties` of them are in flight at once
    pub fn forecast_barrier(mut self, parties: usize) -> Self {
        self.forecast_barrier = Some(parties);
        self
    }

    pub async fn spawn(self) -> MockUpstream {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            places: Arc::new(self.places),
            geocoding_status: self.geocoding_status,
            forecast_status: self.forecast_status,
            daily: Arc::new(self.daily),
            geocoding_body: self.geocoding_body.map(Arc::new),
            forecast_barrier: self.forecast_barrier.map(|parties| Arc::new(Barrier::new(parties))),
            requests: Arc::clone(&requests),
        };

        let app = Router::new()
            .route("/v1/search", get(search))
            .route("/v1/forecast", get(forecast))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        MockUpstream { addr, requests }
    }
}

pub struct MockUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn builder() -> MockUpstreamBuilder {
        MockUpstreamBuilder {
            places: Vec::new(),
            geocoding_status: StatusCode::OK,
            forecast_status: StatusCode::OK,
            daily: sample_daily(),
            geocoding_body: None,
            forecast_barrier: None,
        }
    }

    pub fn geocoding_url(&self) -> String {
        format!("http://{}/v1/search", self.addr)
    }

    pub fn forecast_url(&self) -> String {
        format!("http://{}/v1/forecast", self.addr)
    }

    /// Path and query of every request received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("test http client")
    }

    pub fn geocoding(&self) -> GeocodingClient {
        GeocodingClient::new(Self::client(), &self.geocoding_url())
    }

    pub fn service(&self) -> WeatherService {
        WeatherService::new(Self::client(), &self.geocoding_url(), &self.forecast_url())
    }

    pub fn tools(&self) -> WeatherTools {
        WeatherTools::new(Arc::new(self.service()))
    }
}

async fn search(
    State(state): State<MockState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.record(&uri);
    if state.geocoding_status != StatusCode::OK {
        return state.geocoding_status.into_response();
    }
    if let Some(body) = &state.geocoding_body {
        return Json(body.as_ref().clone()).into_response();
    }

    let name = params.get("name").map(String::as_str).unwrap_or_default();
    let results: Vec<Value> = state
        .places
        .iter()
        .filter(|place| place.name.eq_ignore_ascii_case(name))
        .map(|place| {
            json!({
                "id": 1,
                "name": place.name,
                "latitude": place.latitude,
                "longitude": place.longitude,
                "country": place.country,
                "timezone": place.timezone,
            })
        })
        .collect();

    if results.is_empty() {
        Json(json!({ "generationtime_ms": 0.5 })).into_response()
    } else {
        Json(json!({ "results": results, "generationtime_ms": 0.5 })).into_response()
    }
}

async fn forecast(
    State(state): State<MockState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.record(&uri);
    if let Some(barrier) = &state.forecast_barrier {
        barrier.wait().await;
    }
    if state.forecast_status != StatusCode::OK {
        return state.forecast_status.into_response();
    }

    if params.contains_key("daily") {
        return Json(json!({ "timezone": "UTC", "daily": state.daily.as_ref() })).into_response();
    }

    let latitude: Option<f64> = params.get("latitude").and_then(|lat| lat.parse().ok());
    let Some(place) = state
        .places
        .iter()
        .find(|place| Some(place.latitude) == latitude)
    else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    if let Some(delay) = place.delay {
        tokio::time::sleep(delay).await;
    }
    Json(json!({ "timezone": place.timezone, "current": place.current })).into_response()
}
