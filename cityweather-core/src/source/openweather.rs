use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{Config, FetchError, WeatherRecord};

use super::WeatherSource;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key()?;
        Self::new(api_key.to_owned(), config.base_url(), config.timeout())
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let url = format!("{}{CURRENT_WEATHER_PATH}", self.base_url);
        debug!(city, "requesting current weather");

        // `without_url` keeps the appid query parameter out of error messages.
        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn parse_current(body: &str) -> Result<WeatherRecord, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(FetchError::NoConditions)?;

    Ok(WeatherRecord::new(
        condition.description,
        parsed.main.temp,
        parsed.main.humidity,
        parsed.wind.speed,
        Some(condition.icon),
    ))
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyCity);
        }

        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn clear_sky() -> serde_json::Value {
        json!({
            "coord": { "lon": 74.3436, "lat": 31.5497 },
            "weather": [
                { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
            ],
            "main": { "temp": 21.5, "feels_like": 20.9, "humidity": 40, "pressure": 1012 },
            "wind": { "speed": 3.2, "deg": 310 },
            "name": "Lahore",
            "cod": 200
        })
    }

    fn client_for(server: &MockServer) -> OpenWeatherClient {
        OpenWeatherClient::new("TEST_KEY".into(), &server.uri(), Duration::from_secs(5))
            .expect("client")
    }

    #[tokio::test]
    async fn success_maps_every_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CURRENT_WEATHER_PATH))
            .and(query_param("q", "Lahore"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky()))
            .expect(1)
            .mount(&server)
            .await;

        let record = client_for(&server).current_weather("Lahore").await.expect("record");

        assert_eq!(record.description(), "clear sky");
        assert_eq!(record.icon_code(), Some("01d"));
        assert_eq!(record.temperature_c(), 21.5);
        assert_eq!(record.humidity_pct(), 40);
        assert_eq!(record.wind_speed_mps(), 3.2);
    }

    #[tokio::test]
    async fn not_found_status_is_an_error_and_collapses_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CURRENT_WEATHER_PATH))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "cod": "404", "message": "city not found" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.current_weather("Atlantis").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Status);
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("city not found"));

        assert!(crate::fetch_weather(&client, "Atlantis").await.is_none());
    }

    #[tokio::test]
    async fn missing_wind_yields_no_partial_record() {
        let mut body = clear_sky();
        body.as_object_mut().expect("object").remove("wind");

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.current_weather("Lahore").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Malformed);
        assert!(crate::fetch_weather(&client, "Lahore").await.is_none());
    }

    #[tokio::test]
    async fn mistyped_field_is_malformed() {
        let mut body = clear_sky();
        body["main"]["temp"] = json!("warm");

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = client_for(&server).current_weather("Lahore").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).current_weather("Lahore").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Malformed);
    }

    #[tokio::test]
    async fn empty_weather_array_is_rejected() {
        let mut body = clear_sky();
        body["weather"] = json!([]);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = client_for(&server).current_weather("Lahore").await.unwrap_err();
        assert!(matches!(err, FetchError::NoConditions));
    }

    #[tokio::test]
    async fn city_names_with_spaces_and_accents_are_encoded() {
        let server = MockServer::start().await;
        for city in ["Dera Ghazi Khan", "São Paulo"] {
            Mock::given(method("GET"))
                .and(path(CURRENT_WEATHER_PATH))
                .and(query_param("q", city))
                .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky()))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        assert!(client.current_weather("Dera Ghazi Khan").await.is_ok());
        assert!(client.current_weather("São Paulo").await.is_ok());
    }

    #[tokio::test]
    async fn blank_city_is_rejected_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky()))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).current_weather("   ").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidInput);
    }

    #[tokio::test]
    async fn slow_response_times_out_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(clear_sky())
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client =
            OpenWeatherClient::new("TEST_KEY".into(), &server.uri(), Duration::from_millis(50))
                .expect("client");
        let err = client.current_weather("Lahore").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Network);
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error_without_key_in_message() {
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            format!("http://{}", listener.local_addr().expect("addr"))
        };

        let client = OpenWeatherClient::new("SECRET".into(), &uri, Duration::from_secs(2))
            .expect("client");
        let err = client.current_weather("Lahore").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Network);
        let chain = format!("{err:?}");
        assert!(!chain.contains("SECRET"));
    }

    #[test]
    fn trailing_slash_in_base_url_is_dropped() {
        let client =
            OpenWeatherClient::new("K".into(), "http://localhost:1/", Duration::from_secs(1))
                .expect("client");
        assert_eq!(client.base_url, "http://localhost:1");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
