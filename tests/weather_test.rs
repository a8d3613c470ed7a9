mod common;

use common::{get, live_service, settings_for, CountingUpstream, API_KEY};
use httpmock::prelude::*;
use serde_json::json;
use weather_proxy::{ProxyService, ProxySettings, ReqwestUpstream};

#[tokio::test]
async fn test_current_conditions() {
    let server = MockServer::start();
    let weather_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/2.5/weather")
            .query_param("lat", "52.52")
            .query_param("lon", "13.405")
            .query_param("appid", API_KEY)
            .query_param("units", "metric");
        then.status(200).json_body(json!({
            "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
            "main": {"temp": 11.5, "humidity": 87},
            "wind": {"speed": 3.6},
            "name": "Berlin"
        }));
    });

    let service = live_service(&server);
    let response = service
        .handle(get("/weather", &[("lat", "52.52"), ("lon", "13.405")]))
        .await;

    weather_mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.json_body(),
        Some(json!({
            "temperature": 11.5,
            "humidity": 87.0,
            "description": "light rain",
            "wind_speed": 3.6,
            "location": "Berlin"
        }))
    );
}

#[tokio::test]
async fn test_missing_key_makes_no_outbound_call() {
    let server = MockServer::start();
    let weather_mock = server.mock(|when, then| {
        when.method(GET).path("/data/2.5/weather");
        then.status(200).json_body(json!({}));
    });

    let client = reqwest::Client::builder()
        .user_agent("weather-proxy-tests")
        .build()
        .unwrap();
    let service = ProxyService::new(
        settings_for(&server, None),
        ReqwestUpstream::with_client(client),
    );
    let response = service
        .handle(get("/weather", &[("lat", "52.52"), ("lon", "13.405")]))
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.json_body(),
        Some(json!({"error": "OpenWeather API key not configured"}))
    );
    weather_mock.assert_hits(0);
}

#[tokio::test]
async fn test_missing_key_counting_upstream() {
    let upstream = CountingUpstream::replying(json!({"main": {"temp": 1.0, "humidity": 2.0}}));
    let service = ProxyService::new(ProxySettings::default(), upstream);

    let response = service
        .handle(get("/weather", &[("lat", "1.5"), ("lon", "2.5")]))
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(service.upstream().calls(), 0);
}

#[tokio::test]
async fn test_invalid_key_is_upstream_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/2.5/weather");
        then.status(401)
            .json_body(json!({"cod": 401, "message": "Invalid API key"}));
    });

    let service = live_service(&server);
    let response = service
        .handle(get("/weather", &[("lat", "52.52"), ("lon", "13.405")]))
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.json_body(),
        Some(json!({"error": "Weather data fetch failed"}))
    );
}
