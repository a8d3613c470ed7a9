#![allow(dead_code)]

use async_trait::async_trait;
use httpmock::MockServer;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;
use weather_proxy::domain::ports::Upstream;
use weather_proxy::{InvocationEvent, ProxyError, ProxyService, ProxySettings, ReqwestUpstream};

pub const API_KEY: &str = "test-key";

/// Settings pointing every upstream at the mock server.
pub fn settings_for(server: &MockServer, api_key: Option<&str>) -> ProxySettings {
    ProxySettings {
        soilgrids_url: server.url("/soilgrids/v2.0/properties/query"),
        open_meteo_archive_url: server.url("/v1/archive"),
        nominatim_url: server.url("/search"),
        openweather_url: server.url("/data/2.5/weather"),
        openweather_api_key: api_key.map(str::to_string),
        ..ProxySettings::default()
    }
}

pub fn live_service(server: &MockServer) -> ProxyService<ProxySettings, ReqwestUpstream> {
    ProxyService::new(
        settings_for(server, Some(API_KEY)),
        ReqwestUpstream::new().unwrap(),
    )
}

pub fn get(path: &str, params: &[(&str, &str)]) -> InvocationEvent {
    request("GET", path, params)
}

pub fn request(method: &str, path: &str, params: &[(&str, &str)]) -> InvocationEvent {
    let query: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    InvocationEvent {
        http_method: Some(method.to_string()),
        path: Some(path.to_string()),
        query_string_parameters: Some(query),
    }
}

/// In-process upstream that counts calls and replays a canned result.
pub struct CountingUpstream {
    calls: AtomicUsize,
    response: Option<serde_json::Value>,
}

impl CountingUpstream {
    pub fn replying(response: serde_json::Value) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Some(response),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Upstream for CountingUpstream {
    async fn get_json(
        &self,
        service: &'static str,
        _url: Url,
    ) -> weather_proxy::Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or(ProxyError::UpstreamStatusError {
                service,
                status: 503,
            })
    }
}
