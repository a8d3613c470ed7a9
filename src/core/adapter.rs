//! Invocation adapter: turns the host's function-invocation event into a
//! [`ProxyRequest`], runs the matching handler and wraps the outcome in a
//! response envelope carrying CORS and cache headers.

use crate::core::router::Route;
use crate::core::service::ProxyService;
use crate::domain::model::ProxyRequest;
use crate::domain::ports::{ConfigProvider, Upstream};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

pub const NOT_FOUND: &str = "Not found";

/// API Gateway / Netlify style event. Absent fields mean `GET /` with no
/// query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl InvocationEvent {
    pub fn into_request(self) -> ProxyRequest {
        ProxyRequest {
            method: self
                .http_method
                .map(|m| m.trim().to_ascii_uppercase())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "GET".to_string()),
            path: self.path.unwrap_or_else(|| "/".to_string()),
            query: self.query_string_parameters.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ResponseEnvelope {
    pub fn empty(status_code: u16) -> Self {
        Self::with_body(status_code, String::new())
    }

    pub fn json(status_code: u16, body: &serde_json::Value) -> Self {
        Self::with_body(status_code, body.to_string())
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &json!({ "error": message }))
    }

    fn with_body(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: default_headers(),
            body,
            is_base64_encoded: false,
        }
    }

    /// Body decoded as JSON, `None` for the empty preflight body.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

fn default_headers() -> BTreeMap<String, String> {
    [
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "Content-Type"),
        ("Access-Control-Allow-Methods", "GET, OPTIONS"),
        ("Cache-Control", "no-store"),
        ("Content-Type", "application/json"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl<C: ConfigProvider, U: Upstream> ProxyService<C, U> {
    pub async fn handle(&self, event: InvocationEvent) -> ResponseEnvelope {
        let req = event.into_request();
        tracing::info!("{} {}", req.method, req.path);

        // CORS preflight never reaches a handler
        if req.method == "OPTIONS" {
            return ResponseEnvelope::empty(200);
        }

        let route = match Route::resolve(&req.path, self.config().base_path()) {
            Some(route) if req.method == "GET" => route,
            _ => {
                tracing::warn!("No route for {} {}", req.method, req.path);
                return ResponseEnvelope::error(404, NOT_FOUND);
            }
        };

        match self.dispatch(route, &req).await {
            Ok(body) => ResponseEnvelope::json(200, &body),
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!("{} rejected: {}", route.name(), e);
                } else {
                    tracing::error!("{} failed: {}", route.name(), e);
                }
                ResponseEnvelope::error(e.status_code(), &e.public_message())
            }
        }
    }
}
