use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Typed request handed to every route handler.
#[derive(Debug, Clone, Default)]
pub struct ProxyRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
}

impl ProxyRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.into(),
            query: HashMap::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Non-empty query parameter, trimmed.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoilSource {
    Soilgrids,
    Mock,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilSample {
    pub ph: f64,
    pub nitrogen: f64,
    pub organic_matter: f64,
    pub source: SoilSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRainfall {
    pub month: String,
    pub rainfall: f64,
}

/// One day of the archive's daily series. `time` is `None` when the
/// upstream entry was not a string.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrecipitation {
    pub time: Option<String>,
    pub precipitation_sum: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub class: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub description: String,
    pub wind_speed: f64,
    pub location: String,
}
