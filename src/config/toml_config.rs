use crate::config::ProxySettings;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML overrides for local runs.
///
/// ```toml
/// [upstream]
/// nominatim_url = "http://localhost:9000/search"
///
/// [routing]
/// base_path = "/api"
///
/// [weather]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub upstream: Option<UpstreamConfig>,
    pub routing: Option<RoutingConfig>,
    pub weather: Option<WeatherConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub soilgrids_url: Option<String>,
    pub open_meteo_archive_url: Option<String>,
    pub nominatim_url: Option<String>,
    pub openweather_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    pub base_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overwrite every field of `settings` the file sets.
    pub fn apply_to(&self, settings: &mut ProxySettings) {
        if let Some(upstream) = &self.upstream {
            overwrite(&mut settings.soilgrids_url, &upstream.soilgrids_url);
            overwrite(
                &mut settings.open_meteo_archive_url,
                &upstream.open_meteo_archive_url,
            );
            overwrite(&mut settings.nominatim_url, &upstream.nominatim_url);
            overwrite(&mut settings.openweather_url, &upstream.openweather_url);
        }

        if let Some(routing) = &self.routing {
            overwrite(&mut settings.base_path, &routing.base_path);
        }

        if let Some(key) = self.weather.as_ref().and_then(|w| w.api_key.clone()) {
            settings.openweather_api_key = Some(key);
        }
    }
}

fn overwrite(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        target.clone_from(v);
    }
}
