use crate::config::{FileConfig, ProxySettings};
use crate::core::adapter::InvocationEvent;
use crate::utils::error::{ProxyError, Result};
use clap::Parser;
use std::collections::HashMap;

#[derive(Debug, Clone, Parser)]
#[command(name = "weather-proxy")]
#[command(about = "Invoke the weather/soil/geocode proxy locally")]
pub struct CliConfig {
    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(long, default_value = "/health")]
    pub path: String,

    /// Query parameter as key=value, repeatable
    #[arg(long = "query", short = 'q')]
    pub query: Vec<String>,

    #[arg(long, help = "TOML file with upstream/routing overrides")]
    pub config: Option<String>,

    #[arg(long, env = "SOILGRIDS_URL")]
    pub soilgrids_url: Option<String>,

    #[arg(long, env = "OPEN_METEO_ARCHIVE_URL")]
    pub open_meteo_archive_url: Option<String>,

    #[arg(long, env = "NOMINATIM_URL")]
    pub nominatim_url: Option<String>,

    #[arg(long, env = "OPENWEATHER_URL")]
    pub openweather_url: Option<String>,

    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub openweather_api_key: Option<String>,

    #[arg(long, env = "ROUTE_BASE_PATH")]
    pub base_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then flags/environment.
    pub fn settings(&self) -> Result<ProxySettings> {
        let mut settings = ProxySettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path);
            FileConfig::from_file(path)?.apply_to(&mut settings);
        }

        let overrides = [
            (&mut settings.soilgrids_url, &self.soilgrids_url),
            (&mut settings.open_meteo_archive_url, &self.open_meteo_archive_url),
            (&mut settings.nominatim_url, &self.nominatim_url),
            (&mut settings.openweather_url, &self.openweather_url),
            (&mut settings.base_path, &self.base_path),
        ];
        for (target, value) in overrides {
            if let Some(v) = value {
                target.clone_from(v);
            }
        }

        if self.openweather_api_key.is_some() {
            settings.openweather_api_key.clone_from(&self.openweather_api_key);
        }

        Ok(settings)
    }

    pub fn event(&self) -> Result<InvocationEvent> {
        let mut params = HashMap::new();
        for pair in &self.query {
            let (key, value) =
                pair.split_once('=')
                    .ok_or_else(|| ProxyError::InvalidConfigValueError {
                        field: "query".to_string(),
                        value: pair.clone(),
                        reason: "Expected key=value".to_string(),
                    })?;
            params.insert(key.to_string(), value.to_string());
        }

        Ok(InvocationEvent {
            http_method: Some(self.method.clone()),
            path: Some(self.path.clone()),
            query_string_parameters: Some(params),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["weather-proxy"];
        argv.extend_from_slice(args);
        CliConfig::parse_from(argv)
    }

    #[test]
    fn test_event_from_query_flags() {
        let cli = parse(&["--path", "/soil", "-q", "lat=10.5", "--query", "lon=-3"]);
        let event = cli.event().unwrap();
        let params = event.query_string_parameters.unwrap();

        assert_eq!(event.path.as_deref(), Some("/soil"));
        assert_eq!(params.get("lat").map(String::as_str), Some("10.5"));
        assert_eq!(params.get("lon").map(String::as_str), Some("-3"));
    }

    #[test]
    fn test_malformed_query_flag() {
        let cli = parse(&["--query", "lat"]);
        assert!(cli.event().is_err());
    }

    #[test]
    fn test_flag_overrides_default() {
        let cli = parse(&["--nominatim-url", "http://127.0.0.1:1/search"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.nominatim_url, "http://127.0.0.1:1/search");
    }
}
