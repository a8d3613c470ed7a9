#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_key, validate_base_path, validate_url, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::FileConfig;

pub const DEFAULT_SOILGRIDS_URL: &str = "https://rest.isric.org/soilgrids/v2.0/properties/query";
pub const DEFAULT_OPEN_METEO_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_BASE_PATH: &str = "/.netlify/functions/api";

/// Fully resolved proxy configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxySettings {
    pub soilgrids_url: String,
    pub open_meteo_archive_url: String,
    pub nominatim_url: String,
    pub openweather_url: String,
    pub openweather_api_key: Option<String>,
    pub base_path: String,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            soilgrids_url: DEFAULT_SOILGRIDS_URL.to_string(),
            open_meteo_archive_url: DEFAULT_OPEN_METEO_ARCHIVE_URL.to_string(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            openweather_url: DEFAULT_OPENWEATHER_URL.to_string(),
            openweather_api_key: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl ConfigProvider for ProxySettings {
    fn soilgrids_url(&self) -> &str {
        &self.soilgrids_url
    }

    fn open_meteo_archive_url(&self) -> &str {
        &self.open_meteo_archive_url
    }

    fn nominatim_url(&self) -> &str {
        &self.nominatim_url
    }

    fn openweather_url(&self) -> &str {
        &self.openweather_url
    }

    fn openweather_api_key(&self) -> Option<&str> {
        self.openweather_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Validate for ProxySettings {
    /// Endpoint problems are reported before the API key so that a
    /// `MissingConfigError` always means everything else is usable.
    fn validate(&self) -> Result<()> {
        validate_url("soilgrids_url", &self.soilgrids_url)?;
        validate_url("open_meteo_archive_url", &self.open_meteo_archive_url)?;
        validate_url("nominatim_url", &self.nominatim_url)?;
        validate_url("openweather_url", &self.openweather_url)?;
        validate_base_path("base_path", &self.base_path)?;

        validate_api_key(
            "openweather_api_key",
            "OpenWeather API key",
            self.openweather_api_key.as_deref(),
        )?;

        tracing::debug!("Proxy configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProxyError;

    #[test]
    fn test_defaults_pass_except_api_key() {
        let settings = ProxySettings::default();
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ProxyError::MissingConfigError {
                field: "openweather_api_key",
                ..
            }
        ));
    }

    #[test]
    fn test_complete_settings_validate() {
        let settings = ProxySettings {
            openweather_api_key: Some("abc".to_string()),
            ..ProxySettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bad_url_reported_before_missing_key() {
        let settings = ProxySettings {
            nominatim_url: "not a url".to_string(),
            ..ProxySettings::default()
        };
        assert!(matches!(
            settings.validate().unwrap_err(),
            ProxyError::InvalidConfigValueError { .. }
        ));
    }

    #[test]
    fn test_blank_key_is_treated_as_absent() {
        let settings = ProxySettings {
            openweather_api_key: Some("  ".to_string()),
            ..ProxySettings::default()
        };
        assert_eq!(settings.openweather_api_key(), None);
    }
}
