use crate::config::ProxySettings;

pub const ENV_SOILGRIDS_URL: &str = "SOILGRIDS_URL";
pub const ENV_OPEN_METEO_ARCHIVE_URL: &str = "OPEN_METEO_ARCHIVE_URL";
pub const ENV_NOMINATIM_URL: &str = "NOMINATIM_URL";
pub const ENV_OPENWEATHER_URL: &str = "OPENWEATHER_URL";
pub const ENV_OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const ENV_ROUTE_BASE_PATH: &str = "ROUTE_BASE_PATH";

impl ProxySettings {
    /// Settings for the Lambda/Netlify runtime, read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProxySettings::from_env`] with an injectable lookup, so tests
    /// never touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProxySettings::default();
        let var = |key: &str, default: String| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(default)
        };

        Self {
            soilgrids_url: var(ENV_SOILGRIDS_URL, defaults.soilgrids_url),
            open_meteo_archive_url: var(ENV_OPEN_METEO_ARCHIVE_URL, defaults.open_meteo_archive_url),
            nominatim_url: var(ENV_NOMINATIM_URL, defaults.nominatim_url),
            openweather_url: var(ENV_OPENWEATHER_URL, defaults.openweather_url),
            openweather_api_key: lookup(ENV_OPENWEATHER_API_KEY),
            base_path: var(ENV_ROUTE_BASE_PATH, defaults.base_path),
        }
    }
}
