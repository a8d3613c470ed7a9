use crate::core::handlers::{build_url, coordinates};
use crate::domain::model::{ProxyRequest, WeatherSnapshot};
use crate::domain::ports::{ConfigProvider, Upstream};
use crate::utils::error::{ProxyError, Result};
use serde::Deserialize;

pub const WEATHER_FETCH_FAILED: &str = "Weather data fetch failed";

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    main: OpenWeatherMain,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    wind: Option<OpenWeatherWind>,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherWind {
    #[serde(default)]
    speed: f64,
}

impl From<OpenWeatherResponse> for WeatherSnapshot {
    fn from(response: OpenWeatherResponse) -> Self {
        WeatherSnapshot {
            temperature: response.main.temp,
            humidity: response.main.humidity,
            description: response
                .weather
                .into_iter()
                .next()
                .map(|c| c.description)
                .unwrap_or_default(),
            wind_speed: response.wind.map(|w| w.speed).unwrap_or_default(),
            location: response.name,
        }
    }
}

/// Current conditions in metric units. Without an API key no request is made.
pub async fn weather<C, U>(req: &ProxyRequest, config: &C, upstream: &U) -> Result<WeatherSnapshot>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let (lat, lon) = coordinates(req)?;

    let api_key = config
        .openweather_api_key()
        .ok_or(ProxyError::MissingConfigError {
            field: "openweather_api_key",
            description: "OpenWeather API key",
        })?;

    fetch_current(config, upstream, api_key, lat, lon)
        .await
        .map_err(|e| ProxyError::upstream(WEATHER_FETCH_FAILED, e))
}

async fn fetch_current<C, U>(
    config: &C,
    upstream: &U,
    api_key: &str,
    lat: f64,
    lon: f64,
) -> Result<WeatherSnapshot>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let url = build_url(
        config.openweather_url(),
        &[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", api_key.to_string()),
            ("units", "metric".to_string()),
        ],
    )?;

    let body = upstream.get_json("openweather", url).await?;
    let response: OpenWeatherResponse = serde_json::from_value(body)?;
    Ok(response.into())
}
