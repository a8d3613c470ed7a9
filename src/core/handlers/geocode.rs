use crate::core::handlers::build_url;
use crate::domain::model::{GeocodeResult, ProxyRequest};
use crate::domain::ports::{ConfigProvider, Upstream};
use crate::utils::error::{ProxyError, Result};
use serde::Deserialize;
use serde_json::Value;

pub const MISSING_QUERY: &str = "Missing query";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const GEOCODING_FAILED: &str = "Geocoding failed";

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: Value,
    lon: Value,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    class: String,
    #[serde(default, rename = "type")]
    kind: String,
}

pub async fn geocode<C, U>(req: &ProxyRequest, config: &C, upstream: &U) -> Result<GeocodeResult>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let query = req.param("q").ok_or(ProxyError::MissingParameterError {
        message: MISSING_QUERY,
    })?;

    let places = search(config, upstream, query)
        .await
        .map_err(|e| ProxyError::upstream(GEOCODING_FAILED, e))?;

    let Some(first) = places.into_iter().next() else {
        tracing::info!("No geocoding match for {:?}", query);
        return Err(ProxyError::NotFoundError {
            message: LOCATION_NOT_FOUND,
        });
    };

    to_result(first).map_err(|e| ProxyError::upstream(GEOCODING_FAILED, e))
}

async fn search<C, U>(config: &C, upstream: &U, query: &str) -> Result<Vec<NominatimPlace>>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let url = build_url(
        config.nominatim_url(),
        &[
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
        ],
    )?;

    let body = upstream.get_json("nominatim", url).await?;
    Ok(serde_json::from_value(body)?)
}

fn to_result(place: NominatimPlace) -> Result<GeocodeResult> {
    Ok(GeocodeResult {
        lat: coordinate("lat", &place.lat)?,
        lon: coordinate("lon", &place.lon)?,
        display_name: place.display_name,
        class: place.class,
        kind: place.kind,
    })
}

/// Nominatim sends coordinates as strings; accept plain numbers as well.
fn coordinate(field: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => other.as_f64(),
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProxyError::ProcessingError {
            message: format!("Unparseable {} in geocoding result: {}", field, value),
        })
}
