use crate::core::handlers::{build_url, coordinates, round_to};
use crate::domain::model::{ProxyRequest, SoilSample, SoilSource};
use crate::domain::ports::{ConfigProvider, Upstream};
use crate::utils::error::{ProxyError, Result};
use serde::Deserialize;
use url::Url;

pub const SOIL_FETCH_FAILED: &str = "Soil data fetch failed";

/// Van Bemmelen factor: organic carbon to organic matter.
pub const ORGANIC_CARBON_TO_MATTER: f64 = 1.724;

const DEFAULT_PH: f64 = 6.5;
const DEFAULT_NITROGEN: f64 = 0.15;
const DEFAULT_ORGANIC_CARBON: f64 = 1.5;

#[derive(Debug, Deserialize)]
struct SoilGridsResponse {
    properties: Option<SoilGridsProperties>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsProperties {
    #[serde(default)]
    layers: Vec<SoilGridsLayer>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsLayer {
    name: String,
    #[serde(default)]
    depths: Vec<SoilGridsDepth>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsDepth {
    values: Option<SoilGridsValues>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsValues {
    mean: Option<f64>,
}

impl SoilGridsResponse {
    /// Mean of the shallowest depth band of the named layer.
    fn layer_mean(&self, name: &str) -> Option<f64> {
        self.properties
            .as_ref()?
            .layers
            .iter()
            .find(|layer| layer.name == name)?
            .depths
            .first()?
            .values
            .as_ref()?
            .mean
    }
}

/// Live soil reading, falling back to [`mock_soil`] whenever SoilGrids fails.
pub async fn soil<C, U>(req: &ProxyRequest, config: &C, upstream: &U) -> Result<SoilSample>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let (lat, lon) = coordinates(req)?;

    let url = build_url(
        config.soilgrids_url(),
        &[
            ("lon", lon.to_string()),
            ("lat", lat.to_string()),
            ("property", "phh2o".to_string()),
            ("property", "soc".to_string()),
            ("property", "nitrogen".to_string()),
            ("depth", "0-5cm".to_string()),
            ("value", "mean".to_string()),
        ],
    )
    .map_err(|e| ProxyError::upstream(SOIL_FETCH_FAILED, e))?;

    match fetch_soilgrids(upstream, url).await {
        Ok(sample) => Ok(sample),
        Err(e) => {
            // every primary-path failure lands here, including decode errors
            tracing::warn!("SoilGrids unavailable, using mock soil data: {}", e);
            Ok(mock_soil(lat, lon))
        }
    }
}

async fn fetch_soilgrids<U: Upstream + ?Sized>(upstream: &U, url: Url) -> Result<SoilSample> {
    let body = upstream.get_json("soilgrids", url).await?;
    let response: SoilGridsResponse = serde_json::from_value(body)?;

    let ph = response.layer_mean("phh2o").unwrap_or(DEFAULT_PH);
    let nitrogen = response.layer_mean("nitrogen").unwrap_or(DEFAULT_NITROGEN);
    let organic_carbon = response.layer_mean("soc").unwrap_or(DEFAULT_ORGANIC_CARBON);

    Ok(SoilSample {
        ph: round_to(ph, 2),
        nitrogen,
        organic_matter: organic_carbon * ORGANIC_CARBON_TO_MATTER,
        source: SoilSource::Soilgrids,
    })
}

/// Deterministic synthetic reading derived from the coordinates.
///
/// `hash = |sin(lat * lon) * 10000|` feeds each property through a modulus,
/// keeping `ph` in `[5.5, 8.5)`, `nitrogen` in `[0.1, 0.3)` and
/// `organic_matter` in `[1.0, 4.0)`.
pub fn mock_soil(lat: f64, lon: f64) -> SoilSample {
    let hash = ((lat * lon).sin() * 10000.0).abs();

    SoilSample {
        ph: 5.5 + hash % 3.0,
        nitrogen: 0.1 + (hash % 20.0) / 100.0,
        organic_matter: 1.0 + (hash % 30.0) / 10.0,
        source: SoilSource::Mock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_soil_is_deterministic() {
        assert_eq!(mock_soil(12.97, 77.59), mock_soil(12.97, 77.59));
        assert_ne!(mock_soil(12.97, 77.59), mock_soil(28.61, 77.2));
    }

    #[test]
    fn test_mock_soil_bounds() {
        let mut lat = -89.5;
        while lat < 90.0 {
            let mut lon = -179.5;
            while lon < 180.0 {
                let sample = mock_soil(lat, lon);
                assert!((5.5..8.5).contains(&sample.ph), "ph {}", sample.ph);
                assert!((0.1..0.3).contains(&sample.nitrogen), "n {}", sample.nitrogen);
                assert!(
                    (1.0..4.0).contains(&sample.organic_matter),
                    "om {}",
                    sample.organic_matter
                );
                assert_eq!(sample.source, SoilSource::Mock);
                lon += 7.3;
            }
            lat += 3.1;
        }
    }

    #[test]
    fn test_mock_soil_at_origin() {
        let sample = mock_soil(0.0, 0.0);
        assert_eq!(sample.ph, 5.5);
        assert_eq!(sample.nitrogen, 0.1);
        assert_eq!(sample.organic_matter, 1.0);
    }

    #[test]
    fn test_layer_mean_uses_first_depth() {
        let response: SoilGridsResponse = serde_json::from_value(json!({
            "properties": {
                "layers": [
                    {"name": "phh2o", "depths": [
                        {"values": {"mean": 6.8}},
                        {"values": {"mean": 7.9}}
                    ]},
                    {"name": "soc", "depths": [{"values": {"mean": null}}]}
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.layer_mean("phh2o"), Some(6.8));
        assert_eq!(response.layer_mean("soc"), None);
        assert_eq!(response.layer_mean("nitrogen"), None);
    }
}
