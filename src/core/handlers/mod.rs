//! Route handlers. Each takes the typed request plus its collaborators and
//! returns the response payload or a [`ProxyError`].
//!
//! Coordinates that are present but not finite numbers (`abc`, `NaN`, `inf`)
//! get their own 400, `Invalid lat/lon`, instead of `Missing lat/lon`: they
//! are rejected before any upstream URL is built and never reach the soil
//! mock formula.

pub mod geocode;
pub mod health;
pub mod rain_history;
pub mod soil;
pub mod weather;

use crate::domain::model::ProxyRequest;
use crate::utils::error::{ProxyError, Result};
use url::Url;

pub const MISSING_COORDINATES: &str = "Missing lat/lon";
pub const INVALID_COORDINATES: &str = "Invalid lat/lon";

/// Required `lat`/`lon` pair. Both must be present and finite.
pub fn coordinates(req: &ProxyRequest) -> Result<(f64, f64)> {
    let (lat, lon) = match (req.param("lat"), req.param("lon")) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(ProxyError::MissingParameterError {
                message: MISSING_COORDINATES,
            })
        }
    };

    Ok((parse_coordinate(lat)?, parse_coordinate(lon)?))
}

fn parse_coordinate(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProxyError::InvalidParameterError {
            message: INVALID_COORDINATES,
            value: raw.to_string(),
        })
}

/// Base URL with query pairs appended in order (repeated keys allowed).
pub(crate) fn build_url(base: &str, pairs: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    Ok(url)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
