pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{FileConfig, ProxySettings};

pub use adapters::ReqwestUpstream;
pub use core::{
    adapter::{InvocationEvent, ResponseEnvelope},
    router::Route,
    service::ProxyService,
};
pub use domain::model::{GeocodeResult, MonthlyRainfall, SoilSample, SoilSource, WeatherSnapshot};
pub use utils::error::{ProxyError, Result};

use utils::validation::Validate;

/// Validate `settings` once at startup. A missing weather key is returned as
/// a warning value since only `/weather` depends on it; anything else is fatal.
pub fn check_settings(settings: &ProxySettings) -> Result<Option<ProxyError>> {
    match settings.validate() {
        Ok(()) => Ok(None),
        Err(e @ ProxyError::MissingConfigError { .. }) => Ok(Some(e)),
        Err(e) => Err(e),
    }
}
