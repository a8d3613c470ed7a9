use crate::core::handlers::{geocode, health, rain_history, soil, weather};
use crate::core::router::Route;
use crate::domain::model::ProxyRequest;
use crate::domain::ports::{ConfigProvider, Upstream};
use crate::utils::error::Result;
use serde::Serialize;

/// Configuration and upstream client, built once per cold start and shared
/// read-only across invocations.
pub struct ProxyService<C: ConfigProvider, U: Upstream> {
    config: C,
    upstream: U,
}

impl<C: ConfigProvider, U: Upstream> ProxyService<C, U> {
    pub fn new(config: C, upstream: U) -> Self {
        Self { config, upstream }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Run the handler for `route` and serialize its payload.
    pub async fn dispatch(&self, route: Route, req: &ProxyRequest) -> Result<serde_json::Value> {
        tracing::debug!("Dispatching {} with {} params", route.name(), req.query.len());

        match route {
            Route::Health => to_json(health::health()),
            Route::Soil => to_json(soil::soil(req, &self.config, &self.upstream).await?),
            Route::RainHistory => {
                to_json(rain_history::rain_history(req, &self.config, &self.upstream).await?)
            }
            Route::Geocode => to_json(geocode::geocode(req, &self.config, &self.upstream).await?),
            Route::Weather => to_json(weather::weather(req, &self.config, &self.upstream).await?),
        }
    }
}

fn to_json<T: Serialize>(payload: T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(payload)?)
}
