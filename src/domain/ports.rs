use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

pub trait ConfigProvider: Send + Sync {
    fn soilgrids_url(&self) -> &str;
    fn open_meteo_archive_url(&self) -> &str;
    fn nominatim_url(&self) -> &str;
    fn openweather_url(&self) -> &str;
    fn openweather_api_key(&self) -> Option<&str>;
    fn base_path(&self) -> &str;
}

/// Outbound JSON fetches against third-party services.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GET `url` and decode the body as JSON. Non-2xx statuses are errors;
    /// `service` names the dependency in logs and error values.
    async fn get_json(&self, service: &'static str, url: Url) -> Result<serde_json::Value>;
}
