use crate::domain::ports::Upstream;
use crate::utils::error::{ProxyError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

// Nominatim's usage policy rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("weather-proxy/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ReqwestUpstream {
    client: Client,
}

impl ReqwestUpstream {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for ReqwestUpstream {
    async fn get_json(&self, service: &'static str, url: Url) -> Result<serde_json::Value> {
        tracing::debug!("Requesting {}: {}", service, redact(&url));
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", service, status);

        if !status.is_success() {
            return Err(ProxyError::UpstreamStatusError {
                service,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Strip `appid` before a URL reaches the logs.
fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "appid") {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
