use crate::domain::model::HealthStatus;
use chrono::{SecondsFormat, Utc};

pub fn health() -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
