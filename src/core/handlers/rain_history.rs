use crate::core::handlers::{build_url, coordinates, round_to};
use crate::domain::model::{DailyPrecipitation, MonthlyRainfall, ProxyRequest};
use crate::domain::ports::{ConfigProvider, Upstream};
use crate::utils::error::{ProxyError, Result};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::Deserialize;

pub const RAIN_HISTORY_FAILED: &str = "Rain history fetch failed";

pub const HISTORY_START_DATE: &str = "2023-01-01";
pub const HISTORY_END_DATE: &str = "2023-12-31";

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: ArchiveDaily,
}

// Entries are kept as raw values so one null or malformed day cannot fail
// the whole series.
#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    time: Vec<serde_json::Value>,
    #[serde(default)]
    precipitation_sum: Option<Vec<serde_json::Value>>,
}

impl ArchiveDaily {
    fn into_days(self) -> Vec<DailyPrecipitation> {
        let mut sums = self.precipitation_sum.unwrap_or_default().into_iter();
        self.time
            .into_iter()
            .map(|time| DailyPrecipitation {
                time: match time {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                },
                precipitation_sum: sums.next(),
            })
            .collect()
    }
}

pub async fn rain_history<C, U>(
    req: &ProxyRequest,
    config: &C,
    upstream: &U,
) -> Result<Vec<MonthlyRainfall>>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let (lat, lon) = coordinates(req)?;

    let days = fetch_daily(config, upstream, lat, lon)
        .await
        .map_err(|e| ProxyError::upstream(RAIN_HISTORY_FAILED, e))?;

    tracing::debug!("Aggregating {} days of precipitation", days.len());
    Ok(aggregate_monthly(&days))
}

async fn fetch_daily<C, U>(
    config: &C,
    upstream: &U,
    lat: f64,
    lon: f64,
) -> Result<Vec<DailyPrecipitation>>
where
    C: ConfigProvider + ?Sized,
    U: Upstream + ?Sized,
{
    let url = build_url(
        config.open_meteo_archive_url(),
        &[
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("start_date", HISTORY_START_DATE.to_string()),
            ("end_date", HISTORY_END_DATE.to_string()),
            ("daily", "precipitation_sum".to_string()),
            ("timezone", "auto".to_string()),
        ],
    )?;

    let body = upstream.get_json("open-meteo", url).await?;
    let response: ArchiveResponse = serde_json::from_value(body)?;
    Ok(response.daily.into_days())
}

/// Sum daily totals into calendar months, Jan..Dec, one decimal.
///
/// Days with an unparseable date are skipped. Missing, non-numeric or
/// negative totals count as zero.
pub fn aggregate_monthly(days: &[DailyPrecipitation]) -> Vec<MonthlyRainfall> {
    let mut buckets = [0.0f64; 12];

    for day in days {
        let Some(date) = day.time.as_deref().and_then(parse_day) else {
            tracing::debug!("Skipping unparseable date: {:?}", day.time);
            continue;
        };
        let amount = day
            .precipitation_sum
            .as_ref()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0);
        buckets[date.month0() as usize] += amount;
    }

    MONTHS
        .iter()
        .zip(buckets)
        .map(|(month, total)| MonthlyRainfall {
            month: month.to_string(),
            rainfall: round_to(total, 1),
        })
        .collect()
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
