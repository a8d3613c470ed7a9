#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Soil,
    RainHistory,
    Geocode,
    Weather,
}

impl Route {
    pub fn resolve(path: &str, base_path: &str) -> Option<Route> {
        match normalize_path(path, base_path).as_str() {
            "/health" => Some(Route::Health),
            "/soil" => Some(Route::Soil),
            "/rain-history" => Some(Route::RainHistory),
            "/geocode" => Some(Route::Geocode),
            "/weather" => Some(Route::Weather),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Health => "health",
            Route::Soil => "soil",
            Route::RainHistory => "rain-history",
            Route::Geocode => "geocode",
            Route::Weather => "weather",
        }
    }
}

/// Strip the function's mount point (`base_path`, then `/api`) and any
/// trailing slash. An empty result becomes `/`.
pub fn normalize_path(path: &str, base_path: &str) -> String {
    let path = path.split('?').next().unwrap_or_default();
    let base = base_path.trim_end_matches('/');

    let mut rest = path;
    if !base.is_empty() {
        rest = strip_segment_prefix(rest, base);
    }
    rest = strip_segment_prefix(rest, "/api");

    let trimmed = rest.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// "/api" must not eat the front of "/apiary".
fn strip_segment_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
