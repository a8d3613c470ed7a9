use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("{service} responded with status {status}")]
    UpstreamStatusError { service: &'static str, status: u16 },

    #[error("{message}: {source}")]
    UpstreamError {
        message: &'static str,
        #[source]
        source: Box<ProxyError>,
    },

    #[error("{message}")]
    MissingParameterError { message: &'static str },

    #[error("{message}: {value}")]
    InvalidParameterError { message: &'static str, value: String },

    #[error("{message}")]
    NotFoundError { message: &'static str },

    #[error("{description} not configured")]
    MissingConfigError {
        field: &'static str,
        description: &'static str,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl ProxyError {
    /// Wrap any failure of an outbound call in the capability-level message
    /// that is shown to callers.
    pub fn upstream(message: &'static str, source: ProxyError) -> Self {
        ProxyError::UpstreamError {
            message,
            source: Box::new(source),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::MissingParameterError { .. } | ProxyError::InvalidParameterError { .. } => {
                400
            }
            ProxyError::NotFoundError { .. } => 404,
            _ => 500,
        }
    }

    /// Message placed in the `{"error": ...}` body. Upstream failures hide
    /// their cause behind the capability message.
    pub fn public_message(&self) -> String {
        match self {
            ProxyError::UpstreamError { message, .. } => (*message).to_string(),
            ProxyError::InvalidParameterError { message, .. } => (*message).to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
