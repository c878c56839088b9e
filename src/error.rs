use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Any non-200 answer from one of the Sleeper endpoints.
    #[error("Failed to fetch {resource}. Status code: {status}")]
    ApiFetch { resource: String, status: u16 },

    #[error("Request to Sleeper API failed: {0}")]
    Network(#[from] reqwest::Error),

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned unexpected data: {message} (URL: {url})")]
    ApiParse { message: String, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a fetch error for a resource that answered with a non-200 status
    pub fn api_fetch(resource: impl Into<String>, status: u16) -> Self {
        Self::ApiFetch {
            resource: resource.into(),
            status,
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a parse error for a body that didn't match the expected shape
    pub fn api_parse(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiParse {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Status code of a failed fetch, if this error came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::ApiFetch { status, .. } => Some(*status),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
