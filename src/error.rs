use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopdeskError {
    /// Transport failure before a response was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; the message is taken from the response body when
    /// one is present, else derived from the status line.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ShopdeskError {
    /// HTTP status code of the failed response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShopdeskError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopdeskError>;
