use thiserror::Error;

/// Message shown to the user whenever the catalog could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Something went wrong...";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint {url} answered with status {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Malformed catalog data: {message}")]
    MalformedCatalog { message: String },

    #[error("Catalog load task failed: {message}")]
    TaskFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::MalformedCatalog {
            message: err.to_string(),
        }
    }
}

impl StoreError {
    /// Errors that end the catalog load for the session.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            StoreError::Http(_)
                | StoreError::UnexpectedStatus { .. }
                | StoreError::MalformedCatalog { .. }
                | StoreError::TaskFailed { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        if self.is_load_failure() {
            return LOAD_FAILURE_MESSAGE.to_string();
        }

        match self {
            StoreError::Io(e) => format!("Could not read a file: {}", e),
            StoreError::TomlParse(_) => "The configuration file is not valid TOML".to_string(),
            StoreError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_load_failure() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
