use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpCenterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl HelpCenterError {
    /// Server-supplied message, if the API sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            HelpCenterError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The text a view shows for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

pub type Result<T> = std::result::Result<T, HelpCenterError>;
