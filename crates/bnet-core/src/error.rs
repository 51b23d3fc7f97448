//! Error types for Battle.net API operations

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {path}")]
    HttpStatus { status: StatusCode, path: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode response for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response for {path} has no '{field}' field")]
    MissingField { path: String, field: &'static str },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn missing_field(path: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            path: path.into(),
            field,
        }
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether the error happened while retrieving or decoding a document.
    ///
    /// These are the failures that leave a cache slot untouched: transport
    /// errors, non-success statuses and responses that do not match the
    /// expected schema.
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::HttpStatus { .. }
                | Self::InvalidUrl(_)
                | Self::Decode { .. }
                | Self::MissingField { .. }
        )
    }

    /// HTTP status of the failed request, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_failures() {
        let err = ApiError::HttpStatus {
            status: StatusCode::NOT_FOUND,
            path: "/wow/character/realm/name".to_string(),
        };
        assert!(err.is_retrieval_failure());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        assert!(ApiError::missing_field("/wow/pet/", "pets").is_retrieval_failure());
        assert!(ApiError::InvalidUrl("relative URL without a base".to_string()).is_retrieval_failure());
    }

    #[test]
    fn test_query_errors_are_not_retrieval_failures() {
        assert!(!ApiError::UnsupportedLocale("zh_TW".to_string()).is_retrieval_failure());
        assert!(!ApiError::not_found("raid", "Molten Core").is_retrieval_failure());
        assert!(!ApiError::invalid_argument("unknown difficulty").is_retrieval_failure());
        assert_eq!(ApiError::Config("missing".to_string()).status(), None);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::UnsupportedLocale("zh_TW".to_string()).to_string(),
            "Unsupported locale: zh_TW"
        );
        assert_eq!(
            ApiError::not_found("raid", "Molten Core").to_string(),
            "raid not found: Molten Core"
        );
        assert_eq!(
            ApiError::missing_field("/sc2/ladder/1", "ladderMembers").to_string(),
            "Response for /sc2/ladder/1 has no 'ladderMembers' field"
        );
    }
}
