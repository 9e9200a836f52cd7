//! Failure taxonomy for a weather fetch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Geocoder matched nothing, or the forecast had no current conditions.
    #[error("location not found or no current weather available")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    /// DNS failure, refused connection, non-2xx status.
    #[error("network error: {0}")]
    Network(String),

    /// Malformed body or missing required fields.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// User-facing message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => {
                "City not found or weather unavailable. Try another city.".to_string()
            }
            Self::Timeout => {
                "⏳ Request timed out. Please check your internet connection.".to_string()
            }
            Self::Network(cause) => format!("⚠️ Network error: {cause}"),
            Self::Unexpected(cause) => format!("🚨 Unexpected error: {cause}"),
        }
    }

    /// Whether the failure is shown as an error at the time it happens.
    /// `NotFound` is a legitimate outcome and is left to the caller.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Unexpected(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_distinct_per_tier() {
        let timeout = FetchError::Timeout.user_message();
        let network = FetchError::Network("connection refused".into()).user_message();
        let unexpected = FetchError::Unexpected("bad json".into()).user_message();

        assert!(timeout.contains("timed out"));
        assert!(network.starts_with("⚠️ Network error: "));
        assert!(network.ends_with("connection refused"));
        assert!(unexpected.starts_with("🚨 Unexpected error: "));
        assert!(unexpected.ends_with("bad json"));
    }

    #[test]
    fn not_found_is_not_reportable() {
        assert!(!FetchError::NotFound.is_reportable());
        assert!(FetchError::Timeout.is_reportable());
        assert!(FetchError::Network(String::new()).is_reportable());
        assert!(FetchError::Unexpected(String::new()).is_reportable());
    }

    #[test]
    fn json_errors_are_unexpected() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Unexpected(_)));
    }
}
