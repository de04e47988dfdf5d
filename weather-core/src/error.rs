use reqwest::StatusCode;
use thiserror::Error;

use crate::model::{GENERIC_ERROR, UNAVAILABLE_ERROR, WeatherFailure};

/// Everything that can go wrong while talking to the provider.
///
/// Never leaves the crate as an error value: [`FetchError::into_failure`]
/// turns it into the message shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("location not found by provider")]
    NotFound,

    #[error("provider responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Stored without its URL, which carries the API key.
    #[error("request to provider failed")]
    Transport(reqwest::Error),

    #[error("failed to parse provider response")]
    Decode(#[from] serde_json::Error),

    #[error("provider response has no weather conditions")]
    MissingConditions,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}

impl FetchError {
    /// `location` is the text the user typed, before normalization.
    pub fn into_failure(self, location: &str) -> WeatherFailure {
        match self {
            FetchError::NotFound => WeatherFailure::not_found(location),
            FetchError::UnexpectedStatus { .. } => WeatherFailure::new(UNAVAILABLE_ERROR),
            FetchError::Transport(_) | FetchError::Decode(_) | FetchError::MissingConditions => {
                WeatherFailure::new(GENERIC_ERROR)
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn not_found_mentions_user_input() {
        let failure = FetchError::NotFound.into_failure("Nowhere, OR");

        assert!(failure.error.contains("Nowhere, OR"));
        assert!(failure.suggestion.is_some());
    }

    #[test]
    fn unexpected_status_hides_provider_body() {
        let err = FetchError::UnexpectedStatus {
            status: StatusCode::UNAUTHORIZED,
            body: "{\"cod\":401,\"message\":\"Invalid API key\"}".into(),
        };
        let failure = err.into_failure("Portland");

        assert_eq!(failure.error, UNAVAILABLE_ERROR);
        assert!(failure.suggestion.is_none());
    }

    #[test]
    fn decode_error_is_generic() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();

        assert_eq!(err.into_failure("Portland").error, GENERIC_ERROR);
        assert_eq!(FetchError::MissingConditions.into_failure("x").error, GENERIC_ERROR);
    }

    #[tokio::test]
    async fn transport_error_does_not_carry_api_key() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/data/2.5/weather")
            .query(&[("q", "Portland,US"), ("appid", "SECRET_KEY"), ("units", "imperial")])
            .timeout(Duration::from_millis(500))
            .send()
            .await
            .unwrap_err();
        assert!(format!("{err:?}").contains("SECRET_KEY"));

        let err = FetchError::from(err);

        assert!(!format!("{err:?}").contains("SECRET_KEY"));
        assert!(!format!("{err}").contains("SECRET_KEY"));
        assert_eq!(err.into_failure("Portland").error, GENERIC_ERROR);
    }
}
