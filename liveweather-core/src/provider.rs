use crate::{Config, FetchError, WeatherRequest, WeatherResult};
use anyhow::Context;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve the location and fetch its current conditions.
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResult, FetchError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider =
        OpenMeteoProvider::from_config(config).context("Failed to build HTTP client")?;

    Ok(Box::new(provider))
}

/// Fetch current weather, collapsing every failure into `None`.
///
/// Timeouts, network and unexpected errors are passed to `on_error` before
/// `None` is returned, for the caller to show [`FetchError::user_message`].
/// `NotFound` is not reported; the caller decides how to present a missing
/// result.
pub async fn fetch_weather<F>(
    provider: &dyn WeatherProvider,
    request: &WeatherRequest,
    mut on_error: F,
) -> Option<WeatherResult>
where
    F: FnMut(&FetchError),
{
    match provider.get_weather(request).await {
        Ok(result) => {
            tracing::info!(
                city = %request.city,
                country = %request.country,
                description = %result.description,
                "Fetched current weather"
            );
            Some(result)
        }
        Err(err) => {
            if err.is_reportable() {
                tracing::warn!(
                    city = %request.city,
                    country = %request.country,
                    "Weather fetch failed: {err}"
                );
                on_error(&err);
            } else {
                tracing::info!(
                    city = %request.city,
                    country = %request.country,
                    "No weather found"
                );
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct Canned(Mutex<Option<Result<WeatherResult, FetchError>>>);

    impl Canned {
        fn new(res: Result<WeatherResult, FetchError>) -> Self {
            Self(Mutex::new(Some(res)))
        }
    }

    #[async_trait]
    impl WeatherProvider for Canned {
        async fn get_weather(&self, _: &WeatherRequest) -> Result<WeatherResult, FetchError> {
            self.0.lock().unwrap().take().expect("called once")
        }
    }

    fn sample() -> WeatherResult {
        WeatherResult::from_observation(
            "Oslo".into(),
            Some(-3.0),
            None,
            None,
            Some(71),
            String::new(),
        )
    }

    #[tokio::test]
    async fn success_passes_result_through() {
        let provider = Canned::new(Ok(sample()));
        let mut reported = Vec::new();
        let res = fetch_weather(&provider, &WeatherRequest::new("Oslo", "Norway"), |e| {
            reported.push(e.user_message())
        })
        .await;

        assert_eq!(res, Some(sample()));
        assert!(reported.is_empty());
    }

    #[tokio::test]
    async fn not_found_is_silent() {
        let provider = Canned::new(Err(FetchError::NotFound));
        let mut reported = Vec::new();
        let res = fetch_weather(&provider, &WeatherRequest::new("Nowhere", "Norway"), |e| {
            reported.push(e.user_message())
        })
        .await;

        assert!(res.is_none());
        assert!(reported.is_empty());
    }

    #[tokio::test]
    async fn transport_errors_are_reported_and_collapse_to_none() {
        for err in [
            FetchError::Timeout,
            FetchError::Network("refused".into()),
            FetchError::Unexpected("bad body".into()),
        ] {
            let expected = err.user_message();
            let provider = Canned::new(Err(err));
            let mut reported = Vec::new();
            let res = fetch_weather(&provider, &WeatherRequest::new("Oslo", "Norway"), |e| {
                reported.push(e.user_message())
            })
            .await;

            assert!(res.is_none());
            assert_eq!(reported, [expected]);
        }
    }

    #[test]
    fn provider_from_default_config_builds() {
        assert!(provider_from_config(&Config::default()).is_ok());
    }
}
