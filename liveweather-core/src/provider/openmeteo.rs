use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

use crate::{
    config::Config,
    error::FetchError,
    model::{WeatherRequest, WeatherResult},
};

use super::WeatherProvider;

/// Open-Meteo geocoding + current weather.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    geocoding_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.geocoding_url, &config.forecast_url, config.timeout())
    }

    async fn geocode(&self, request: &WeatherRequest) -> Result<GeoResult, FetchError> {
        let body: GeoResponse = self
            .get_json(
                &self.geocoding_url,
                &[
                    ("name", request.city.as_str()),
                    ("count", "1"),
                    ("country", request.country.as_str()),
                ],
            )
            .await?;

        body.results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(FetchError::NotFound)
    }

    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<OmCurrent, FetchError> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();

        let body: ForecastResponse = self
            .get_json(
                &self.forecast_url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current_weather", "true"),
                    ("timezone", "auto"),
                ],
            )
            .await?;

        body.current_weather.ok_or(FetchError::NotFound)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        tracing::debug!(url, ?query, "GET");

        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "{} returned status {}: {}",
                url,
                status,
                truncate_body(&body),
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<OmCurrent>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    winddirection: Option<f64>,
    weathercode: Option<i64>,
    time: Option<String>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResult, FetchError> {
        let place = self.geocode(request).await?;
        let name = place.name.unwrap_or_else(|| request.city.clone());
        tracing::debug!(%name, place.latitude, place.longitude, "Geocoded");

        let cw = self.current_weather(place.latitude, place.longitude).await?;

        Ok(WeatherResult::from_observation(
            name,
            cw.temperature,
            cw.windspeed,
            cw.winddirection,
            cw.weathercode,
            cw.time.unwrap_or_default(),
        ))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_response_without_results_field() {
        let body: GeoResponse = serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(body.results.is_none());
    }

    #[test]
    fn geocode_result_requires_coordinates() {
        let res = serde_json::from_str::<GeoResponse>(r#"{"results": [{"name": "Tokyo"}]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn current_weather_fields_are_optional() {
        let body: ForecastResponse =
            serde_json::from_str(r#"{"current_weather": {"temperature": 1.5}}"#).unwrap();
        let cw = body.current_weather.unwrap();
        assert_eq!(cw.temperature, Some(1.5));
        assert!(cw.weathercode.is_none());
        assert!(cw.time.is_none());
    }

    #[test]
    fn truncate_long_body() {
        let long = "é".repeat(300);
        let t = truncate_body(&long);
        assert!(t.ends_with("..."));
        assert_eq!(t.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
