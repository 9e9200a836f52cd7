use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codes;

/// A user-selected `(country, city)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
    pub country: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

/// Current conditions for one location, built fresh on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// Display name as canonicalized by the geocoder.
    pub name: String,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// km/h.
    pub wind_speed: Option<f64>,
    /// Degrees.
    pub wind_direction: Option<f64>,
    pub description: String,
    pub icon: String,
    pub media: String,
    /// Observation time exactly as reported upstream.
    pub observed_at: String,
}

impl WeatherResult {
    /// Assemble a result, deriving description, icon and media from the weather code.
    pub fn from_observation(
        name: String,
        temperature: Option<f64>,
        wind_speed: Option<f64>,
        wind_direction: Option<f64>,
        weather_code: Option<i64>,
        observed_at: String,
    ) -> Self {
        let description = weather_code.map(codes::describe).unwrap_or(codes::UNKNOWN);

        Self {
            name,
            temperature,
            wind_speed,
            wind_direction,
            description: description.to_string(),
            icon: codes::icon_for(description).to_string(),
            media: codes::media_for(description).to_string(),
            observed_at,
        }
    }
}

/// Formats an optional reading, printing `N/A` when upstream omitted it.
#[derive(Debug, Clone, Copy)]
pub struct Reading(pub Option<f64>);

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("N/A"),
        }
    }
}
