//! Core library for the `liveweather` CLI.
//!
//! This crate defines:
//! - The WMO weather code tables (description, icon, media)
//! - The two-step fetch (geocode, then current weather) behind a provider trait
//! - The location catalog, configuration and notification side channel
//!
//! It is used by `liveweather-cli`, but can also be reused by other front ends.

pub mod catalog;
pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod provider;

pub use catalog::LocationCatalog;
pub use config::Config;
pub use error::FetchError;
pub use model::{Reading, WeatherRequest, WeatherResult};
pub use notify::{DesktopNotifier, NoopNotifier, Notification, Notifier};
pub use provider::{OpenMeteoProvider, WeatherProvider, fetch_weather};
