//! WMO weather code lookup tables.
//!
//! Three immutable tables, built once on first access:
//! - code → description
//! - description → icon glyph
//! - description → media asset path
//!
//! Lookups never fail. Unmapped codes describe as [`UNKNOWN`], and any
//! description missing from the icon/media tables (including [`UNKNOWN`])
//! resolves to [`FALLBACK_ICON`] / [`FALLBACK_MEDIA`].

use std::{collections::HashMap, sync::LazyLock};

/// Description used for codes that are not in the table.
pub const UNKNOWN: &str = "Unknown";

/// Icon shown when a description has no dedicated glyph.
pub const FALLBACK_ICON: &str = "🌈";

/// Media asset shown when a description has no dedicated asset.
pub const FALLBACK_MEDIA: &str = "gifs/sunny.gif";

const SUNNY: &str = "gifs/sunny.gif";
const CLOUDY: &str = "gifs/cloudy.gif";
const RAIN: &str = "gifs/rain.gif";
const SNOW: &str = "gifs/snow.gif";
const THUNDER: &str = "gifs/thunderstorm.gif";

static DESCRIPTIONS: LazyLock<HashMap<i64, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "Clear"),
        (1, "Mainly clear"),
        (2, "Partly cloudy"),
        (3, "Overcast"),
        (45, "Fog"),
        (48, "Depositing rime fog"),
        (51, "Light drizzle"),
        (53, "Moderate drizzle"),
        (55, "Dense drizzle"),
        (61, "Slight rain"),
        (63, "Moderate rain"),
        (65, "Heavy rain"),
        (71, "Light snow"),
        (73, "Moderate snow"),
        (75, "Heavy snow"),
        (80, "Light rain showers"),
        (81, "Moderate rain showers"),
        (82, "Violent rain showers"),
        (95, "Thunderstorm"),
        (99, "Severe thunderstorm"),
    ])
});

static ICONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Clear", "☀️"),
        ("Mainly clear", "🌤"),
        ("Partly cloudy", "⛅️"),
        ("Overcast", "☁️"),
        ("Fog", "🌫"),
        ("Light drizzle", "🌦"),
        ("Moderate drizzle", "🌦"),
        ("Dense drizzle", "🌧"),
        ("Slight rain", "🌧"),
        ("Moderate rain", "🌧"),
        ("Heavy rain", "🌧🌧"),
        ("Light snow", "🌨"),
        ("Moderate snow", "🌨❄️"),
        ("Heavy snow", "❄️❄️"),
        ("Thunderstorm", "⛈"),
        ("Severe thunderstorm", "🌩"),
    ])
});

static MEDIA: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Clear", SUNNY),
        ("Mainly clear", SUNNY),
        ("Partly cloudy", CLOUDY),
        ("Overcast", CLOUDY),
        ("Fog", CLOUDY),
        ("Light drizzle", RAIN),
        ("Moderate drizzle", RAIN),
        ("Dense drizzle", RAIN),
        ("Slight rain", RAIN),
        ("Moderate rain", RAIN),
        ("Heavy rain", RAIN),
        ("Light snow", SNOW),
        ("Moderate snow", SNOW),
        ("Heavy snow", SNOW),
        ("Thunderstorm", THUNDER),
        ("Severe thunderstorm", THUNDER),
    ])
});

/// Human description for a WMO weather code, or [`UNKNOWN`].
pub fn describe(code: i64) -> &'static str {
    DESCRIPTIONS.get(&code).copied().unwrap_or(UNKNOWN)
}

/// Display glyph for a description, or [`FALLBACK_ICON`].
pub fn icon_for(description: &str) -> &'static str {
    ICONS.get(description).copied().unwrap_or(FALLBACK_ICON)
}

/// Media asset path for a description, or [`FALLBACK_MEDIA`].
pub fn media_for(description: &str) -> &'static str {
    MEDIA.get(description).copied().unwrap_or(FALLBACK_MEDIA)
}
