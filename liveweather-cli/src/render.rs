//! Human-friendly output.

use liveweather_core::{Reading, WeatherResult};

pub const SPLASH: &str = "\n        🌤️\n  Welcome to Live Weather\n";
pub const SELECTED_BADGE: &str = "  ✨ Selected!";
pub const LOADING: &str = "☀️  Fetching live weather...";

/// Result panel for one fetch.
pub fn panel(w: &WeatherResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", w.icon, w.name));
    out.push_str(&format!("  [{}]\n", w.media));
    out.push_str(&format!("  Temperature (°C): {}°C\n", Reading(w.temperature)));
    out.push_str(&format!("  Wind (km/h):      {} km/h\n", Reading(w.wind_speed)));
    out.push_str(&format!("  Wind Dir (°):     {}°\n", Reading(w.wind_direction)));
    out.push_str(&format!("  Condition: {}\n", w.description));
    out.push_str(&format!("  Observed at: {}", w.observed_at));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_shows_every_field() {
        let w = WeatherResult::from_observation(
            "Tokyo".into(),
            Some(22.5),
            Some(10.0),
            Some(180.0),
            Some(1),
            "2024-01-01T12:00".into(),
        );
        let text = panel(&w);

        assert!(text.starts_with("🌤 Tokyo\n"));
        assert!(text.contains("[gifs/sunny.gif]"));
        assert!(text.contains("22.5°C"));
        assert!(text.contains("10 km/h"));
        assert!(text.contains("180°"));
        assert!(text.contains("Condition: Mainly clear"));
        assert!(text.ends_with("Observed at: 2024-01-01T12:00"));
    }

    #[test]
    fn panel_marks_missing_readings() {
        let w = WeatherResult::from_observation("X".into(), None, None, None, None, String::new());
        let text = panel(&w);
        assert!(text.contains("N/A°C"));
        assert!(text.contains("N/A km/h"));
        assert!(text.contains("Condition: Unknown"));
    }
}
