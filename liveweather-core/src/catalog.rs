//! Country → cities reference data, loaded once at startup.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::{fs, path::Path};

/// Read-only mapping from country name to an ordered list of city names.
///
/// Countries keep the order they appear in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl LocationCatalog {
    /// Load the catalog from a JSON file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read location catalog: {}", path.display()))?;

        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse location catalog: {}", path.display()))?;

        tracing::debug!(
            countries = catalog.len(),
            "Loaded location catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        // Parsed through a Map so country order follows the file.
        let raw: Map<String, Value> =
            serde_json::from_str(json).context("Catalog must be a JSON object")?;

        let entries = raw
            .into_iter()
            .map(|(country, cities)| -> Result<(String, Vec<String>)> {
                let cities: Vec<String> = serde_json::from_value(cities).with_context(|| {
                    format!("Cities for '{country}' must be an array of strings")
                })?;
                Ok((country, cities))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(country, _)| country.as_str())
    }

    /// Cities for a country, empty when the country is unknown.
    pub fn cities(&self, country: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, cities)| cities.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, country: &str, city: &str) -> bool {
        self.cities(country).iter().any(|c| c == city)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Japan": ["Tokyo", "Osaka", "Kyoto"],
        "Brazil": ["São Paulo", "Rio de Janeiro"],
        "Austria": ["Vienna"]
    }"#;

    #[test]
    fn preserves_country_and_city_order() {
        let catalog = LocationCatalog::from_json(SAMPLE).unwrap();
        let countries: Vec<_> = catalog.countries().collect();
        assert_eq!(countries, ["Japan", "Brazil", "Austria"]);
        assert_eq!(catalog.cities("Japan"), ["Tokyo", "Osaka", "Kyoto"]);
    }

    #[test]
    fn unknown_country_has_no_cities() {
        let catalog = LocationCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.cities("Atlantis").is_empty());
        assert!(!catalog.contains("Atlantis", "Tokyo"));
        assert!(catalog.contains("Brazil", "São Paulo"));
    }

    #[test]
    fn rejects_non_object() {
        assert!(LocationCatalog::from_json("[1, 2]").is_err());
    }

    #[test]
    fn rejects_non_string_cities() {
        let err = LocationCatalog::from_json(r#"{"Japan": [1, 2]}"#).unwrap_err();
        assert!(format!("{err:#}").contains("Japan"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries_cities.json");
        let err = LocationCatalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read location catalog"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries_cities.json");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = LocationCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }
}
