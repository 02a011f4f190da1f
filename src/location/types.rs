//! Core types for the location subsystem.

use serde::Deserialize;

/// Localized versions of a place name, keyed by language.
///
/// Absent entries mean the geocoder had no name in that language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocalizedNames {
    #[serde(default)]
    pub fi: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl LocalizedNames {
    pub fn finnish(&self) -> Option<&str> {
        self.fi.as_deref()
    }

    pub fn english(&self) -> Option<&str> {
        self.en.as_deref()
    }
}

/// One match returned by a geocoding lookup.
///
/// Ordering within a result list is significant: it defines the 1-based
/// numbers shown to the user when disambiguating.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodingCandidate {
    #[serde(rename = "name")]
    pub primary_name: String,
    #[serde(default, rename = "local_names")]
    pub localized_names: LocalizedNames,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "country")]
    pub country_code: String,
    /// Subdivision code (e.g. US state). Only present for some countries.
    #[serde(default, rename = "state")]
    pub region_code: Option<String>,
}

impl GeocodingCandidate {
    pub fn new(primary_name: impl Into<String>, latitude: f64, longitude: f64, country_code: impl Into<String>) -> Self {
        Self {
            primary_name: primary_name.into(),
            localized_names: LocalizedNames::default(),
            latitude,
            longitude,
            country_code: country_code.into(),
            region_code: None,
        }
    }

    pub fn with_finnish(mut self, name: impl Into<String>) -> Self {
        self.localized_names.fi = Some(name.into());
        self
    }

    pub fn with_english(mut self, name: impl Into<String>) -> Self {
        self.localized_names.en = Some(name.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region_code = Some(region.into());
        self
    }
}

/// The single candidate chosen after disambiguation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub candidate: GeocodingCandidate,
    /// Zero-based position in the candidate list the user chose from.
    pub index: usize,
}
