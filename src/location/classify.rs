//! Location Classification
//!
//! Turns the geocoder's first candidate into a `LocationProfile`. Every
//! function here is a pure derivation from explicit inputs: the same
//! (latitude, longitude, city, country) always yields the same profile.
//!
//! Coordinates are not range-checked; out-of-range values simply fall
//! through the tables (callers own validation).

use super::regions::{COASTAL_REGIONS, HIGH_ELEVATION_REGIONS, MAJOR_CITIES, REGION_BOXES};
use super::types::*;

/// Upper bounds of the climate bands (inclusive)
pub const TROPICAL_MAX_LAT: f64 = 23.5;
pub const SUBTROPICAL_MAX_LAT: f64 = 35.0;
pub const TEMPERATE_MAX_LAT: f64 = 60.0;

/// Build a profile from a geocoder candidate.
///
/// `query` is the place string that was geocoded; it becomes the display
/// name when the provider returns no formatted address.
pub fn classify(candidate: &GeocodeCandidate, query: &str) -> LocationProfile {
    let name = candidate
        .formatted_address
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(query)
        .to_string();

    LocationProfile {
        name,
        coordinates: Coordinates {
            latitude: candidate.latitude,
            longitude: candidate.longitude,
        },
        city: candidate.city.clone(),
        state: candidate.state.clone(),
        country: candidate.country.clone(),
        country_code: candidate.country_code.clone(),
        climate: classify_climate(candidate.latitude),
        urbanization: classify_urbanization(candidate.city.as_deref()),
        geography: classify_geography(candidate.latitude, candidate.longitude),
    }
}

/// Latitude band, lower bound inclusive (23.5 is still tropical)
pub fn classify_climate(latitude: f64) -> Climate {
    let lat = latitude.abs();

    if lat <= TROPICAL_MAX_LAT {
        Climate::Tropical
    } else if lat <= SUBTROPICAL_MAX_LAT {
        Climate::Subtropical
    } else if lat <= TEMPERATE_MAX_LAT {
        Climate::Temperate
    } else {
        Climate::Polar
    }
}

/// Case-insensitive substring match against the major-metro list, in
/// either direction ("Greater London" and "York" both hit).
pub fn classify_urbanization(city: Option<&str>) -> Urbanization {
    let city = match city.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_lowercase(),
        _ => return Urbanization::Unknown,
    };

    let is_major = MAJOR_CITIES.iter().any(|major| {
        let major = major.to_lowercase();
        city.contains(&major) || major.contains(&city)
    });

    if is_major {
        Urbanization::High
    } else {
        Urbanization::Medium
    }
}

pub fn classify_geography(latitude: f64, longitude: f64) -> Geography {
    Geography {
        coastal: is_coastal(latitude, longitude),
        elevation: classify_elevation(latitude, longitude),
        region: classify_region(latitude, longitude),
    }
}

/// Any coastal box match; overlapping boxes do not compound
pub fn is_coastal(latitude: f64, longitude: f64) -> bool {
    COASTAL_REGIONS
        .iter()
        .any(|region| region.contains(latitude, longitude))
}

pub fn classify_elevation(latitude: f64, longitude: f64) -> Elevation {
    if HIGH_ELEVATION_REGIONS
        .iter()
        .any(|region| region.contains_strict(latitude, longitude))
    {
        Elevation::High
    } else {
        Elevation::LowMedium
    }
}

/// First matching region box in table order, else `Unknown`
pub fn classify_region(latitude: f64, longitude: f64) -> Region {
    REGION_BOXES
        .iter()
        .find(|(_, bbox)| bbox.contains(latitude, longitude))
        .map(|(region, _)| *region)
        .unwrap_or(Region::Unknown)
}
