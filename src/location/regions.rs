//! Static Geography Lookup Tables
//!
//! Rectangular lat/lon boxes used by the classifier. These are coarse
//! approximations, not coastline or elevation data: a point is tested for
//! inclusive membership in each box (`min <= v <= max`) unless noted.
//!
//! Also holds the major-metro name list used for the urbanization proxy.

use super::types::Region;

/// A named, axis-aligned lat/lon rectangle
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub name: &'static str,
    pub lat_range: (f64, f64),
    pub lon_range: (f64, f64),
}

impl BoundingBox {
    /// Inclusive on both ends of both ranges
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.lat_range.0
            && latitude <= self.lat_range.1
            && longitude >= self.lon_range.0
            && longitude <= self.lon_range.1
    }

    /// Exclusive on both ends (used by the elevation boxes)
    pub fn contains_strict(&self, latitude: f64, longitude: f64) -> bool {
        latitude > self.lat_range.0
            && latitude < self.lat_range.1
            && longitude > self.lon_range.0
            && longitude < self.lon_range.1
    }
}

// ============================================================================
// Coastal boxes (any match => coastal)
// ============================================================================

pub static COASTAL_REGIONS: &[BoundingBox] = &[
    BoundingBox { name: "US West Coast", lat_range: (32.0, 49.0), lon_range: (-125.0, -117.0) },
    BoundingBox { name: "US East Coast", lat_range: (25.0, 45.0), lon_range: (-80.0, -67.0) },
    BoundingBox { name: "US Gulf Coast", lat_range: (25.0, 31.0), lon_range: (-98.0, -80.0) },
    BoundingBox { name: "Mediterranean", lat_range: (30.0, 46.0), lon_range: (-6.0, 36.0) },
    BoundingBox { name: "North Sea", lat_range: (51.0, 61.0), lon_range: (-3.0, 12.0) },
];

// ============================================================================
// High-elevation boxes (strict bounds; everything else is low-medium)
// ============================================================================

pub static HIGH_ELEVATION_REGIONS: &[BoundingBox] = &[
    BoundingBox { name: "Rocky Mountains", lat_range: (35.0, 50.0), lon_range: (-125.0, -100.0) },
    BoundingBox { name: "Desert Southwest", lat_range: (25.0, 35.0), lon_range: (-110.0, -100.0) },
];

// ============================================================================
// Continental regions (first match wins, order is significant)
// ============================================================================

pub static REGION_BOXES: &[(Region, BoundingBox)] = &[
    (Region::NorthAmerica, BoundingBox { name: "North America", lat_range: (25.0, 49.0), lon_range: (-125.0, -66.0) }),
    (Region::Europe, BoundingBox { name: "Europe", lat_range: (35.0, 71.0), lon_range: (-10.0, 40.0) }),
    (Region::Asia, BoundingBox { name: "Asia", lat_range: (-35.0, 37.0), lon_range: (60.0, 180.0) }),
    (Region::Africa, BoundingBox { name: "Africa", lat_range: (-35.0, 37.0), lon_range: (-20.0, 51.0) }),
    (Region::SouthAmerica, BoundingBox { name: "South America", lat_range: (-47.0, -10.0), lon_range: (-82.0, -35.0) }),
    (Region::Australia, BoundingBox { name: "Australia", lat_range: (-47.0, -10.0), lon_range: (113.0, 154.0) }),
];

// ============================================================================
// Major metropolitan areas (urbanization = high)
// ============================================================================

pub static MAJOR_CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
    "London", "Berlin", "Paris", "Madrid", "Rome", "Amsterdam", "Vienna",
    "Tokyo", "Seoul", "Shanghai", "Beijing", "Mumbai", "Delhi", "Bangalore",
    "Sydney", "Melbourne", "Toronto", "Vancouver", "Montreal",
    "São Paulo", "Rio de Janeiro", "Mexico City", "Cairo", "Lagos",
];
