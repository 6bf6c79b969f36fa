//! Location handling: geocoder output → semantic profile
//!
//! - `types`: profile and classification enums
//! - `regions`: static bounding boxes and the major-metro list
//! - `classify`: pure classifier functions
//! - `extract`: best-effort place-name candidates from free text

pub mod types;
pub mod regions;
pub mod classify;
pub mod extract;

pub use types::{
    Climate, Coordinates, Elevation, GeocodeCandidate, Geography, LocationProfile, Region,
    Urbanization,
};
pub use classify::{
    classify, classify_climate, classify_elevation, classify_geography, classify_region,
    classify_urbanization, is_coastal,
};
pub use extract::LocationExtractor;
