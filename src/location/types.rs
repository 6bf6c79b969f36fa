use serde::{Deserialize, Serialize};

/// Coarse latitude-band climate zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    /// |lat| <= 23.5
    Tropical,
    /// |lat| <= 35
    Subtropical,
    /// |lat| <= 60
    Temperate,
    Polar,
}

impl Climate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Tropical => "tropical",
            Climate::Subtropical => "subtropical",
            Climate::Temperate => "temperate",
            Climate::Polar => "polar",
        }
    }

    /// Capitalised form for sentence starts ("Tropical climate makes...")
    pub fn display_name(&self) -> &'static str {
        match self {
            Climate::Tropical => "Tropical",
            Climate::Subtropical => "Subtropical",
            Climate::Temperate => "Temperate",
            Climate::Polar => "Polar",
        }
    }

    pub fn all() -> &'static [Climate] {
        &[
            Climate::Tropical,
            Climate::Subtropical,
            Climate::Temperate,
            Climate::Polar,
        ]
    }
}

/// City-size proxy derived from the major-metro list.
///
/// No `Low` tier is ever produced: the classifier only knows whether a city
/// is on the list, so anything named but unlisted is `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urbanization {
    High,
    Medium,
    Unknown,
}

impl Urbanization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urbanization::High => "high",
            Urbanization::Medium => "medium",
            Urbanization::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Elevation {
    High,
    LowMedium,
}

impl Elevation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Elevation::High => "high",
            Elevation::LowMedium => "low-medium",
        }
    }
}

/// Continental region from the bounding-box table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    #[serde(rename = "South America")]
    SouthAmerica,
    Australia,
    Unknown,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::SouthAmerica => "South America",
            Region::Australia => "Australia",
            Region::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    pub coastal: bool,
    pub elevation: Elevation,
    pub region: Region,
}

/// First result returned by the geocoding collaborator.
///
/// Only these fields are consumed; everything else the provider returns is
/// dropped at the client boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeCandidate {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    /// Administrative level 1 (state, province, region)
    pub state: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub formatted_address: Option<String>,
}

/// Semantic description of a resolved place, built fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub climate: Climate,
    pub urbanization: Urbanization,
    pub geography: Geography,
}

impl LocationProfile {
    pub fn is_coastal(&self) -> bool {
        self.geography.coastal
    }

    /// Country for prose, or `fallback` when the geocoder gave none
    pub fn country_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.country
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(fallback)
    }
}
