//! OpenStreetMap Nominatim geocoder

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::Geocoder;
use crate::error::GeocodeError;
use crate::location::GeocodeCandidate;

pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Nominatim's usage policy requires an identifying User-Agent
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build geocoder HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    state: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
}

impl NominatimPlace {
    fn into_candidate(self) -> Option<GeocodeCandidate> {
        let latitude = self.lat.parse::<f64>().ok().filter(|v| v.is_finite())?;
        let longitude = self.lon.parse::<f64>().ok().filter(|v| v.is_finite())?;
        let address = self.address;

        Some(GeocodeCandidate {
            latitude,
            longitude,
            city: address
                .city
                .or(address.town)
                .or(address.village)
                .or(address.municipality),
            state: address.state,
            country: address.country,
            country_code: address.country_code,
            formatted_address: self.display_name,
        })
    }
}

/// Decode a Nominatim `jsonv2` search body; places with unparseable
/// coordinates are skipped.
fn parse_places(body: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    Ok(places.into_iter().filter_map(NominatimPlace::into_candidate).collect())
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", "5"),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        let candidates = parse_places(&body)?;
        debug!("Geocoded '{}' to {} candidates", query, candidates.len());

        Ok(candidates)
    }
}
