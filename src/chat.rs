//! Chat pipeline
//!
//! message → candidates → geocode → classify → score → compose.
//! Each request is independent; the service holds only read-only parts.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::collaborators::{ChatTurn, Geocoder, NarrativeGenerator};
use crate::composer::ResponseComposer;
use crate::error::{ChatError, GeocodeError};
use crate::explanation::narrative::NO_LOCATION_GUIDANCE;
use crate::explanation::quick_analysis::quick_analysis;
use crate::explanation::types::{QuickAnalysis, ResponsePayload};
use crate::location::{classify, GeocodeCandidate, LocationExtractor, LocationProfile};
use crate::scorer::StrategyScorer;

pub const INVALID_MESSAGE: &str = "Valid message is required";
pub const MISSING_LOCATION_NAME: &str = "Location name is required";

pub struct ChatService {
    geocoder: Arc<dyn Geocoder>,
    composer: ResponseComposer,
    scorer: StrategyScorer,
    extractor: LocationExtractor,
}

impl ChatService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        narrator: Option<Arc<dyn NarrativeGenerator>>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            geocoder,
            composer: ResponseComposer::new(narrator),
            scorer: StrategyScorer::default(),
            extractor: LocationExtractor::new()?,
        })
    }

    pub fn with_scorer(mut self, scorer: StrategyScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn has_narrator(&self) -> bool {
        self.composer.has_narrator()
    }

    /// Full chat turn. An unresolvable place is a normal payload with
    /// `location: null`, not an error.
    pub async fn handle_message(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<ResponsePayload, ChatError> {
        let Some((query, candidate)) = self.resolve_location(message).await? else {
            info!("No location found in message");
            return Ok(ResponsePayload::location_not_found(NO_LOCATION_GUIDANCE));
        };

        let profile = classify(&candidate, &query);
        info!(
            "Resolved '{}' to {} ({}, {} urbanization, coastal: {})",
            query,
            profile.name,
            profile.climate.as_str(),
            profile.urbanization.as_str(),
            profile.geography.coastal
        );

        let set = self.scorer.score(&profile);
        info!(
            "Scored {} recommendations, {} priority actions",
            set.recommendations.len(),
            set.priority_actions.len()
        );

        Ok(self.composer.compose(&profile, message, history, set).await)
    }

    /// Walk extracted candidates and keep the first that geocodes.
    ///
    /// A failed lookup is skipped; if nothing resolves and at least one
    /// lookup failed, the last failure is returned.
    pub async fn resolve_location(
        &self,
        message: &str,
    ) -> Result<Option<(String, GeocodeCandidate)>, ChatError> {
        let candidates = self.extractor.candidates(message);
        debug!("Location candidates: {:?}", candidates);

        let mut last_error: Option<GeocodeError> = None;

        for query in candidates {
            match self.geocoder.geocode(&query).await {
                Ok(results) => {
                    if let Some(first) = results.into_iter().next() {
                        return Ok(Some((query, first)));
                    }
                }
                Err(e) => {
                    warn!("Failed to geocode extracted location '{}': {}", query, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(ChatError::Geocoding(e)),
            None => Ok(None),
        }
    }

    /// Profile and quick analysis for an explicit place name
    pub async fn analyze_location(
        &self,
        location_name: &str,
    ) -> Result<(LocationProfile, QuickAnalysis), ChatError> {
        let name = location_name.trim();
        if name.is_empty() {
            return Err(ChatError::InvalidMessage(MISSING_LOCATION_NAME.to_string()));
        }

        let candidate = self
            .geocoder
            .geocode(name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::LocationNotFound(name.to_string()))?;

        let profile = classify(&candidate, name);
        let analysis = quick_analysis(&self.scorer, &profile);

        Ok((profile, analysis))
    }
}

/// Message must be a non-blank string
pub fn validate_message(raw: Option<&Value>) -> Result<&str, ChatError> {
    raw.and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ChatError::InvalidMessage(INVALID_MESSAGE.to_string()))
}
