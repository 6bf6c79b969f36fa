//! Heat Advisor
//!
//! Location-aware urban heat mitigation recommendations for a chat assistant.
//!
//! Pipeline per request:
//! - `location/`: place-name extraction and geocoder output → climate, urbanization, geography
//! - `strategies/`: static catalog of six mitigation strategies
//! - `scorer`: effectiveness × location adjustments → ranked recommendations + priority actions
//! - `explanation/`: reasoning templates, narrative prompt and fallback, quick analysis
//! - `composer`: final payload, with or without a text-generation collaborator
//! - `chat`: orchestration over the geocoder and composer
//!
//! The HTTP server and the Nominatim / OpenAI clients need the `api` feature.

pub mod location;
pub mod strategies;
pub mod scorer;
pub mod explanation;
pub mod collaborators;
pub mod composer;
pub mod chat;
pub mod config;
pub mod error;
pub mod api_server;

// Re-export commonly used types
pub use location::{classify, Climate, GeocodeCandidate, LocationExtractor, LocationProfile, Urbanization};
pub use strategies::{StrategyDefinition, StrategyKey, CATALOG};
pub use scorer::{RecommendationSet, ScoringRules, StrategyScorer};
pub use explanation::{QuickAnalysis, ResponsePayload, ScoredRecommendation};
pub use collaborators::{ChatTurn, Geocoder, NarrativeGenerator, NarrativeRequest};
pub use composer::ResponseComposer;
pub use chat::ChatService;
pub use config::ServerConfig;
pub use error::{ChatError, GeocodeError, NarrativeError};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
