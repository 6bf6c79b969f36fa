//! External collaborators
//!
//! The core only sees these capability traits. HTTP-backed implementations
//! (OpenStreetMap Nominatim, OpenAI-compatible chat completions) are compiled
//! with the `api` feature.

use async_trait::async_trait;

use crate::error::{GeocodeError, NarrativeError};
use crate::location::GeocodeCandidate;

pub mod history;

#[cfg(feature = "api")]
pub mod nominatim;
#[cfg(feature = "api")]
pub mod openai;

pub use history::{parse_history, recent_turns, ChatRole, ChatTurn, HISTORY_WINDOW};

#[cfg(feature = "api")]
pub use nominatim::NominatimGeocoder;
#[cfg(feature = "api")]
pub use openai::OpenAiNarrator;

/// Free-text place name → zero or more candidates, best first.
///
/// An empty result is a normal outcome, not an error.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError>;
}

/// Structured prompt for the text-generation collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeRequest {
    pub system_instruction: String,
    /// Already windowed to the most recent turns
    pub history: Vec<ChatTurn>,
    pub user_prompt: String,
}

/// Optional narrative capability; callers hold `Option<Arc<dyn NarrativeGenerator>>`
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}
