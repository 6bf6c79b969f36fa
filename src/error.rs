use thiserror::Error;

/// Failures of a single chat or analysis request
#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing, malformed or blank input; never reaches the scorer
    #[error("{0}")]
    InvalidMessage(String),

    /// Explicit place lookup with zero geocoder results
    #[error("location \"{0}\" not found")]
    LocationNotFound(String),

    #[error("geocoding failed: {0}")]
    Geocoding(#[from] GeocodeError),
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Http(String),

    #[error("geocoder returned status {0}")]
    Status(u16),

    #[error("geocoder response parse: {0}")]
    Decode(String),
}

/// Text-generation collaborator failures. Always recovered by the composer.
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("chat completion request failed: {0}")]
    Http(String),

    #[error("chat completion returned status {0}: {1}")]
    Status(u16, String),

    #[error("chat completion response parse: {0}")]
    Decode(String),

    #[error("chat completion returned no content")]
    Empty,
}
