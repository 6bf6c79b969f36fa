// Axum API Server Module
//
// Purpose: chat endpoint for the heat-mitigation assistant plus a direct
// location-analysis endpoint. All state is read-only; requests are independent.

#[cfg(feature = "api")]
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use serde_json::Value;

#[cfg(feature = "api")]
use crate::chat::{validate_message, ChatService, MISSING_LOCATION_NAME};

#[cfg(feature = "api")]
use crate::collaborators::{parse_history, NarrativeGenerator, NominatimGeocoder, OpenAiNarrator};

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::error::ChatError;

#[cfg(feature = "api")]
pub const CHAT_FAILURE_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

#[cfg(feature = "api")]
pub const ANALYZE_FAILURE_MESSAGE: &str = "Failed to analyze location";

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    /// Single allowed CORS origin
    pub client_origin: HeaderValue,
}

#[cfg(feature = "api")]
impl AppState {
    /// Wire the HTTP collaborators from configuration
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing geocoder ({})...", config.geocoder_url);
        let geocoder = Arc::new(NominatimGeocoder::new(
            &config.geocoder_url,
            &config.geocoder_user_agent,
            config.http_timeout,
        )?);

        let narrator: Option<Arc<dyn NarrativeGenerator>> = match &config.openai_api_key {
            Some(key) => {
                tracing::info!("Initializing narrative generator ({})...", config.openai_model);
                let narrator: Arc<dyn NarrativeGenerator> = Arc::new(OpenAiNarrator::new(
                    &config.openai_base_url,
                    key,
                    &config.openai_model,
                    config.http_timeout,
                )?);
                Some(narrator)
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, responses will use the built-in narrative");
                None
            }
        };

        let chat = ChatService::new(geocoder, narrator)?;
        Self::with_service(chat, &config.client_url)
    }

    /// State around an already-built service (tests inject stub collaborators here)
    pub fn with_service(chat: ChatService, client_url: &str) -> anyhow::Result<Self> {
        let client_origin = HeaderValue::from_str(client_url)
            .map_err(|e| anyhow::anyhow!("Invalid CLIENT_URL '{}': {}", client_url, e))?;

        Ok(Self {
            chat: Arc::new(chat),
            client_origin,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.client_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Chat endpoints
        .route("/api/chat/message", post(chat_message))
        .route("/api/chat/analyze-location", post(analyze_location))

        .fallback(route_not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Body fields stay untyped so a wrong type is a 400, not an extractor rejection
#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct ChatMessageRequest {
    message: Option<Value>,
    conversation_history: Option<Value>,
}

#[cfg(feature = "api")]
async fn chat_message(
    State(state): State<AppState>,
    payload: Option<Json<ChatMessageRequest>>,
) -> Result<Json<Value>, AppError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let message = validate_message(payload.message.as_ref())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let history = payload
        .conversation_history
        .as_ref()
        .and_then(Value::as_array)
        .map(|raw| parse_history(raw))
        .unwrap_or_default();

    tracing::info!("Processing chat message ({} history turns)", history.len());

    let response = state
        .chat
        .handle_message(message, &history)
        .await
        .map_err(|e| {
            tracing::error!("Error processing chat message: {}", e);
            AppError::Internal(CHAT_FAILURE_MESSAGE.to_string())
        })?;

    let body = serde_json::to_value(&response).map_err(|e| {
        tracing::error!("Failed to serialize chat response: {}", e);
        AppError::Internal(CHAT_FAILURE_MESSAGE.to_string())
    })?;

    Ok(Json(body))
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct AnalyzeLocationRequest {
    location_name: Option<Value>,
}

#[cfg(feature = "api")]
async fn analyze_location(
    State(state): State<AppState>,
    payload: Option<Json<AnalyzeLocationRequest>>,
) -> Result<Json<Value>, AppError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let location_name = payload
        .location_name
        .as_ref()
        .and_then(Value::as_str)
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_LOCATION_NAME.to_string()))?;

    tracing::info!("Analyzing location '{}'", location_name);

    let (location, analysis) = state
        .chat
        .analyze_location(location_name)
        .await
        .map_err(|e| {
            match &e {
                ChatError::LocationNotFound(_) => tracing::warn!("Location analysis: {}", e),
                _ => tracing::error!("Location analysis failed: {}", e),
            }
            AppError::Internal(ANALYZE_FAILURE_MESSAGE.to_string())
        })?;

    Ok(Json(serde_json::json!({
        "location": location,
        "analysis": analysis,
    })))
}

#[cfg(feature = "api")]
async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
    NotFound(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
