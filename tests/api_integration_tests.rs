// API Integration Tests
//
// Purpose: Exercise every HTTP endpoint through the full router with
// in-memory geocoder and narrative collaborators.
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use heat_advisor::{
        create_router, AppState, ChatService, GeocodeCandidate, GeocodeError, Geocoder,
        NarrativeError, NarrativeGenerator, NarrativeRequest,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt; // for oneshot

    const CLIENT_URL: &str = "http://localhost:3000";

    // Geocoder that knows Phoenix and fails for "Gotham"
    struct StubGeocoder;

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
            match query {
                "Phoenix" | "Phoenix, Arizona" => Ok(vec![GeocodeCandidate {
                    latitude: 33.4484,
                    longitude: -112.0741,
                    city: Some("Phoenix".to_string()),
                    state: Some("Arizona".to_string()),
                    country: Some("United States".to_string()),
                    country_code: Some("us".to_string()),
                    formatted_address: Some("Phoenix, Arizona, United States".to_string()),
                }]),
                "Gotham" => Err(GeocodeError::Http("connection refused".to_string())),
                _ => Ok(Vec::new()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNarrator {
        seen: Mutex<Vec<NarrativeRequest>>,
    }

    #[async_trait]
    impl NarrativeGenerator for RecordingNarrator {
        async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok("Plant more trees along transit corridors.".to_string())
        }
    }

    struct FailingNarrator;

    #[async_trait]
    impl NarrativeGenerator for FailingNarrator {
        async fn generate(&self, _: &NarrativeRequest) -> Result<String, NarrativeError> {
            Err(NarrativeError::Status(503, "overloaded".to_string()))
        }
    }

    // Helper: Create test app with an optional narrator
    fn create_test_app(narrator: Option<Arc<dyn NarrativeGenerator>>) -> axum::Router {
        let chat = ChatService::new(Arc::new(StubGeocoder), narrator).unwrap();
        let state = AppState::with_service(chat, CLIENT_URL).unwrap();
        create_router(state)
    }

    // Helper: POST a JSON body
    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app(None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "OK");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Chat Message - Resolved Location
    // =========================================================================

    #[tokio::test]
    async fn test_chat_message_phoenix() {
        let app = create_test_app(None);

        let response = app
            .oneshot(post_json(
                "/api/chat/message",
                json!({"message": "What can the government do to reduce heat in Phoenix, Arizona?"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;

        let location = &body["location"];
        assert_eq!(location["name"], "Phoenix, Arizona, United States");
        assert_eq!(location["climate"], "subtropical");
        assert_eq!(location["urbanization"], "high");
        assert_eq!(location["geography"]["coastal"], false);
        assert_eq!(location["geography"]["region"], "North America");
        assert_eq!(location["coordinates"]["latitude"], 33.4484);

        let recs = body["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty());
        assert!(recs.len() <= 6);

        // Sorted by score, descending; every field present
        let scores: Vec<u64> = recs.iter().map(|r| r["score"].as_u64().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        for rec in recs {
            assert!(rec["score"].as_u64().unwrap() <= 100);
            assert!(rec["effectiveness"].as_u64().unwrap() <= 100);
            assert!(rec["strategy"].is_string());
            assert!(rec["reasoning"].is_string());
            assert!(rec["methods"].is_array());
            assert!(rec["locationSpecific"].is_array());
            assert!(rec["cost"].is_string());
            assert!(rec["timeframe"].is_string());
            assert!(rec.get("adjustedScore").is_none());
            assert!(rec.get("key").is_none());
        }

        assert_eq!(body["reasoning"].as_array().unwrap().len(), 4);
        assert!(body["priorityActions"].as_array().unwrap().len() <= 3);

        let response_text = body["response"].as_str().unwrap();
        assert!(response_text.starts_with("Based on my analysis of Phoenix, Arizona, United States"));
    }

    #[tokio::test]
    async fn test_chat_message_generated_narrative_and_history() {
        let narrator = Arc::new(RecordingNarrator::default());
        let shared: Arc<dyn NarrativeGenerator> = narrator.clone();
        let app = create_test_app(Some(shared));

        // Web-client history shape, eight entries
        let history: Vec<Value> = (0..8)
            .map(|i| {
                json!({
                    "id": i,
                    "sender": if i % 2 == 0 { "user" } else { "bot" },
                    "text": format!("turn {}", i),
                    "timestamp": "2024-06-01T12:00:00Z"
                })
            })
            .collect();

        let response = app
            .oneshot(post_json(
                "/api/chat/message",
                json!({"message": "Cooling ideas for Phoenix", "conversationHistory": history}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["response"], "Plant more trees along transit corridors.");
        assert!(!body["recommendations"].as_array().unwrap().is_empty());

        let seen = narrator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].history.len(), 6);
        assert_eq!(seen[0].history[0].content, "turn 2");
        assert!(seen[0].user_prompt.contains("Cooling ideas for Phoenix"));
    }

    #[tokio::test]
    async fn test_failing_narrator_matches_fallback() {
        let request = || {
            post_json(
                "/api/chat/message",
                json!({"message": "heat in Phoenix, Arizona"}),
            )
        };

        let plain = create_test_app(None).oneshot(request()).await.unwrap();
        let failing_narrator: Arc<dyn NarrativeGenerator> = Arc::new(FailingNarrator);
        let failing = create_test_app(Some(failing_narrator))
            .oneshot(request())
            .await
            .unwrap();

        assert_eq!(plain.status(), StatusCode::OK);
        assert_eq!(failing.status(), StatusCode::OK);
        assert_eq!(json_response(plain).await, json_response(failing).await);
    }

    // =========================================================================
    // Section 3: Chat Message - No Location / Validation / Failures
    // =========================================================================

    #[tokio::test]
    async fn test_chat_message_without_location() {
        let app = create_test_app(None);

        let response = app
            .oneshot(post_json(
                "/api/chat/message",
                json!({"message": "how do cool roofs work?"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert!(body["location"].is_null());
        assert_eq!(body["recommendations"], json!([]));
        assert_eq!(body["reasoning"], json!([]));
        assert_eq!(body["priorityActions"], json!([]));
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("I couldn't identify a specific location"));
    }

    #[tokio::test]
    async fn test_chat_message_validation() {
        let bodies = [
            json!({}),
            json!({"message": 42}),
            json!({"message": "   "}),
            json!({"message": null}),
        ];

        for payload in bodies {
            let response = create_test_app(None)
                .oneshot(post_json("/api/chat/message", payload.clone()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {}", payload);
            let body = json_response(response).await;
            assert_eq!(body["error"], "Valid message is required");
        }
    }

    #[tokio::test]
    async fn test_chat_message_malformed_body() {
        let response = create_test_app(None)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/chat/message")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_message_geocoder_failure() {
        let response = create_test_app(None)
            .oneshot(post_json(
                "/api/chat/message",
                json!({"message": "Heat plan for Gotham"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_response(response).await;
        assert_eq!(
            body["error"],
            "An error occurred while processing your request. Please try again."
        );
    }

    // =========================================================================
    // Section 4: Analyze Location
    // =========================================================================

    #[tokio::test]
    async fn test_analyze_location() {
        let response = create_test_app(None)
            .oneshot(post_json(
                "/api/chat/analyze-location",
                json!({"locationName": "Phoenix"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;

        assert_eq!(body["location"]["city"], "Phoenix");
        let analysis = &body["analysis"];
        assert_eq!(analysis["climate"], "subtropical");
        assert_eq!(analysis["heatRisk"], "extreme");
        assert!(analysis["topStrategies"].as_array().unwrap().len() <= 3);
        assert!(analysis["challenges"].is_array());
        assert!(analysis["opportunities"].is_array());
    }

    #[tokio::test]
    async fn test_analyze_location_errors() {
        let cases = [
            (json!({}), StatusCode::BAD_REQUEST, "Location name is required"),
            (json!({"locationName": ""}), StatusCode::BAD_REQUEST, "Location name is required"),
            (json!({"locationName": "Atlantis"}), StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze location"),
            (json!({"locationName": "Gotham"}), StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze location"),
        ];

        for (payload, status, message) in cases {
            let response = create_test_app(None)
                .oneshot(post_json("/api/chat/analyze-location", payload))
                .await
                .unwrap();

            assert_eq!(response.status(), status);
            assert_eq!(json_response(response).await["error"], message);
        }
    }

    // =========================================================================
    // Section 5: Routing and CORS
    // =========================================================================

    #[tokio::test]
    async fn test_unknown_route() {
        let response = create_test_app(None)
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_response(response).await["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = create_test_app(None)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/chat/message")
                    .header(header::ORIGIN, CLIENT_URL)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            CLIENT_URL
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }
}
