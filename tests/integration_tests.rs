use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceExt;

use mobilityx::catalog;
use mobilityx::config::AppConfig;
use mobilityx::handlers;
use mobilityx::services::ai::{LlmProvider, Message, SamplingParams};
use mobilityx::services::places::{PlacePrediction, PlacesProvider};
use mobilityx::state::AppState;

// ── Mock Providers ──

/// Deterministic LLM: echoes back a fixed extraction for airport queries.
struct MockLlm;

#[async_trait]
impl LlmProvider for MockLlm {
    async fn chat(
        &self,
        _system_prompt: &str,
        messages: &[Message],
        _params: SamplingParams,
    ) -> anyhow::Result<String> {
        let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");

        if last.contains("airport") {
            Ok(r#"{"source":"Gandhipuram","destination":"Coimbatore Airport","intent":"fastest"}"#.to_string())
        } else {
            Ok(r#"{"source":null,"destination":null,"intent":"unknown"}"#.to_string())
        }
    }
}

struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn chat(
        &self,
        _system_prompt: &str,
        _messages: &[Message],
        _params: SamplingParams,
    ) -> anyhow::Result<String> {
        anyhow::bail!("connection refused")
    }
}

struct GarbageLlm;

#[async_trait]
impl LlmProvider for GarbageLlm {
    async fn chat(
        &self,
        _system_prompt: &str,
        _messages: &[Message],
        _params: SamplingParams,
    ) -> anyhow::Result<String> {
        Ok("I'm sorry, I can't help with that.".to_string())
    }
}

struct MockPlaces;

#[async_trait]
impl PlacesProvider for MockPlaces {
    async fn autocomplete(&self, input: &str) -> anyhow::Result<Vec<PlacePrediction>> {
        Ok(vec![
            PlacePrediction {
                description: format!("{input} Junction, Coimbatore"),
                place_id: "gplace_1".to_string(),
            },
            PlacePrediction {
                description: format!("{input} Road, Coimbatore"),
                place_id: "gplace_2".to_string(),
            },
        ])
    }
}

struct FailingPlaces;

#[async_trait]
impl PlacesProvider for FailingPlaces {
    async fn autocomplete(&self, _input: &str) -> anyhow::Result<Vec<PlacePrediction>> {
        anyhow::bail!("places backend unreachable")
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3001,
        openai_api_key: "".to_string(),
        openai_model: "gpt-3.5-turbo".to_string(),
        places_backend: "local".to_string(),
        google_maps_api_key: "".to_string(),
        routes_path: None,
        locations_path: None,
    }
}

fn test_state(
    llm: Option<Box<dyn LlmProvider>>,
    places: Option<Box<dyn PlacesProvider>>,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: test_config(),
        llm,
        places,
        routes: catalog::load_routes(None).unwrap(),
        gazetteer: catalog::load_locations(None).unwrap(),
        started_at: Instant::now(),
    })
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/query", post(handlers::query::parse_query))
        .route("/recommend", post(handlers::recommend::get_recommendations))
        .route("/locations/search", get(handlers::locations::search))
        .route("/locations/:id", get(handlers::locations::details))
        .with_state(state)
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ── Health ──

#[tokio::test]
async fn test_health() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_root_banner() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["message"], "MobilityX backend running");
}

// ── Query Parsing ──

#[tokio::test]
async fn test_query_empty_message_rejected() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post("/query", serde_json::json!({ "message": "   " })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_query_local_parser() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post(
            "/query",
            serde_json::json!({ "message": "Fast route to airport from my location" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["intent"], "fastest");
    assert!(json["data"]["destination"]
        .as_str()
        .unwrap()
        .contains("airport"));
}

#[tokio::test]
async fn test_query_remote_extraction() {
    let app = test_app(test_state(Some(Box::new(MockLlm)), None));
    let res = app
        .oneshot(json_post(
            "/query",
            serde_json::json!({ "message": "get me to the airport quickly" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["data"]["source"], "Gandhipuram");
    assert_eq!(json["data"]["destination"], "Coimbatore Airport");
    assert_eq!(json["data"]["intent"], "fastest");
}

#[tokio::test]
async fn test_query_remote_failure_falls_back() {
    let app = test_app(test_state(Some(Box::new(FailingLlm)), None));
    let res = app
        .oneshot(json_post(
            "/query",
            serde_json::json!({ "message": "cheap ride from Gandhipuram to KMCH Hospital" }),
        ))
        .await
        .unwrap();

    // provider error never propagates; the local tier answers
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["source"], "Gandhipuram");
    assert_eq!(json["data"]["destination"], "KMCH Hospital");
    assert_eq!(json["data"]["intent"], "cheapest");
}

#[tokio::test]
async fn test_query_unparsable_reply_falls_back() {
    let app = test_app(test_state(Some(Box::new(GarbageLlm)), None));
    let res = app
        .oneshot(json_post(
            "/query",
            serde_json::json!({ "message": "from KPR College to Gandhipuram" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["data"]["source"], "KPR College");
    assert_eq!(json["data"]["destination"], "Gandhipuram");
}

// ── Recommendations ──

#[tokio::test]
async fn test_recommend_sorted_by_cost() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post(
            "/recommend",
            serde_json::json!({
                "intent": {
                    "source": "KPR College",
                    "destination": "Gandhipuram",
                    "intent": "cheapest"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    let modes: Vec<&str> = data.iter().map(|r| r["mode"].as_str().unwrap()).collect();
    assert_eq!(modes, vec!["Bus", "Auto", "Cab"]);
    let costs: Vec<f64> = data.iter().map(|r| r["cost"].as_f64().unwrap()).collect();
    assert_eq!(costs, vec![50.0, 80.0, 150.0]);
}

#[tokio::test]
async fn test_recommend_missing_destination_rejected() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post(
            "/recommend",
            serde_json::json!({
                "intent": { "source": "KPR College", "destination": null, "intent": "unknown" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_recommend_no_match_is_empty() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post(
            "/recommend",
            serde_json::json!({
                "intent": { "source": "Ukkadam", "destination": "Singanallur", "intent": "unknown" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_recommend_max_results() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post(
            "/recommend",
            serde_json::json!({
                "intent": { "source": "kpr", "destination": "gandhipuram", "intent": "cheapest" },
                "max_results": 1
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["mode"], "Bus");
}

#[tokio::test]
async fn test_recommend_with_constraints() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(json_post(
            "/recommend",
            serde_json::json!({
                "intent": { "source": "KPR College", "destination": "Gandhipuram", "intent": "cheapest" },
                "constraints": { "max_cost": 100, "modes": ["Auto", "Cab"] }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["mode"], "Auto");
}

// ── Location Search ──

#[tokio::test]
async fn test_locations_search_gazetteer() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/search?q=gandhipuram")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "loc_002");
}

#[tokio::test]
async fn test_locations_search_requires_query() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_locations_search_type_filter() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/search?q=coimbatore&type=airport")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "loc_003");
}

#[tokio::test]
async fn test_locations_search_remote_backend() {
    let app = test_app(test_state(None, Some(Box::new(MockPlaces))));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/search?q=Ukkadam")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], "gplace_1");
    assert_eq!(data[0]["name"], "Ukkadam Junction, Coimbatore");
}

#[tokio::test]
async fn test_locations_search_remote_failure_is_bad_gateway() {
    let app = test_app(test_state(None, Some(Box::new(FailingPlaces))));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/search?q=Ukkadam")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(res).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_location_details() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/loc_003")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["data"]["name"], "Coimbatore Airport");
}

#[tokio::test]
async fn test_location_details_not_found() {
    let app = test_app(test_state(None, None));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/locations/loc_999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let json = body_json(res).await;
    assert_eq!(json["success"], false);
}
