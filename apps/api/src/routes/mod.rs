pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/api/search", post(handlers::handle_search))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::{LlmError, ModelGateway};

    /// Canned gateway that records every prompt pair it receives.
    struct FakeGateway {
        configured: bool,
        reply: Result<String, String>,
        calls: AtomicUsize,
        last_user_prompt: std::sync::Mutex<Option<String>>,
    }

    impl FakeGateway {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                configured: true,
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_user_prompt: std::sync::Mutex::new(None),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                configured: true,
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_user_prompt: std::sync::Mutex::new(None),
            })
        }

        fn unconfigured() -> Arc<Self> {
            Arc::new(Self {
                configured: false,
                reply: Ok("[]".to_string()),
                calls: AtomicUsize::new(0),
                last_user_prompt: std::sync::Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelGateway for FakeGateway {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, _system: &str, user: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_user_prompt.lock().unwrap() = Some(user.to_string());
            self.reply.clone().map_err(|message| LlmError::Api {
                status: 503,
                message,
            })
        }
    }

    fn app(gateway: Arc<FakeGateway>) -> Router {
        build_router(AppState { gateway })
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn search_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_returns_service_info() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(app(FakeGateway::replying("[]")), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(
            body["service"],
            "Bewerber-Agent CH Cloud API v1 – by Stefan Mosimann"
        );
        assert!(body["message"].as_str().unwrap().contains("/api/search"));
    }

    #[tokio::test]
    async fn test_search_sanitizes_model_output() {
        let reply = format!(
            r#"[{{"title":"Elektriker","company":"X","description":"{}"}}]"#,
            "a".repeat(305)
        );
        let gateway = FakeGateway::replying(&reply);
        let (status, body) = send(
            app(gateway.clone()),
            search_request(r#"{"role": "Elektriker EFZ", "city": "Basel", "radius": 20}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let postings = body.as_array().unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0]["description"].as_str().unwrap().len(), 300);
        assert_eq!(postings[0]["id"], "web_1");
        assert_eq!(postings[0]["company"], "X");
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_search_forwards_query_into_prompt() {
        let gateway = FakeGateway::replying("[]");
        let (status, body) = send(
            app(gateway.clone()),
            search_request(r#"{"role": "Schreiner EFZ", "city": "Thun", "radius": 5}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
        let prompt = gateway.last_user_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Rolle: Schreiner EFZ\n"));
        assert!(prompt.contains("Stadt: Thun\n"));
        assert!(prompt.contains("Radius: 5 km"));
    }

    #[tokio::test]
    async fn test_non_string_fields_reach_the_model_as_text() {
        let gateway = FakeGateway::replying("[]");
        let (status, _) = send(
            app(gateway.clone()),
            search_request(r#"{"role": 5, "city": "Bern", "radius": "20"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.calls(), 1);
        let prompt = gateway.last_user_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Rolle: 5\nStadt: Bern\nRadius: 20 km"));
    }

    #[tokio::test]
    async fn test_empty_body_uses_default_query() {
        let gateway = FakeGateway::replying("[]");
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/search")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app(gateway.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        let prompt = gateway.last_user_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Rolle: Elektriker EFZ\nStadt: Basel\nRadius: 20 km"));
    }

    #[tokio::test]
    async fn test_non_json_model_output_returns_raw_with_502() {
        let gateway = FakeGateway::replying("not json");
        let (status, body) = send(app(gateway), search_request("{}")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["raw"], "not json");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_object_model_output_returns_raw_with_502() {
        let gateway = FakeGateway::replying(r#"{"jobs": []}"#);
        let (status, body) = send(app(gateway), search_request("{}")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["raw"], r#"{"jobs": []}"#);
    }

    #[tokio::test]
    async fn test_bare_string_body_is_400_without_model_call() {
        let gateway = FakeGateway::replying("[]");
        let (status, body) = send(app(gateway.clone()), search_request(r#""Basel""#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_is_500_without_model_call() {
        let gateway = FakeGateway::unconfigured();
        let (status, body) = send(app(gateway.clone()), search_request("{}")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "OPENAI_API_KEY fehlt auf dem Server");
        assert!(body["hint"].is_string());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_details() {
        let gateway = FakeGateway::failing("Service Unavailable");
        let (status, body) = send(app(gateway.clone()), search_request("{}")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Fehler bei OpenAI Anfrage");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("Service Unavailable"));
        assert_eq!(gateway.calls(), 1);
    }
}
