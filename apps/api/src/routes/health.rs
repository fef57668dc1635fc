use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Bewerber-Agent CH Cloud API v1 – by Stefan Mosimann";

/// GET / and GET /health
/// Returns a static status object with a usage hint.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "message": "Nutze POST /api/search mit JSON body {role, city, radius}"
    }))
}
