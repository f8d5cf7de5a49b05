use axum::response::Json;
use serde_json::{json, Value};

// GET / - Describe the available endpoints
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Club Hub API!",
        "endpoints": {
            "GET /clubs": "Get all clubs",
            "GET /clubs/<id>": "Get a specific club by ID",
            "POST /clubs": "Create a new club (requires: name, optional: description, memberCount, image)",
            "DELETE /clubs/<id>": "Delete a club by ID"
        }
    }))
}
