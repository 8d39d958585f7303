use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "API is online")]
    pub message: String,
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "running".to_string(),
        message: "API is online".to_string(),
    })
}
