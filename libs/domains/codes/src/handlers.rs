use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    ErrorResponse, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CodeResult;
use crate::models::{CodeEntry, MessageResponse, RegisterCode};
use crate::repository::CodeRepository;
use crate::service::CodeService;

const TAG: &str = "codes";

/// OpenAPI documentation for the code registry
#[derive(OpenApi)]
#[openapi(
    paths(add_code, get_code),
    components(
        schemas(CodeEntry, RegisterCode, MessageResponse),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Global barcode registry")
    )
)]
pub struct ApiDoc;

/// Create the code registry router
pub fn router<R: CodeRepository + 'static>(service: CodeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/codes/add", post(add_code))
        .route("/codes/{barcode}", get(get_code))
        .with_state(shared_service)
}

/// Register a barcode or rename an existing one
#[utoipa::path(
    post,
    path = "/codes/add",
    tag = TAG,
    request_body = RegisterCode,
    responses(
        (status = 200, description = "Barcode registered or updated", body = MessageResponse),
        (
            status = 400,
            description = "Empty barcode: no scanner produces one and `/codes/{barcode}` cannot look it up",
            body = ErrorResponse
        ),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_code<R: CodeRepository>(
    State(service): State<Arc<CodeService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterCode>,
) -> CodeResult<Json<MessageResponse>> {
    let outcome = service.add_global_code(input).await?;
    Ok(Json(MessageResponse {
        message: outcome.message().to_string(),
    }))
}

/// Look up a barcode; unknown barcodes get a placeholder name
#[utoipa::path(
    get,
    path = "/codes/{barcode}",
    tag = TAG,
    params(
        ("barcode" = String, Path, description = "Scanned barcode")
    ),
    responses(
        (status = 200, description = "Stored or placeholder entry", body = CodeEntry),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_code<R: CodeRepository>(
    State(service): State<Arc<CodeService<R>>>,
    Path(barcode): Path<String>,
) -> CodeResult<Json<CodeEntry>> {
    let entry = service.get_code_info(&barcode).await?;
    Ok(Json(entry))
}
