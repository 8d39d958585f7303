use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use domain_codes::CodeRepository;
use domain_users::{ProductEntry, UserRepository};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{DeleteAllRequest, ProductRequest, ProductsResponse, ScanResponse, StatusResponse};
use crate::service::InventoryService;

const TAG: &str = "inventory";

/// OpenAPI documentation for inventory endpoints
#[derive(OpenApi)]
#[openapi(
    paths(scan, remove_product, delete_all_products, get_products),
    components(
        schemas(
            ProductRequest,
            DeleteAllRequest,
            ProductEntry,
            ScanResponse,
            StatusResponse,
            ProductsResponse
        ),
        responses(BadRequestValidationResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Per-user product inventory")
    )
)]
pub struct ApiDoc;

type SharedService<U, C> = Arc<InventoryService<U, C>>;

/// Create the inventory router
pub fn router<U, C>(service: InventoryService<U, C>) -> Router
where
    U: UserRepository + 'static,
    C: CodeRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/scan", post(scan))
        .route("/products/remove", post(remove_product))
        .route("/products/delete_all", post(delete_all_products))
        .route("/products/{email}", get(get_products))
        .with_state(shared_service)
}

/// Add scanned units to a user's inventory
#[utoipa::path(
    post,
    path = "/scan",
    tag = TAG,
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Units added", body = ScanResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn scan<U: UserRepository, C: CodeRepository>(
    State(service): State<SharedService<U, C>>,
    ValidatedJson(input): ValidatedJson<ProductRequest>,
) -> InventoryResult<Json<ScanResponse>> {
    let response = service.scan(input).await?;
    Ok(Json(response))
}

/// Remove units; the line disappears once its quantity reaches zero
#[utoipa::path(
    post,
    path = "/products/remove",
    tag = TAG,
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Units removed", body = StatusResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_product<U: UserRepository, C: CodeRepository>(
    State(service): State<SharedService<U, C>>,
    ValidatedJson(input): ValidatedJson<ProductRequest>,
) -> InventoryResult<Json<StatusResponse>> {
    let response = service.remove(input).await?;
    Ok(Json(response))
}

/// Remove a barcode from the inventory entirely
#[utoipa::path(
    post,
    path = "/products/delete_all",
    tag = TAG,
    request_body = DeleteAllRequest,
    responses(
        (status = 200, description = "Barcode removed", body = StatusResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_all_products<U: UserRepository, C: CodeRepository>(
    State(service): State<SharedService<U, C>>,
    ValidatedJson(input): ValidatedJson<DeleteAllRequest>,
) -> InventoryResult<Json<StatusResponse>> {
    let response = service.delete_all(input).await?;
    Ok(Json(response))
}

/// List a user's inventory
#[utoipa::path(
    get,
    path = "/products/{email}",
    tag = TAG,
    params(
        ("email" = String, Path, description = "Account email, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Inventory in stored order", body = ProductsResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<U: UserRepository, C: CodeRepository>(
    State(service): State<SharedService<U, C>>,
    Path(email): Path<String>,
) -> InventoryResult<Json<ProductsResponse>> {
    let response = service.get_products(&email).await?;
    Ok(Json(response))
}
