use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::{Modify, OpenApi};

/// Merges the domain documents, whose paths are mounted at the root.
struct DomainApis;

impl Modify for DomainApis {
    fn modify(&self, openapi: &mut OpenApiSpec) {
        openapi.merge(domain_users::handlers::ApiDoc::openapi());
        openapi.merge(domain_codes::handlers::ApiDoc::openapi());
        openapi.merge(domain_inventory::handlers::ApiDoc::openapi());
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root::root),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::root::RootResponse)
    ),
    modifiers(&DomainApis),
    info(
        title = "Pantry API",
        version = "0.1.0",
        description = "Accounts, barcode registry and per-user product inventory for the pantry mobile app"
    ),
    tags((name = "status", description = "Service status"))
)]
pub struct ApiDoc;
