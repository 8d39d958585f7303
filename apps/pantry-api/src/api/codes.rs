use axum::Router;
use domain_codes::{CodeService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = CodeService::new(state.codes.clone());
    handlers::router(service)
}
