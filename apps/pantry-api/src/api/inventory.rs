use axum::Router;
use domain_codes::CodeService;
use domain_inventory::{InventoryService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let codes = CodeService::new(state.codes.clone());
    let service = InventoryService::new(state.users.clone(), codes);
    handlers::router(service)
}
