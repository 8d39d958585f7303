use axum::Router;

pub mod codes;
pub mod health;
pub mod inventory;
pub mod root;
pub mod users;

/// Creates the API routes, mounted at the root.
///
/// Returns a stateless Router (all sub-routers have state already applied).
/// Only repository clones are handed out, which share their collections.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(users::router(state))
        .merge(codes::router(state))
        .merge(inventory::router(state))
}

/// Creates a router with the /ready endpoint that probes both store files.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
